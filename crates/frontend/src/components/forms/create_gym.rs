use super::{FormError, SubmitButton, TextField};
use sportiva_core::form::GymDetails;
use sportiva_frontend_common::hooks::use_form;
use sportiva_frontend_common::services::GymService;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateGymFormProps {
    pub owner_user_id: AttrValue,
    /// Called once with the id of the new gym
    pub on_created: Callback<String>,
}

#[function_component(CreateGymForm)]
pub fn create_gym_form(props: &CreateGymFormProps) -> Html {
    let form = use_form::<GymDetails>();

    let onsubmit = {
        let form = form.clone();
        let owner_user_id = props.owner_user_id.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let owner_user_id = owner_user_id.to_string();
            let on_created = on_created.clone();
            form.submit(
                move |fields| async move {
                    let gym = fields.into_new_gym(owner_user_id);
                    GymService::new().create_gym(&gym).await
                },
                true,
                move |id| on_created.emit(id),
            );
        })
    };

    html! {
        <form class="form" {onsubmit}>
            <h3>{"Create a gym"}</h3>
            <TextField
                label="Name"
                value={form.fields().name.clone()}
                on_change={form.setter(|fields| &mut fields.name)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="Address"
                value={form.fields().address.clone()}
                on_change={form.setter(|fields| &mut fields.address)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="Phone"
                input_type="tel"
                value={form.fields().phone.clone()}
                on_change={form.setter(|fields| &mut fields.phone)}
                disabled={form.is_submitting()}
            />
            <FormError error={form.error()} />
            <SubmitButton label="Create gym" submitting={form.is_submitting()} />
        </form>
    }
}
