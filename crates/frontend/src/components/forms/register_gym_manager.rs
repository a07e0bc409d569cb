use super::{FormError, SubmitButton, TextField};
use sportiva_core::form::GymManagerRegistration;
use sportiva_frontend_common::hooks::use_form;
use sportiva_frontend_common::services::RegistrationService;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterGymManagerFormProps {
    pub user_id: AttrValue,
    pub on_complete: Callback<()>,
}

#[function_component(RegisterGymManagerForm)]
pub fn register_gym_manager_form(props: &RegisterGymManagerFormProps) -> Html {
    let form = use_form::<GymManagerRegistration>();

    let onsubmit = {
        let form = form.clone();
        let user_id = props.user_id.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let user_id = user_id.clone();
            let on_complete = on_complete.clone();
            form.submit(
                move |fields| async move {
                    RegistrationService::new()
                        .register_gym_manager(&user_id, &fields.gym_name, &fields.city)
                        .await
                },
                false,
                move |()| on_complete.emit(()),
            );
        })
    };

    html! {
        <form class="form" {onsubmit}>
            <h3>{"Register as a gym manager"}</h3>
            <TextField
                label="Gym name"
                value={form.fields().gym_name.clone()}
                on_change={form.setter(|fields| &mut fields.gym_name)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="City"
                value={form.fields().city.clone()}
                on_change={form.setter(|fields| &mut fields.city)}
                disabled={form.is_submitting()}
            />
            <FormError error={form.error()} />
            <SubmitButton label="Register" submitting={form.is_submitting()} />
        </form>
    }
}
