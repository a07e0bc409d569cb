use super::{FormError, SubmitButton, TextField};
use sportiva_core::form::TrainerRegistration;
use sportiva_frontend_common::hooks::use_form;
use sportiva_frontend_common::services::RegistrationService;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterTrainerFormProps {
    pub user_id: AttrValue,
    pub on_complete: Callback<()>,
}

#[function_component(RegisterTrainerForm)]
pub fn register_trainer_form(props: &RegisterTrainerFormProps) -> Html {
    let form = use_form::<TrainerRegistration>();

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
                        .register_trainer(&user_id, &fields.experience, &fields.specialty)
                        .await
                },
                false,
                move |()| on_complete.emit(()),
            );
        })
    };

    html! {
        <form class="form" {onsubmit}>
            <h3>{"Register as a trainer"}</h3>
            <TextField
                label="Years of experience"
                input_type="number"
                value={form.fields().experience.clone()}
                on_change={form.setter(|fields| &mut fields.experience)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="Specialty"
                value={form.fields().specialty.clone()}
                on_change={form.setter(|fields| &mut fields.specialty)}
                disabled={form.is_submitting()}
            />
            <FormError error={form.error()} />
            <SubmitButton label="Register" submitting={form.is_submitting()} />
        </form>
    }
}
