use super::{FormError, SelectField, SubmitButton, TextField};
use sportiva_core::form::GymMembership;
use sportiva_core::{ManagedGym, RequestFailure, Role};
use sportiva_frontend_common::hooks::use_form;
use sportiva_frontend_common::services::GymService;
use yew::prelude::*;

/// Roles a manager may grant from this form
const ASSIGNABLE_ROLES: [Role; 2] = [Role::Member, Role::Trainer];

#[derive(Properties, PartialEq)]
pub struct AddUserToGymFormProps {
    /// Manager performing the change
    pub added_by: AttrValue,
    pub gyms: Vec<ManagedGym>,
    #[prop_or_default]
    pub on_added: Callback<()>,
}

#[function_component(AddUserToGymForm)]
pub fn add_user_to_gym_form(props: &AddUserToGymFormProps) -> Html {
    let form = use_form::<GymMembership>();
    let added = use_state(|| false);

    // Fall back to the first gym until the manager picks one
    let gym_id = form
        .fields()
        .gym_id
        .clone()
        .filter(|id| props.gyms.iter().any(|gym| &gym.id == id))
        .or_else(|| props.gyms.first().map(|gym| gym.id.clone()));

    let on_user_id = {
        let form = form.clone();
        let added = added.clone();
        Callback::from(move |value: String| {
            added.set(false);
            form.edit(move |fields| fields.user_id = value);
        })
    };
    let on_gym = {
        let form = form.clone();
        Callback::from(move |value: String| form.edit(move |fields| fields.gym_id = Some(value)))
    };
    let on_role = {
        let form = form.clone();
        Callback::from(move |value: String| match value.parse::<Role>() {
            Ok(role) => form.edit(move |fields| fields.role = role),
            Err(e) => tracing::warn!("ignoring role selection: {e}"),
        })
    };

    let onsubmit = {
        let form = form.clone();
        let gym_id = gym_id.clone();
        let added = added.clone();
        let added_by = props.added_by.clone();
        let on_added = props.on_added.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let gym_id = gym_id.clone();
            let added_by = added_by.to_string();
            let (form_after, added, on_added) = (form.clone(), added.clone(), on_added.clone());
            form.submit(
                move |fields| async move {
                    let membership = GymMembership { gym_id, ..fields };
                    let Some(row) = membership.into_gym_user(added_by) else {
                        return Err(RequestFailure::from_message(Some("Pick a gym first.")));
                    };
                    GymService::new().add_user_to_gym(&row).await
                },
                false,
                move |()| {
                    form_after.edit(|fields| fields.user_id.clear());
                    added.set(true);
                    on_added.emit(());
                },
            );
        })
    };

    if props.gyms.is_empty() {
        return html! {
            <p class="muted">{"Create a gym before adding users to it."}</p>
        };
    }

    let gym_options = props
        .gyms
        .iter()
        .map(|gym| (gym.id.clone(), gym.name.clone()))
        .collect::<Vec<_>>();
    let role_options = ASSIGNABLE_ROLES
        .iter()
        .map(|role| (role.as_str().to_string(), role.label().to_string()))
        .collect::<Vec<_>>();

    html! {
        <form class="form" {onsubmit}>
            <h3>{"Add a user to a gym"}</h3>
            <TextField
                label="User id"
                value={form.fields().user_id.clone()}
                on_change={on_user_id}
                disabled={form.is_submitting()}
            />
            <SelectField
                label="Gym"
                value={gym_id.unwrap_or_default()}
                options={gym_options}
                on_change={on_gym}
                disabled={form.is_submitting()}
            />
            <SelectField
                label="Role"
                value={form.fields().role.as_str().to_string()}
                options={role_options}
                on_change={on_role}
                disabled={form.is_submitting()}
            />
            <FormError error={form.error()} />
            if *added {
                <p class="form-success">{"User added."}</p>
            }
            <SubmitButton label="Add user" submitting={form.is_submitting()} />
        </form>
    }
}
