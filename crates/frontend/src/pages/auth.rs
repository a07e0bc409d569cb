use crate::components::forms::{FormError, SubmitButton, TextField};
use sportiva_client::SignUpRequest;
use sportiva_core::access::SignInForward;
use sportiva_core::form::{SignInDetails, SignUpDetails};
use sportiva_frontend_common::AppConfig;
use sportiva_frontend_common::components::Spinner;
use sportiva_frontend_common::hooks::use_form;
use sportiva_frontend_common::navigation::navigate;
use sportiva_frontend_common::services::{AuthService, auth::SignUpResult};
use sportiva_frontend_common::session::{SessionAction, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
}

/// Sign in and sign up
///
/// Signing in here returns the visitor to the page they came from. Anyone
/// arriving already signed in goes to the dashboard.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let session = use_session();
    let location = use_location();
    let mode = use_state(|| Mode::SignIn);

    let forward = use_mut_ref(SignInForward::new);

    let signed_in = session.session.is_some();
    let query = location
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    use_effect_with((session.is_loading, signed_in), move |(loading, signed_in)| {
        let target = forward
            .borrow_mut()
            .observe(*loading, *signed_in, &query, AppConfig::HOME_PATH);
        if let Some(target) = target {
            tracing::info!(to = %target, "signed in, leaving auth page");
            navigate(&target);
        }
    });

    if session.is_loading || signed_in {
        return html! { <Spinner text="Checking your session..." /> };
    }

    let switch_to = |next: Mode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(next))
    };

    html! {
        <section class="page auth">
            <h1>{"Sportiva"}</h1>
            <nav class="tabs">
                <button
                    type="button"
                    class={classes!("tab", (*mode == Mode::SignIn).then_some("active"))}
                    onclick={switch_to(Mode::SignIn)}
                >
                    {"Sign in"}
                </button>
                <button
                    type="button"
                    class={classes!("tab", (*mode == Mode::SignUp).then_some("active"))}
                    onclick={switch_to(Mode::SignUp)}
                >
                    {"Create account"}
                </button>
            </nav>
            {match *mode {
                Mode::SignIn => html! { <SignInForm /> },
                Mode::SignUp => html! { <SignUpForm /> },
            }}
        </section>
    }
}

#[function_component(SignInForm)]
fn sign_in_form() -> Html {
    let session = use_session();
    let form = use_form::<SignInDetails>();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            form.submit(
                |fields| async move {
                    AuthService::new()
                        .sign_in(&fields.email, &fields.password)
                        .await
                },
                false,
                move |signed_in| session.dispatch(SessionAction::SignIn(signed_in)),
            );
        })
    };

    html! {
        <form class="form" {onsubmit}>
            <TextField
                label="E-mail"
                input_type="email"
                value={form.fields().email.clone()}
                on_change={form.setter(|fields| &mut fields.email)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="Password"
                input_type="password"
                value={form.fields().password.clone()}
                on_change={form.setter(|fields| &mut fields.password)}
                disabled={form.is_submitting()}
            />
            <FormError error={form.error()} />
            <SubmitButton label="Sign in" submitting={form.is_submitting()} />
        </form>
    }
}

#[function_component(SignUpForm)]
fn sign_up_form() -> Html {
    let session = use_session();
    let form = use_form::<SignUpDetails>();
    let awaiting_confirmation = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let awaiting_confirmation = awaiting_confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            let awaiting_confirmation = awaiting_confirmation.clone();
            form.submit(
                |fields| async move {
                    let request = SignUpRequest {
                        email: fields.email,
                        password: fields.password,
                        first_name: fields.first_name,
                        last_name: fields.last_name,
                    };
                    AuthService::new().sign_up(&request).await
                },
                false,
                move |result| match result {
                    SignUpResult::SignedIn(signed_in) => {
                        session.dispatch(SessionAction::SignIn(signed_in));
                    }
                    SignUpResult::ConfirmationRequired => awaiting_confirmation.set(true),
                },
            );
        })
    };

    if *awaiting_confirmation {
        return html! {
            <div class="notice" role="status">
                <h2>{"Check your inbox"}</h2>
                <p>{"We sent you a link to confirm your e-mail address. Sign in once it is confirmed."}</p>
            </div>
        };
    }

    html! {
        <form class="form" {onsubmit}>
            <TextField
                label="First name"
                value={form.fields().first_name.clone()}
                on_change={form.setter(|fields| &mut fields.first_name)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="Last name"
                value={form.fields().last_name.clone()}
                on_change={form.setter(|fields| &mut fields.last_name)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="E-mail"
                input_type="email"
                value={form.fields().email.clone()}
                on_change={form.setter(|fields| &mut fields.email)}
                disabled={form.is_submitting()}
            />
            <TextField
                label="Password"
                input_type="password"
                value={form.fields().password.clone()}
                on_change={form.setter(|fields| &mut fields.password)}
                disabled={form.is_submitting()}
            />
            <FormError error={form.error()} />
            <SubmitButton label="Create account" submitting={form.is_submitting()} />
        </form>
    }
}
