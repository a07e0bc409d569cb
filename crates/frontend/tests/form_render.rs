//! Server-side renders of the shared form controls

use sportiva_frontend::components::forms::{FormError, SubmitButton};
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ControlsProps {
    submitting: bool,
    error: Option<String>,
}

#[function_component(Controls)]
fn controls(props: &ControlsProps) -> Html {
    html! {
        <form>
            <FormError error={props.error.clone()} />
            <SubmitButton label="Create gym" submitting={props.submitting} />
        </form>
    }
}

async fn render(submitting: bool, error: Option<&str>) -> String {
    LocalServerRenderer::<Controls>::with_props(ControlsProps {
        submitting,
        error: error.map(str::to_string),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn test_button_disabled_while_submitting() {
    let html = render(true, None).await;
    assert!(html.contains("disabled"), "{html}");
    assert!(html.contains("Submitting..."), "{html}");
    assert!(!html.contains("Create gym"), "{html}");
}

#[tokio::test]
async fn test_button_enabled_when_idle() {
    let html = render(false, None).await;
    assert!(!html.contains("disabled"), "{html}");
    assert!(html.contains("Create gym"), "{html}");
}

#[tokio::test]
async fn test_failure_message_shown_inline() {
    let html = render(false, Some("duplicate")).await;
    assert!(html.contains(r#"role="alert""#), "{html}");
    assert!(html.contains("duplicate"), "{html}");
}
