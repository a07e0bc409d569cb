use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub text: AttrValue,
}

/// Busy indicator for waits that have no content shape to sketch
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner-ring" aria-hidden="true"></span>
            <span class="spinner-text">{props.text.clone()}</span>
        </div>
    }
}
