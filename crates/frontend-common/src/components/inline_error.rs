use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct InlineErrorProps {
    pub message: AttrValue,
    /// Offer a retry button when set
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Request failure rendered in place of the content it was loading
#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! { <button type="button" class="btn btn-link" {onclick}>{"Try again"}</button> }
    });

    html! {
        <div class="inline-error" role="alert">
            <p>{props.message.clone()}</p>
            {retry}
        </div>
    }
}
