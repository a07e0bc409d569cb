use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AccessDeniedProps {
    #[prop_or(AttrValue::Static("You do not have access to this page."))]
    pub message: AttrValue,
}

/// Notice shown in place of a page the user may not see
#[function_component(AccessDenied)]
pub fn access_denied(props: &AccessDeniedProps) -> Html {
    html! {
        <div class="access-denied" role="alert">
            <h2>{"Access blocked"}</h2>
            <p>{props.message.clone()}</p>
        </div>
    }
}
