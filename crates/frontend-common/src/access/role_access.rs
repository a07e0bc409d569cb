use super::protected_route::{ProtectedRouteOptions, use_protected_route};
use crate::components::PageSkeleton;
use crate::config::AppConfig;
use sportiva_core::Role;
use yew::prelude::*;

#[derive(Properties)]
pub struct WithRoleAccessProps<C: BaseComponent> {
    pub required_role: Role,
    #[prop_or(AttrValue::Static(AppConfig::LOGIN_PATH))]
    pub navigate_to: AttrValue,
    /// Properties passed through to the wrapped component
    pub inner: C::Properties,
}

impl<C: BaseComponent> PartialEq for WithRoleAccessProps<C> {
    fn eq(&self, other: &Self) -> bool {
        self.required_role == other.required_role
            && self.navigate_to == other.navigate_to
            && self.inner == other.inner
    }
}

/// Render `C` only for users holding `required_role`
///
/// Anyone else is redirected to `navigate_to` with the current path as the
/// return parameter.
#[function_component(WithRoleAccess)]
pub fn with_role_access<C>(props: &WithRoleAccessProps<C>) -> Html
where
    C: BaseComponent,
    C::Properties: Clone,
{
    let route = use_protected_route(
        ProtectedRouteOptions::requiring([props.required_role])
            .redirect_to(props.navigate_to.to_string()),
    );

    if route.is_loading {
        return html! { <PageSkeleton /> };
    }
    if !route.is_authorized {
        return Html::default();
    }

    let inner = props.inner.clone();
    html! { <C ..inner /> }
}
