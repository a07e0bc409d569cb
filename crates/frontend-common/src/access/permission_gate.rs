use crate::roles::use_roles;
use crate::session::use_session;
use sportiva_core::{GateDecision, Role, RoleRequirement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PermissionGateProps {
    #[prop_or_default]
    pub children: Html,
    /// Roles to check; an empty list lets everyone through
    #[prop_or_default]
    pub required_roles: Vec<Role>,
    /// Require every listed role instead of any one of them
    #[prop_or_default]
    pub require_all: bool,
    /// Rendered when the check fails
    #[prop_or_default]
    pub fallback: Html,
}

/// Renders its children only for users holding the required roles
///
/// Nothing is rendered while role data is loading, so neither the children
/// nor the fallback flash before the decision is known.
#[function_component(PermissionGate)]
pub fn permission_gate(props: &PermissionGateProps) -> Html {
    let session = use_session();
    let roles = use_roles();

    let loading = session.is_loading || roles.is_loading_for(session.user_id());
    let requirement = RoleRequirement::new(props.required_roles.iter().copied(), props.require_all);

    match requirement.decide(roles.roles(), loading) {
        GateDecision::Pending => Html::default(),
        GateDecision::Allow => props.children.clone(),
        GateDecision::Deny => props.fallback.clone(),
    }
}
