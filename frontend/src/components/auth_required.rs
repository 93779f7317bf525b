//! Wrapper for elements that only make sense when signed in.

use crate::session::use_session;
use yew::prelude::*;

/// Element the wrapper renders as, so it fits its parent's content model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTag {
    #[default]
    Div,
    /// For use directly inside `<ul>`/`<ol>`
    Li,
    Span,
}

impl AuthTag {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthTag::Div => "div",
            AuthTag::Li => "li",
            AuthTag::Span => "span",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthRequiredProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub tag: AuthTag,
}

/// Children stay mounted; only visibility follows the session, so a
/// sign-out in another tab hides them without a reload.
#[function_component(AuthRequired)]
pub fn auth_required(props: &AuthRequiredProps) -> Html {
    let session = use_session();
    let hidden = session.state.hides_auth_required();

    html! {
        <@{props.tag.as_str()} class={classes!("auth-required", props.class.clone())} {hidden}>
            { props.children.clone() }
        </@>
    }
}
