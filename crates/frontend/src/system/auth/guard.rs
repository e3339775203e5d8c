use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::routes::LOGIN_PATH;

/// Which branch an auth-gated page renders.
///
/// Derived from the token on every render and never stored. A missing token
/// and a token that has not been restored yet look the same here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Authenticated,
    Unauthenticated,
}

impl ViewState {
    /// Present means non-empty. An empty string left in storage counts as absent.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => ViewState::Authenticated,
            _ => ViewState::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == ViewState::Authenticated
    }
}

/// Prompt shown in place of gated content
#[component]
pub fn RequireLogin() -> impl IntoView {
    view! {
        <div class="require-login">
            <p class="require-login__text">"Please log in to see this page."</p>
            <span class="require-login__action">
                <A href=LOGIN_PATH>"Login"</A>
            </span>
        </div>
    }
}
