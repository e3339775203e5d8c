use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Session restored from localStorage. User info is unknown until next login.
    pub fn restored() -> Self {
        Self {
            access_token: storage::load_access_token(),
            user_info: None,
        }
    }

    /// Current token snapshot, if any
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Storage read is synchronous, so the first render already sees a stored session.
    let (auth_state, set_auth_state) = signal(AuthState::restored());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: persist a successful login and publish it to the tree
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_access_token(&response.access_token);
    log::info!("signed in as {}", response.user.username);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

/// Helper: drop the session locally
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_access_token();
    log::info!("signed out");

    set_auth_state.set(AuthState::default());
}
