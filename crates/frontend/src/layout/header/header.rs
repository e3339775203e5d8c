use crate::routes::routes::{HOME_PATH, LOGIN_PATH};
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use crate::system::auth::guard::ViewState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn Header(
    /// Render the search input next to the brand
    show_search_bar: bool,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let query = RwSignal::new(String::new());

    let is_logged_in =
        move || auth_state.with(|s| ViewState::from_token(s.token()).is_authenticated());
    let user_name = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };

    let search_bar = show_search_bar.then(|| {
        view! {
            <div class="header__search">
                {icon("search")}
                <Input value=query placeholder="Search places" />
            </div>
        }
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">
                    <A href=HOME_PATH>"Trip Planner"</A>
                </span>
                {search_bar}
            </div>
            <div class="header__actions">
                <Show
                    when=is_logged_in
                    fallback=|| view! { <A href=LOGIN_PATH>"Login"</A> }
                >
                    <span class="header__user">{user_name}</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| sign_out(set_auth_state)
                    >
                        {icon("logout")}
                        "Logout"
                    </Button>
                </Show>
            </div>
        </header>
    }
}
