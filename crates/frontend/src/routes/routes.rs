use crate::pages::demo::DemoPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

pub const HOME_PATH: &str = "/";
pub const DEMO_PATH: &str = "/demo";
pub const LOGIN_PATH: &str = "/login";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment("demo") view=DemoPage />
                <Route path=StaticSegment("login") view=LoginPage />
            </Routes>
        </Router>
    }
}
