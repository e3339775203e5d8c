use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__text">"Trip Planner"</span>
        </footer>
    }
}
