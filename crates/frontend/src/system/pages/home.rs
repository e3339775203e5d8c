use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::routes::routes::DEMO_PATH;

/// Landing page at `/`
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container container--xl">
                <Header show_search_bar=false />
            </div>
            <div class="container container--lg">
                <h1 class="page__title">"Trip Planner"</h1>
                <p>
                    <A href=DEMO_PATH>"Open the demo trip"</A>
                </p>
            </div>
            <Footer />
        </div>
    }
}
