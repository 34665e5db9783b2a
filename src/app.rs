use leptos::prelude::*;

use crate::pages::TrackerPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <TrackerPage />
        </main>
    }
}
