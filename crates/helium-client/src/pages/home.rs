//! Home page (placeholder).

use yew::prelude::*;

/// Home page component - placeholder for the portal landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="page home-page">
            <h1>{ "СНТ «Гелий»" }</h1>
            <p>{ "Портал садоводов" }</p>
        </main>
    }
}
