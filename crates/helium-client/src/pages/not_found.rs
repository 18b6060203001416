//! 404 Not Found page.

use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::components::{Card, CardContent};
use crate::routes::Route;

/// 404 Not Found page.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <Card class="not-found-card">
                <CardContent>
                    <div class="not-found-header">
                        <Icon data={IconData::LUCIDE_ALERT_CIRCLE} width="32px" height="32px" class="not-found-icon" />
                        <h1>{ "404 Страница не найдена" }</h1>
                    </div>
                    <p class="not-found-description">
                        { "Кажется, здесь ничего нет. Возможно, мы переместили страницу, или она устарела. Попробуйте начать с " }
                        <Link<Route> to={Route::Home} classes="not-found-home-link">
                            { "главной страницы" }
                        </Link<Route>>
                        { "." }
                    </p>
                </CardContent>
            </Card>
        </main>
    }
}
