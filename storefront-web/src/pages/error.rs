use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="hero py-24">
            <div class="hero-content text-center flex-col">
                <h1 class="text-6xl font-bold">{ "404" }</h1>
                <p class="text-xl">{ i18n.t("not_found.title") }</p>
                <p class="text-base-content/70">{ i18n.t("not_found.message") }</p>
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                    { i18n.t("not_found.back") }
                </Link<MainRoute>>
            </div>
        </div>
    }
}
