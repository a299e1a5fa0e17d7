use crate::{
    api::StorefrontClient,
    components::{ErrorAlert, Loading},
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::{Category, Product};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Clone, PartialEq, Default)]
struct Overview {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Admin console. Route guarding happens in the router; this page only
/// renders a catalog overview.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());
    let overview = use_state(|| None::<Overview>);
    let error = use_state(|| None::<String>);

    {
        let overview = overview.clone();
        let error = error.clone();
        let fallback = i18n.t("admin.error");
        use_mount(move || {
            spawn_local(async move {
                let client = StorefrontClient::shared();
                let products = client.list_products(shared::CategoryFilter::All).await;
                let categories = client.list_categories().await;
                match (products, categories) {
                    (Ok(products), Ok(categories)) => {
                        overview.set(Some(Overview {
                            products,
                            categories,
                        }));
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        log::error!("failed to load admin overview: {err}");
                        error.set(Some(err.user_message(&fallback)));
                    }
                }
            });
        });
    }

    let stat = |icon: IconId, label: String, value: usize| {
        html! {
            <div class="stat">
                <div class="stat-figure text-primary">
                    <Icon icon_id={icon} class="w-8 h-8" />
                </div>
                <div class="stat-title">{label}</div>
                <div class="stat-value">{value.to_string()}</div>
            </div>
        }
    };

    let body = match (&*overview, &*error) {
        (_, Some(message)) => html! { <ErrorAlert message={message.clone()} /> },
        (None, None) => html! { <Loading label={i18n.t("admin.loading")} /> },
        (Some(overview), None) => html! {
            <>
                <div class="stats shadow w-full mb-8 bg-base-100">
                    {stat(IconId::HeroiconsOutlineShoppingBag, i18n.t("admin.products"), overview.products.len())}
                    {stat(IconId::HeroiconsOutlineTag, i18n.t("admin.categories"), overview.categories.len())}
                </div>
                <div class="overflow-x-auto bg-base-100 rounded-lg border border-base-300">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"#"}</th>
                                <th>{i18n.t("admin.name")}</th>
                                <th>{i18n.t("admin.category")}</th>
                                <th class="text-right">{i18n.t("admin.price")}</th>
                            </tr>
                        </thead>
                        <tbody>
                        {
                            for overview.products.iter().map(|product| html! {
                                <tr key={product.id.to_string()}>
                                    <td>{product.id.to_string()}</td>
                                    <td>
                                        <Link<MainRoute> to={MainRoute::ProductDetail { id: product.id }} classes="link link-hover">
                                            {product.name.clone()}
                                        </Link<MainRoute>>
                                    </td>
                                    <td>
                                        {
                                            product
                                                .category_name()
                                                .map_or_else(|| i18n.t("admin.uncategorized"), str::to_string)
                                        }
                                    </td>
                                    <td class="text-right">{product.formatted_price()}</td>
                                </tr>
                            })
                        }
                        </tbody>
                    </table>
                </div>
            </>
        },
    };

    html! {
        <div>
            <div class="flex items-baseline justify-between mb-8">
                <h1 class="text-3xl font-bold">{i18n.t("admin.title")}</h1>
                if let Some(user) = session.user() {
                    <span class="text-sm text-base-content/70">{user.badge()}</span>
                }
            </div>
            {body}
        </div>
    }
}
