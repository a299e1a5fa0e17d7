use crate::{
    api::StorefrontClient,
    components::{CategoryFilterBar, ErrorAlert, Loading, ProductCard},
};
use i18nrs::yew::use_translation;
use shared::CategoryFilter;
use shared::models::{Category, Product};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;

/// Tracks whether a product request still belongs to the selected filter.
/// Clones share the flag, so the effect cleanup can retire the copy held by
/// the in-flight request.
#[derive(Clone, Debug, Default)]
struct ProductRequest(Rc<Cell<bool>>);

impl ProductRequest {
    fn retire(&self) {
        self.0.set(true);
    }

    fn is_current(&self) -> bool {
        !self.0.get()
    }

    /// Hand `value` to `apply` unless the request was retired first.
    fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current() {
            apply(value);
            true
        } else {
            false
        }
    }
}

/// Catalog page: category filter bar above the product grid.
///
/// Categories are fetched once; products are fetched on mount and again every
/// time the filter changes. The two requests update disjoint state. A product
/// response that arrives after the filter moved on is dropped.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let categories = use_state(Vec::<Category>::new);
    let products = use_state(Vec::<Product>::new);
    let filter = use_state_eq(CategoryFilter::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let categories = categories.clone();
        use_mount(move || {
            spawn_local(async move {
                match StorefrontClient::shared().list_categories().await {
                    Ok(list) => categories.set(list),
                    Err(err) => log::error!("failed to load categories: {err}"),
                }
            });
        });
    }

    {
        let products = products.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fallback = i18n.t("catalog.error");
        use_effect_with(*filter, move |filter| {
            let filter = *filter;
            log::debug!("loading products for {filter}");
            loading.set(true);
            error.set(None);
            let request = ProductRequest::default();
            let in_flight = request.clone();
            spawn_local(async move {
                let result = StorefrontClient::shared().list_products(filter).await;
                let delivered = in_flight.deliver(result, |result| {
                    match result {
                        Ok(list) => products.set(list),
                        Err(err) => {
                            log::error!("failed to load products: {err}");
                            error.set(Some(err.user_message(&fallback)));
                        }
                    }
                    loading.set(false);
                });
                if !delivered {
                    log::debug!("dropped stale products for {filter}");
                }
            });
            move || request.retire()
        });
    }

    let on_select = {
        let filter = filter.clone();
        Callback::from(move |selected: CategoryFilter| filter.set(selected))
    };

    let body = if *loading {
        html! { <Loading label={i18n.t("catalog.loading")} /> }
    } else if products.is_empty() {
        html! {
            <div class="text-center py-12 bg-base-100 rounded-lg border border-base-300">
                <p class="text-base-content/60">{i18n.t("catalog.empty")}</p>
            </div>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                { for products.iter().map(|product| html! {
                    <ProductCard key={product.id.to_string()} product={product.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div>
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-4">{i18n.t("catalog.title")}</h1>
                <CategoryFilterBar
                    categories={(*categories).clone()}
                    selected={*filter}
                    {on_select}
                />
            </div>
            if let Some(message) = &*error {
                <div class="mb-6"><ErrorAlert message={message.clone()} /></div>
            }
            {body}
        </div>
    }
}
