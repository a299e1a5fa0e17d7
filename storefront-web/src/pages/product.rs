use crate::{
    api::StorefrontClient,
    components::{ErrorAlert, Loading},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::Product;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub id: i64,
}

/// Detail view for a single product.
#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let product = use_state(|| None::<Product>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let product = product.clone();
        let error = error.clone();
        let loading = loading.clone();
        let fallback = i18n.t("product.error");
        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match StorefrontClient::shared().get_product(id).await {
                    Ok(found) => product.set(Some(found)),
                    Err(err) => {
                        log::error!("failed to load product {id}: {err}");
                        product.set(None);
                        error.set(Some(err.user_message(&fallback)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let back = html! {
        <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost btn-sm gap-2 mb-6">
            <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
            {i18n.t("product.back")}
        </Link<MainRoute>>
    };

    let body = match (&*product, &*error) {
        _ if *loading => html! { <Loading label={i18n.t("product.loading")} /> },
        (_, Some(message)) => html! { <ErrorAlert message={message.clone()} /> },
        (Some(product), None) => html! {
            <div class="card lg:card-side bg-base-100 border border-base-300">
                if let Some(url) = &product.image_url {
                    <figure class="lg:w-1/2 bg-base-200">
                        <img src={url.clone()} alt={product.name.clone()} class="object-cover w-full" />
                    </figure>
                }
                <div class="card-body">
                    if let Some(category) = product.category_name() {
                        <span class="badge badge-ghost">
                            {format!("{}: {category}", i18n.t("product.category"))}
                        </span>
                    }
                    <h1 class="card-title text-3xl">{product.name.clone()}</h1>
                    <p class="text-3xl font-bold">{product.formatted_price()}</p>
                    <p class="text-base-content/70">
                        {
                            product
                                .description
                                .clone()
                                .unwrap_or_else(|| i18n.t("product.no_description"))
                        }
                    </p>
                </div>
            </div>
        },
        (None, None) => html! {},
    };

    html! {
        <div>
            {back}
            {body}
        </div>
    }
}
