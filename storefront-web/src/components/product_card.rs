use shared::models::Product;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <Link<MainRoute>
            to={MainRoute::ProductDetail { id: product.id }}
            classes="card bg-base-100 border border-base-300 hover:shadow-lg transition-shadow"
        >
            if let Some(url) = &product.image_url {
                <figure class="h-48 w-full bg-base-200">
                    <img src={url.clone()} alt={product.name.clone()} class="object-cover h-full w-full" loading="lazy" />
                </figure>
            }
            <div class="card-body">
                if let Some(category) = product.category_name() {
                    <span class="badge badge-ghost gap-1">
                        <Icon icon_id={IconId::HeroiconsOutlineTag} class="w-3 h-3" />
                        {category.to_string()}
                    </span>
                }
                <h2 class="card-title">{product.name.clone()}</h2>
                <p class="text-2xl font-bold">{product.formatted_price()}</p>
                if let Some(description) = &product.description {
                    <p class="text-sm text-base-content/70 line-clamp-2">{description.clone()}</p>
                }
            </div>
        </Link<MainRoute>>
    }
}
