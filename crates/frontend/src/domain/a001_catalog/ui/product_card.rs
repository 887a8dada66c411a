use contracts::domain::a001_catalog::Product;
use leptos::prelude::*;

use crate::layout::global_context::use_storefront_context;
use crate::shared::icons::icon;

fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_storefront_context();
    let Product {
        name,
        favourite,
        price,
        image,
        description,
        ..
    } = product;

    view! {
        <article class="product-card">
            {image.map(|src| view! { <img class="product-card__image" src=src alt=name.clone() loading="lazy" /> })}
            <div class="product-card__body">
                <h3 class="product-card__name">
                    <span>{name.clone()}</span>
                    {favourite.then(|| view! {
                        <span class="product-card__favourite" title=move || ctx.tr("product.favourite")>
                            {icon("heart")}
                        </span>
                    })}
                </h3>
                {price.map(|p| view! { <div class="product-card__price">{format_price(p)}</div> })}
                {description.map(|d| view! { <p class="product-card__description">{d}</p> })}
            </div>
        </article>
    }
}
