//! Catalog section: category filter bar and product grid.

use leptos::prelude::*;
use vitrine_commerce::catalog::MAX_STARS;
use vitrine_commerce::prelude::*;

#[component]
pub fn CatalogSection(
    products: Memo<Vec<Product>>,
    filter: RwSignal<CategoryFilter>,
    cart: RwSignal<Cart>,
) -> impl IntoView {
    view! {
        <main class="catalog">
            <div class="catalog-toolbar">
                <h3>"Our Products"</h3>
                <FilterBar filter=filter/>
            </div>
            <div class="product-grid">
                <For each=move || products.get() key=|p| p.id let:product>
                    <ProductCard product=product cart=cart/>
                </For>
            </div>
        </main>
    }
}

#[component]
fn FilterBar(filter: RwSignal<CategoryFilter>) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || filter.get().as_str()
            on:change=move |ev| {
                filter.set(CategoryFilter::from_str(&event_target_value(&ev)));
            }
        >
            <option value={CategoryFilter::ALL_VALUE}>"All products"</option>
            {Category::ALL
                .iter()
                .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
fn ProductCard(product: Product, cart: RwSignal<Cart>) -> impl IntoView {
    let name = product.name.clone();
    let description = product.description.clone();
    let image_url = product.image_url.clone();
    let price = product.price.display();
    let original_price = product.original_price.map(|m| m.display());
    let review_count = product.review_count;
    let filled = product.filled_stars();
    let bestseller = product.bestseller;

    let add_to_cart = {
        let product = product.clone();
        move |_| {
            cart.update(|c| c.add(&product));
            leptos::logging::log!("cart: added product {}", product.id);
        }
    };

    view! {
        <div class="product-card">
            <div class="product-media">
                <img class="product-image" src=image_url alt=name.clone()/>
                <Show when=move || bestseller>
                    <span class="badge badge--bestseller">"Bestseller"</span>
                </Show>
            </div>
            <div class="product-info">
                <h4 class="product-name">{name}</h4>
                <p class="product-description">{description}</p>
                <div class="product-rating">
                    {(0..MAX_STARS)
                        .map(|i| {
                            let class = if i < filled { "star star--filled" } else { "star" };
                            view! { <span class=class>"★"</span> }
                        })
                        .collect_view()}
                    <span class="review-count">"(" {review_count} ")"</span>
                </div>
                <div class="product-buy-row">
                    <div class="product-prices">
                        <span class="price-current">{price}</span>
                        {original_price
                            .map(|original| view! { <span class="price-original">{original}</span> })}
                    </div>
                    <button class="btn btn--add" on:click=add_to_cart>"Add"</button>
                </div>
            </div>
        </div>
    }
}
