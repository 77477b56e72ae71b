//! Slide-over cart drawer.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;

use crate::data::DEMO_CURRENCY;

#[component]
pub fn CartDrawer(cart: RwSignal<Cart>, open: RwSignal<bool>) -> impl IntoView {
    let count = Memo::new(move |_| cart.with(|c| c.item_count()));
    let total = Memo::new(move |_| cart.with(|c| c.total(DEMO_CURRENCY)));
    let has_items = Memo::new(move |_| cart.with(|c| !c.is_empty()));

    view! {
        <Show when=move || open.get()>
            <div class="cart-overlay" on:click=move |_| open.set(false)></div>
            <aside class="cart-drawer">
                <div class="cart-drawer-header">
                    <h3>"Cart (" {move || count.get()} ")"</h3>
                    <button class="cart-close" on:click=move |_| open.set(false)>"✕"</button>
                </div>

                <div class="cart-lines">
                    <Show
                        when=move || has_items.get()
                        fallback=|| view! { <p class="cart-empty">"Your cart is empty"</p> }
                    >
                        // Quantity is part of the key so a stepped line re-renders.
                        <For
                            each=move || cart.with(|c| c.items().to_vec())
                            key=|item| (item.product.id, item.quantity)
                            let:item
                        >
                            <CartLine item=item cart=cart/>
                        </For>
                    </Show>
                </div>

                <Show when=move || has_items.get()>
                    <div class="cart-drawer-footer">
                        <div class="cart-total-row">
                            <span>"Total:"</span>
                            <strong class="cart-total">{move || total.get().display()}</strong>
                        </div>
                        // Decorative: there is no checkout flow behind this.
                        <button class="btn btn--checkout">"Checkout"</button>
                    </div>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLine(item: LineItem, cart: RwSignal<Cart>) -> impl IntoView {
    let id = item.product.id;
    let name = item.product.name.clone();
    let image_url = item.product.image_url.clone();
    let price = item.product.price.display();
    let quantity = item.quantity;

    // Stepping down at quantity 1 removes the line (quantity-0 rule).
    let decrement = move |_| {
        cart.update(|c| {
            c.set_quantity(id, quantity.saturating_sub(1));
        });
        leptos::logging::log!("cart: set product {} quantity to {}", id, quantity - 1);
    };
    let increment = move |_| {
        cart.update(|c| {
            c.set_quantity(id, quantity + 1);
        });
        leptos::logging::log!("cart: set product {} quantity to {}", id, quantity + 1);
    };
    let remove = move |_| {
        cart.update(|c| {
            c.remove(id);
        });
        leptos::logging::log!("cart: removed product {}", id);
    };

    view! {
        <div class="cart-line">
            <img class="cart-line-image" src=image_url alt=name.clone()/>
            <div class="cart-line-info">
                <h4 class="cart-line-name">{name}</h4>
                <p class="cart-line-price">{price}</p>
                <div class="quantity-stepper">
                    <button class="stepper-button" on:click=decrement>"−"</button>
                    <span class="stepper-count">{quantity}</span>
                    <button class="stepper-button" on:click=increment>"+"</button>
                </div>
            </div>
            <button class="cart-line-remove" on:click=remove>"✕"</button>
        </div>
    }
}
