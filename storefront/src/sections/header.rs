//! Site header: brand, navigation, cart button with badge, mobile menu.

use leptos::prelude::*;
use vitrine_commerce::Cart;

#[component]
pub fn Header(
    cart: RwSignal<Cart>,
    cart_open: RwSignal<bool>,
    menu_open: RwSignal<bool>,
) -> impl IntoView {
    let count = Memo::new(move |_| cart.with(|c| c.item_count()));

    view! {
        <header class="site-header">
            <div class="header-inner">
                <h1 class="brand">"Vitrine Beauty"</h1>

                <nav class="nav nav--desktop">
                    <a href="#">"Home"</a>
                    <a href="#">"Products"</a>
                    <a href="#">"About"</a>
                    <a href="#">"Contact"</a>
                </nav>

                <div class="header-actions">
                    <button class="cart-button" on:click=move |_| cart_open.set(true)>
                        "Cart"
                        <Show when=move || { count.get() > 0 }>
                            <span class="cart-badge">{move || count.get()}</span>
                        </Show>
                    </button>
                    <button
                        class="menu-toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav nav--mobile">
                    <a href="#">"Home"</a>
                    <a href="#">"Products"</a>
                    <a href="#">"About"</a>
                    <a href="#">"Contact"</a>
                </nav>
            </Show>
        </header>
    }
}
