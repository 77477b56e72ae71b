//! Root component and application state.

use leptos::prelude::*;
use vitrine_commerce::prelude::*;

use crate::data::demo_catalog;
use crate::sections::{CartDrawer, CatalogSection, Footer, Header, Hero};

/// The single-page storefront.
///
/// All state lives here: the cart, the drawer and mobile-menu open flags,
/// and the selected category filter. Each click applies one synchronous
/// transition; rendering follows from the signals.
#[component]
pub fn App() -> impl IntoView {
    let catalog = StoredValue::new(demo_catalog());
    let cart = RwSignal::new(Cart::new());
    let cart_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);
    let filter = RwSignal::new(CategoryFilter::All);

    let filtered = Memo::new(move |_| {
        catalog.with_value(|c| {
            c.filtered(filter.get())
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        })
    });

    view! {
        <Header cart=cart cart_open=cart_open menu_open=menu_open/>
        <Hero/>
        <CatalogSection products=filtered filter=filter cart=cart/>
        <CartDrawer cart=cart open=cart_open/>
        <Footer/>
    }
}
