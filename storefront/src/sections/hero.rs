//! Hero banner.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2>"Fake It Till You Make It"</h2>
            <p>"Beauty products for people with no time to be authentic"</p>
            <button class="btn btn--hero">"Discover Products"</button>
        </section>
    }
}
