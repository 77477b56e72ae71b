//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <h3 class="brand">"Vitrine Beauty"</h3>
            <p>"Because being fake has never felt so authentic"</p>
            <div class="footer-links">
                <a href="#">"Instagram"</a>
                <a href="#">"TikTok"</a>
                <a href="#">"YouTube"</a>
            </div>
            <p class="footer-fineprint">"© 2025 Vitrine Beauty. All rights (supposedly) reserved."</p>
        </footer>
    }
}
