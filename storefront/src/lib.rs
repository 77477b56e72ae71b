//! Vitrine single-page storefront demo.
//!
//! A client-side rendered Leptos app: a static product catalog with category
//! filtering and an in-memory shopping cart. No backend, no persistence —
//! everything lives in the signals owned by [`App`] for the duration of the
//! browser session.

mod app;
mod data;
mod sections;

pub use app::App;
