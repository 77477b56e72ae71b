//! Page sections of the storefront.

mod cart;
mod catalog;
mod footer;
mod header;
mod hero;

pub use cart::CartDrawer;
pub use catalog::CatalogSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
