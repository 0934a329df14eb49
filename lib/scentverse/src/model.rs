//! Data read from the page.

pub mod product;

pub use product::Product;
pub use product::ProductRepository;
