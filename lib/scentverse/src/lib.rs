//! Presentation-layer enhancements of the ScentVerse product showcase page: product search with
//! suggestions and scroll-to-highlight, reveal-on-scroll, hero parallax, button ripples, lazy
//! images, the subscription demo and the footer year.
//!
//! Controllers contain the page-independent logic and are tested natively. Views bind the
//! controllers to the DOM.

#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_qualifications)]
#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod constants;
pub mod controller;
pub mod entry_point;
pub mod model;
pub mod view;

#[allow(missing_docs)]
/// Common types that should be visible across the whole crate.
pub mod prelude {
    pub use showcase_system_web::prelude::*;

    pub use crate::controller;
    pub use crate::controller::FallibleResult;
    pub use crate::model;

    pub use showcase_system_web as web;
}
