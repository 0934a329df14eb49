//! Page-independent logic of the features. Controllers talk to the page only through the traits
//! they define (`ProductRepository`, `HighlightTarget`, `Scheduler`, `Notifier`), so everything
//! here can be exercised without a browser.

pub mod effects;
pub mod finder;
pub mod highlight;
pub mod notification;
pub mod search;
pub mod subscribe;

#[cfg(test)]
pub mod test_utils;

/// General-purpose `Result` supporting any `Error`-compatible failures.
pub type FallibleResult<T> = Result<T,failure::Error>;
