//! User-facing notifications and their texts.



// ================
// === Notifier ===
// ================

/// Presents a message to the user. In the browser this is a blocking `alert`.
pub trait Notifier {
    /// Show the message.
    fn notify(&self, message:&str);
}



// ================
// === Messages ===
// ================

/// Message shown when a search does not resolve to any product.
pub fn product_not_found(name:&str) -> String {
    format!("No product found for: \"{}\". Try another search or check spelling.", name)
}



// =============
// === Tests ===
// =============
