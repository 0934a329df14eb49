//! Thin, typed layer over `web-sys`: DOM lookups, style and class helpers, event listener slots,
//! intersection observation, animation frames and timers.

#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(unused_import_braces)]
#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod animation_frame;
pub mod closure;
pub mod event;
pub mod intersection_observer;
pub mod timer;

pub use web_sys::Document;
pub use web_sys::Element;
pub use web_sys::EventTarget;
pub use web_sys::HtmlElement;
pub use web_sys::HtmlFormElement;
pub use web_sys::HtmlInputElement;
pub use web_sys::MouseEvent;
pub use web_sys::KeyboardEvent;
pub use web_sys::Window;

pub use animation_frame::on_next_frame;

/// Common types that should be visible across the whole crate and its users.
pub mod prelude {
    pub use derivative::Derivative;
    pub use failure::Fail;
    pub use logger::*;
    pub use std::cell::Cell;
    pub use std::cell::RefCell;
    pub use std::fmt::Debug;
    pub use std::rc::Rc;
    pub use std::rc::Weak;
    pub use wasm_bindgen::prelude::*;
    pub use wasm_bindgen::JsCast;

    /// Shorthand for `Default::default()`.
    pub fn default<T:Default>() -> T {
        Default::default()
    }
}

use prelude::*;

use web_sys::NodeList;
use web_sys::ScrollBehavior;
use web_sys::ScrollIntoViewOptions;
use web_sys::ScrollLogicalPosition;



// ==============
// === Macros ===
// ==============

/// Closure capturing clones of the listed values. Useful for event callbacks sharing a model:
///
/// ```ignore
/// let callback = f!([model] (event:MouseEvent) model.on_click(&event));
/// ```
#[macro_export]
macro_rules! f {
    ([$($name:ident),*] ($($arg:tt)*) $($body:tt)*) => {{
        $(let $name = $name.clone();)*
        move |$($arg)*| { $($body)* }
    }};
}

/// Like `f!`, for closures ignoring their single argument.
#[macro_export]
macro_rules! f_ {
    ([$($name:ident),*] $($body:tt)*) => {{
        $(let $name = $name.clone();)*
        move |_| { $($body)* }
    }};
}



// =============
// === Error ===
// =============

/// Errors raised while talking to the browser.
#[derive(Debug,Fail)]
pub enum Error {
    /// A required object (element, window, document) is not present.
    #[fail(display = "Missing {}.", name)]
    Missing { name:String },
    /// A JS object has a different type than expected.
    #[fail(display = "Type mismatch. Expected '{}' but got '{}'.", expected, got)]
    TypeMismatch { expected:String, got:String },
    /// A JS call threw an exception.
    #[fail(display = "JavaScript error: {}.", message)]
    Js { message:String },
}

/// Result of a browser operation.
pub type Result<T> = std::result::Result<T,Error>;

impl Error {
    /// Constructor of `Error::Missing`.
    pub fn missing(name:impl Into<String>) -> Self {
        let name = name.into();
        Self::Missing {name}
    }

    /// Constructor of `Error::TypeMismatch`.
    pub fn type_mismatch(expected:impl Into<String>, got:impl Into<String>) -> Self {
        let expected = expected.into();
        let got      = got.into();
        Self::TypeMismatch {expected,got}
    }
}

impl From<JsValue> for Error {
    fn from(value:JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}",value));
        Self::Js {message}
    }
}



// ===============
// === Globals ===
// ===============

/// The global `window` object.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::missing("window"))
}

/// The document of the global `window`.
pub fn document() -> Result<Document> {
    window()?.document().ok_or_else(|| Error::missing("document"))
}

/// Cast a JS object to a more specific type, reporting the requested type name on failure.
pub fn dyn_into<T,U>(obj:T) -> Result<U>
where T:JsCast+Debug, U:JsCast {
    let expected = std::any::type_name::<U>();
    obj.dyn_into().map_err(|obj:T| Error::type_mismatch(expected,format!("{:?}",obj)))
}

/// Element with the given id.
pub fn get_element_by_id(id:&str) -> Result<Element> {
    document()?.get_element_by_id(id).ok_or_else(|| Error::missing(format!("element #{}",id)))
}

/// Element with the given id cast to `T`, e.g. `HtmlInputElement`.
pub fn get_element_by_id_as<T:JsCast>(id:&str) -> Result<T> {
    dyn_into(get_element_by_id(id)?)
}

/// First element in the document matching the CSS selector.
pub fn query_selector(selector:&str) -> Result<Element> {
    document()?.query_selector(selector)?
        .ok_or_else(|| Error::missing(format!("element matching '{}'",selector)))
}

/// All elements in the document matching the CSS selector, in document order.
pub fn query_selector_all(selector:&str) -> Result<Vec<Element>> {
    Ok(elements_of(&document()?.query_selector_all(selector)?))
}

/// First descendant of `root` matching the CSS selector.
pub fn query_selector_within(root:&Element, selector:&str) -> Result<Element> {
    root.query_selector(selector)?
        .ok_or_else(|| Error::missing(format!("element matching '{}'",selector)))
}

/// All descendants of `root` matching the CSS selector, in document order.
pub fn query_selector_all_within(root:&Element, selector:&str) -> Result<Vec<Element>> {
    Ok(elements_of(&root.query_selector_all(selector)?))
}

fn elements_of(list:&NodeList) -> Vec<Element> {
    (0..list.length()).filter_map(|ix| list.get(ix)).filter_map(|node| node.dyn_into().ok()).collect()
}



// ===================
// === StyleSetter ===
// ===================

/// Inline style access that never throws. Failures are logged.
pub trait StyleSetter {
    /// Set the inline style property.
    fn set_style_or_warn(&self, name:&str, value:&str, logger:&Logger);
    /// Current inline value of the style property, empty when unset.
    fn inline_style(&self, name:&str) -> String;
}

impl StyleSetter for HtmlElement {
    fn set_style_or_warn(&self, name:&str, value:&str, logger:&Logger) {
        if self.style().set_property(name,value).is_err() {
            warning!(logger, "Failed to set style '{}' to '{}'.", name, value);
        }
    }

    fn inline_style(&self, name:&str) -> String {
        self.style().get_property_value(name).unwrap_or_default()
    }
}



// ===================
// === ClassSetter ===
// ===================

/// CSS class list access that never throws. Failures are logged.
pub trait ClassSetter {
    /// Add the class to the element.
    fn add_class_or_warn(&self, class:&str, logger:&Logger);
    /// Remove the class from the element.
    fn remove_class_or_warn(&self, class:&str, logger:&Logger);
    /// Check whether the element has the class.
    fn has_class(&self, class:&str) -> bool;
}

impl ClassSetter for Element {
    fn add_class_or_warn(&self, class:&str, logger:&Logger) {
        if self.class_list().add_1(class).is_err() {
            warning!(logger, "Failed to add class '{}'.", class);
        }
    }

    fn remove_class_or_warn(&self, class:&str, logger:&Logger) {
        if self.class_list().remove_1(class).is_err() {
            warning!(logger, "Failed to remove class '{}'.", class);
        }
    }

    fn has_class(&self, class:&str) -> bool {
        self.class_list().contains(class)
    }
}



// =================
// === Scrolling ===
// =================

/// Smoothly scroll the element into the viewport, centered vertically.
pub fn scroll_into_view_centered(element:&Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current vertical page scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    window().and_then(|w| Ok(w.scroll_y()?)).unwrap_or(0.0)
}



// ====================
// === Capabilities ===
// ====================

/// Media query matching users who asked the system to minimize non-essential motion.
pub const REDUCED_MOTION_QUERY:&str = "(prefers-reduced-motion: reduce)";

/// Checks whether the media query matches. Any failure counts as no match.
pub fn media_matches(query:&str) -> bool {
    let list = window().ok().and_then(|w| w.match_media(query).ok().flatten());
    list.map(|list| list.matches()).unwrap_or(false)
}

/// Whether the user prefers reduced motion.
pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
}

/// Whether the browser exposes the `IntersectionObserver` constructor.
pub fn supports_intersection_observer() -> bool {
    let key = JsValue::from_str("IntersectionObserver");
    window().ok().map(|w| js_sys::Reflect::has(&w,&key).unwrap_or(false)).unwrap_or(false)
}



// ============
// === Misc ===
// ============

/// Show a blocking `alert` dialog.
pub fn alert(message:&str) -> Result<()> {
    Ok(window()?.alert_with_message(message)?)
}

/// The current year according to the local clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Print Rust panics to the browser console.
pub fn forward_panic_hook_to_console() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
