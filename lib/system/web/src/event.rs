//! Utilities for DOM events.

pub mod listener;

pub use listener::Slot;

use crate::prelude::*;

use crate::Result;

use js_sys::Function;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::AddEventListenerOptions;
use web_sys::EventTarget;



// =============
// === Event ===
// =============

/// This trait represents a kind of event that may fire from some DOM event target.
///
/// For example, `click` on a button is such an event.
pub trait Event {
    /// The type of the event: it will be the type of value passed to the event listeners.
    /// For example `web_sys::MouseEvent`.
    type Interface : AsRef<web_sys::Event> + FromWasmAbi + 'static;

    /// The name of the event. For example `"click"`.
    const NAME:&'static str;

    /// Whether the listener promises never to call `preventDefault`, letting the browser scroll
    /// without waiting for it.
    const PASSIVE:bool = false;

    /// Adds a given function to the event's target as an event listener. It will be called each
    /// time event occurs until listener is removed through `remove_listener`.
    fn add_listener(target:&EventTarget, listener:&Function) -> Result<()> {
        if Self::PASSIVE {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options
                (Self::NAME,listener,&options)?;
        } else {
            target.add_event_listener_with_callback(Self::NAME,listener)?;
        }
        Ok(())
    }

    /// Remove the event listener. The `add_listener` method should have been called before with
    /// the very same function argument.
    fn remove_listener(target:&EventTarget, listener:&Function) -> Result<()> {
        Ok(target.remove_event_listener_with_callback(Self::NAME,listener)?)
    }
}



// ===================
// === Event Kinds ===
// ===================

macro_rules! define_events {
    ($($(#[$meta:meta])* $name:ident = $js_name:literal : $interface:ty $(, passive=$passive:expr)?;)*) => {$(
        $(#[$meta])*
        #[derive(Clone,Copy,Debug)]
        pub struct $name;

        impl Event for $name {
            type Interface = $interface;
            const NAME:&'static str = $js_name;
            $(const PASSIVE:bool = $passive;)?
        }
    )*};
}

define_events! {
    /// The value of an `input` element changed.
    Input      = "input"      : web_sys::Event;
    /// A key was pressed down.
    KeyDown    = "keydown"    : web_sys::KeyboardEvent;
    /// A pointer button was pressed and released on the element.
    Click      = "click"      : web_sys::MouseEvent;
    /// A form is being submitted.
    Submit     = "submit"     : web_sys::Event;
    /// The page or an element was scrolled.
    Scroll     = "scroll"     : web_sys::Event, passive=true;
    /// The pointer moved over the element.
    MouseMove  = "mousemove"  : web_sys::MouseEvent;
    /// The pointer left the element.
    MouseLeave = "mouseleave" : web_sys::MouseEvent;
}
