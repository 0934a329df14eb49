use crate::prelude::*;

use crate::closure::ClosureStorage;

use web_sys::EventTarget;



// ============
// === Slot ===
// ============

/// A single event listener slot.
///
/// Stores a closure that can be registered as an event listener. Slot will register the closure
/// as event listener whenever both closure and target are provided, and unregisters it on drop.
///
/// Caveat: this listener holds a reference to the target while it is registered.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
pub struct Slot<Event:crate::event::Event> {
    logger     : Logger,
    target     : Option<EventTarget>,
    js_closure : ClosureStorage<Event::Interface>,
}

impl<Event:crate::event::Event> Slot<Event> {
    /// Create a new `Slot`. As the initial target is provided, the listener will register once it
    /// gets a callback (see [[set_callback]]).
    pub fn new(target:&impl AsRef<EventTarget>, logger:&Logger) -> Self {
        Self {
            logger     : logger.sub(Event::NAME),
            target     : Some(target.as_ref().clone()),
            js_closure : default(),
        }
    }

    /// Create a slot and immediately register the callback.
    pub fn with_callback
    (target:&impl AsRef<EventTarget>, logger:&Logger, f:impl FnMut(Event::Interface) + 'static) -> Self {
        let mut slot = Self::new(target,logger);
        slot.set_callback(f);
        slot
    }

    /// Register the event listener if both target and callback are set.
    fn add_if_active(&mut self) {
        if let (Some(target), Some(function)) = (self.target.as_ref(), self.js_closure.js_ref()) {
            debug!(self.logger, "Attaching the callback.");
            if let Err(err) = Event::add_listener(target,function) {
                warning!(self.logger, "Failed to attach the callback: {}", err);
            }
        }
    }

    /// Unregister the event listener if both target and callback are set.
    fn remove_if_active(&mut self) {
        if let (Some(target), Some(function)) = (self.target.as_ref(), self.js_closure.js_ref()) {
            debug!(self.logger, "Detaching the callback.");
            if let Err(err) = Event::remove_listener(target,function) {
                warning!(self.logger, "Failed to detach the callback: {}", err);
            }
        }
    }

    /// Move this event listener to a different target.
    pub fn set_target(&mut self, target:&impl AsRef<EventTarget>) {
        let target = target.as_ref();
        // Prevent spurious reattaching that could affect listeners order.
        if Some(target) != self.target.as_ref() {
            self.remove_if_active();
            self.target = Some(target.clone());
            self.add_if_active()
        }
    }

    /// Assign a new event callback closure and register it in the target.
    ///
    /// If the listener was registered with the previous closure, it will unregister first.
    pub fn set_callback(&mut self, f:impl FnMut(Event::Interface) + 'static) {
        self.remove_if_active();
        self.js_closure.wrap(f);
        self.add_if_active()
    }

    /// Erase the callback.
    ///
    /// The stored closure will be dropped and event listener unregistered.
    pub fn clear_callback(&mut self) {
        self.remove_if_active();
        self.js_closure.clear();
    }

    /// Checks whether a callback is currently registered.
    pub fn is_active(&self) -> bool {
        self.target.is_some() && self.js_closure.is_set()
    }
}

/// Unregister listener on drop.
impl<Event:crate::event::Event> Drop for Slot<Event> {
    fn drop(&mut self) {
        self.remove_if_active();
    }
}
