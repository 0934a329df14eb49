//! Storage for JS closures that may be swapped or cleared at runtime.

use crate::prelude::*;

use js_sys::Function;
use wasm_bindgen::convert::FromWasmAbi;



// ======================
// === ClosureStorage ===
// ======================

/// Stores an optional closure.
#[derive(Derivative)]
#[derivative(Debug(bound=""), Default(bound=""))]
pub struct ClosureStorage<Arg> {
    /// The stored closure.
    pub closure : Option<Closure<dyn FnMut(Arg)>>,
}

impl<Arg:FromWasmAbi + 'static> ClosureStorage<Arg> {
    /// An empty closure storage.
    pub fn new() -> Self {
        default()
    }

    /// Stores the given closure.
    pub fn store(&mut self, closure:Closure<dyn FnMut(Arg)>) {
        self.closure = Some(closure);
    }

    /// Obtain JS reference to the closure (that can be passed e.g. as a callback to an event
    /// handler).
    pub fn js_ref(&self) -> Option<&Function> {
        self.closure.as_ref().map(|closure| closure.as_ref().unchecked_ref())
    }

    /// Wraps given function into a Closure.
    pub fn wrap(&mut self, f:impl FnMut(Arg) + 'static) {
        let boxed = Box::new(f) as Box<dyn FnMut(Arg)>;
        let wrapped:Closure<dyn FnMut(Arg)> = Closure::wrap(boxed);
        self.store(wrapped);
    }

    /// Clears the current closure.
    ///
    /// If JS still holds a reference to it, calling it will throw. Unregister it first.
    pub fn clear(&mut self) {
        self.closure = None;
    }

    /// Checks whether a closure is stored.
    pub fn is_set(&self) -> bool {
        self.closure.is_some()
    }
}
