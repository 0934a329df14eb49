//! Wrapper over the browser `IntersectionObserver`.

use crate::prelude::*;

use crate::Result;

use js_sys::Array;
use web_sys::Element;
use web_sys::IntersectionObserverEntry;
use web_sys::IntersectionObserverInit;



// =============
// === Types ===
// =============

/// JS-side callback receiving the batch of changed entries.
pub type Listener = Closure<dyn FnMut(Array,web_sys::IntersectionObserver)>;



// ===============
// === Options ===
// ===============

/// Observation parameters, see `IntersectionObserverInit`.
#[derive(Clone,Debug,PartialEq)]
pub struct Options {
    /// Fraction of the target area which must be visible to report an intersection.
    pub threshold   : f64,
    /// CSS margin applied to the viewport before computing intersections, e.g. `0px 0px -6% 0px`.
    pub root_margin : String,
}

impl Default for Options {
    fn default() -> Self {
        let threshold   = 0.0;
        let root_margin = "0px".into();
        Self {threshold,root_margin}
    }
}



// ============================
// === IntersectionObserver ===
// ============================

/// The IntersectionObserver interface reports changes in the intersection of target elements with
/// the viewport. The callback is called once per changed entry, together with a handle to the
/// observer so that a target may be unobserved from inside the callback.
///
/// Dropping the observer disconnects it.
///
/// See also https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
#[derive(Debug)]
pub struct IntersectionObserver {
    observer : web_sys::IntersectionObserver,
    listener : Listener,
}

impl IntersectionObserver {
    /// Constructor.
    pub fn new<F>(options:&Options, mut f:F) -> Result<Self>
    where F : FnMut(&IntersectionObserverEntry,&web_sys::IntersectionObserver) + 'static {
        let callback = move |entries:Array, observer:web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    f(&entry,&observer)
                }
            }
        };
        let listener = Listener::wrap(Box::new(callback));
        let init     = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let function = listener.as_ref().unchecked_ref();
        let observer = web_sys::IntersectionObserver::new_with_options(function,&init)?;
        Ok(Self {observer,listener})
    }

    /// Start reporting intersections of the target.
    pub fn observe(&self, target:&Element) {
        self.observer.observe(target)
    }

    /// Stop reporting intersections of the target.
    pub fn unobserve(&self, target:&Element) {
        self.observer.unobserve(target)
    }
}

impl Drop for IntersectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
