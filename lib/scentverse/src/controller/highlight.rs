//! Time-limited highlighting of a single product.
//!
//! At most one target is highlighted at a time. Highlighting a target clears every other target,
//! scrolls the new one into view and schedules clearing it after a fixed duration. A new highlight
//! cancels the clear scheduled by the previous one, so a stale timer never clears a newer
//! highlight.

use crate::prelude::*;



// =======================
// === HighlightTarget ===
// =======================

/// Something that can carry the highlighted flag and be scrolled to.
pub trait HighlightTarget : Clone + PartialEq + 'static {
    /// Set or clear the highlighted flag.
    fn set_highlighted(&self, highlighted:bool);
    /// Check the highlighted flag.
    fn is_highlighted(&self) -> bool;
    /// Smoothly scroll the target to the vertical center of the viewport.
    fn scroll_into_view(&self);
}



// =================
// === Scheduler ===
// =================

/// Delayed execution of callbacks.
pub trait Scheduler {
    /// Handle of a scheduled call. Dropping it cancels the call if it has not run yet.
    type Task;

    /// Run `f` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms:u32, f:Box<dyn FnOnce()>) -> Self::Task;
}

/// Scheduler backed by the browser's `setTimeout`.
#[derive(Clone,Copy,Debug,Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    type Task = web::timer::Timeout;

    fn schedule(&self, delay_ms:u32, f:Box<dyn FnOnce()>) -> Self::Task {
        web::timer::after(delay_ms,f)
    }
}



// ===================
// === Highlighter ===
// ===================

/// Keeps the single-highlight invariant and owns the pending clear.
#[derive(Derivative)]
#[derivative(Debug(bound="S:Debug"))]
pub struct Highlighter<S:Scheduler> {
    logger      : Logger,
    scheduler   : S,
    duration_ms : u32,
    #[derivative(Debug="ignore")]
    pending     : RefCell<Option<S::Task>>,
}

impl<S:Scheduler> Highlighter<S> {
    /// Constructor.
    pub fn new(logger:&Logger, scheduler:S, duration_ms:u32) -> Self {
        let logger  = logger.sub("Highlighter");
        let pending = default();
        Self {logger,scheduler,duration_ms,pending}
    }

    /// Highlight `target`, clearing the flag on every other element of `all`.
    pub fn highlight<'a,T:HighlightTarget>(&self, target:&T, all:impl IntoIterator<Item=&'a T>) {
        self.cancel_pending();
        for other in all {
            if other != target {
                other.set_highlighted(false);
            }
        }
        target.scroll_into_view();
        target.set_highlighted(true);
        debug!(self.logger, "Highlighted, clearing in {}ms.", self.duration_ms);
        let to_clear = target.clone();
        let clear    = Box::new(move || to_clear.set_highlighted(false));
        let task     = self.scheduler.schedule(self.duration_ms,clear);
        *self.pending.borrow_mut() = Some(task);
    }

    /// Cancel the scheduled clear of the current highlight, if any.
    pub fn cancel_pending(&self) {
        let previous = self.pending.borrow_mut().take();
        if previous.is_some() {
            trace!(self.logger, "Cancelling the pending clear.");
        }
    }
}



// =============
// === Tests ===
// =============
