//! Test doubles for the controller traits.

use crate::prelude::*;

use crate::controller::highlight::HighlightTarget;
use crate::controller::highlight::Scheduler;
use crate::controller::notification::Notifier;



// =======================
// === ManualScheduler ===
// =======================

struct ScheduledCall {
    due       : u64,
    cancelled : Rc<Cell<bool>>,
    call      : Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerData {
    now   : Cell<u64>,
    calls : RefCell<Vec<ScheduledCall>>,
}

/// Scheduler driven by a manual clock. Calls run only inside `advance`.
#[derive(Clone,Default)]
pub struct ManualScheduler {
    data : Rc<SchedulerData>,
}

impl Debug for ManualScheduler {
    fn fmt(&self, f:&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ManualScheduler(now={})", self.data.now.get())
    }
}

/// Handle of a call scheduled by `ManualScheduler`. Dropping it cancels the call.
#[derive(Debug)]
pub struct ManualTask {
    cancelled : Rc<Cell<bool>>,
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn schedule(&self, delay_ms:u32, call:Box<dyn FnOnce()>) -> ManualTask {
        let due       = self.data.now.get() + u64::from(delay_ms);
        let cancelled = Rc::new(Cell::new(false));
        let entry     = ScheduledCall {due,cancelled:cancelled.clone(),call};
        self.data.calls.borrow_mut().push(entry);
        ManualTask {cancelled}
    }
}

impl ManualScheduler {
    /// Move the clock forward, running every call that becomes due, in due order.
    pub fn advance(&self, millis:u64) {
        let now = self.data.now.get() + millis;
        self.data.now.set(now);
        loop {
            let mut ready = {
                let mut calls = self.data.calls.borrow_mut();
                calls.retain(|call| !call.cancelled.get());
                let (ready,rest) = calls.drain(..).partition::<Vec<_>,_>(|call| call.due <= now);
                *calls = rest;
                ready
            };
            if ready.is_empty() {
                break
            }
            ready.sort_by_key(|call| call.due);
            for call in ready {
                if !call.cancelled.get() {
                    (call.call)()
                }
            }
        }
    }

    /// Number of calls which are neither run nor cancelled.
    pub fn pending_count(&self) -> usize {
        self.data.calls.borrow().iter().filter(|call| !call.cancelled.get()).count()
    }
}



// ==================
// === TestTarget ===
// ==================

/// Highlight target recording its state.
#[derive(Clone,Debug)]
pub struct TestTarget {
    pub id      : usize,
    highlighted : Rc<Cell<bool>>,
    scrolls     : Rc<Cell<usize>>,
}

impl TestTarget {
    pub fn new(id:usize) -> Self {
        let highlighted = default();
        let scrolls     = default();
        Self {id,highlighted,scrolls}
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }
}

impl PartialEq for TestTarget {
    fn eq(&self, other:&Self) -> bool {
        self.id == other.id
    }
}

impl HighlightTarget for TestTarget {
    fn set_highlighted(&self, highlighted:bool) {
        self.highlighted.set(highlighted)
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted.get()
    }

    fn scroll_into_view(&self) {
        self.scrolls.set(self.scrolls.get() + 1)
    }
}



// =========================
// === RecordingNotifier ===
// =========================

/// Notifier remembering every message.
#[derive(Clone,Debug,Default)]
pub struct RecordingNotifier {
    messages : Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message:&str) {
        self.messages.borrow_mut().push(message.to_string())
    }
}
