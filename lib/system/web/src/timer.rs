//! One-shot timers backed by `setTimeout`.

pub use gloo_timers::callback::Timeout;

/// Run `f` once after `millis` milliseconds. Dropping the returned handle cancels the call.
pub fn after(millis:u32, f:impl FnOnce() + 'static) -> Timeout {
    Timeout::new(millis,f)
}

/// Run `f` once after `millis` milliseconds. The call cannot be cancelled.
pub fn after_detached(millis:u32, f:impl FnOnce() + 'static) {
    let _id = Timeout::new(millis,f).forget();
}
