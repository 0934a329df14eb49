//! Scheduling work for the next paint.

use crate::prelude::*;

use crate::window;
use crate::Result;



/// Run `f` once before the next repaint. The JS closure frees itself after the call.
pub fn on_next_frame(f:impl FnOnce() + 'static) -> Result<()> {
    let closure = Closure::once_into_js(move |_time:f64| f());
    window()?.request_animation_frame(closure.unchecked_ref())?;
    Ok(())
}
