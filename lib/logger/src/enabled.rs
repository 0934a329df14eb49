//! Logger which emits every message. Writes to the browser console on `wasm32` and to stdout
//! everywhere else.

use crate::Level;
use crate::LogMsg;
use crate::LoggerApi;

use std::rc::Rc;



// ==============
// === Logger ===
// ==============

/// Default Logger implementation.
#[derive(Clone,Debug,Default)]
pub struct Logger {
    path : Rc<String>,
}

impl Logger {
    /// Dotted path identifying this logger.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn format<M:LogMsg>(&self, msg:M) -> String {
        msg.with_log_msg(|s| format!("[{}] {}", self.path, s))
    }
}

impl LoggerApi for Logger {
    fn new(path:impl AsRef<str>) -> Self {
        let path = Rc::new(path.as_ref().to_string());
        Self {path}
    }

    fn sub(&self, path:impl AsRef<str>) -> Self {
        if self.path.is_empty() { Self::new(path) } else {
            Self::new(format!("{}.{}", self.path, path.as_ref()))
        }
    }

    fn log<M:LogMsg>(&self, level:Level, msg:M) {
        sink::write(level,&self.format(msg))
    }

    fn group_begin<M:LogMsg>(&self, msg:M) {
        sink::group_begin(&self.format(msg))
    }

    fn group_end(&self) {
        sink::group_end()
    }
}



// ============
// === Sink ===
// ============

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::*;

    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub fn write(level:Level, line:&str) {
        let line = JsValue::from_str(line);
        match level {
            Level::Trace   => console::trace_1(&line),
            Level::Debug   => console::debug_1(&line),
            Level::Info    => console::info_1(&line),
            Level::Warning => console::warn_1(&line),
            Level::Error   => console::error_1(&line),
        }
    }

    pub fn group_begin(line:&str) {
        console::group_1(&JsValue::from_str(line));
    }

    pub fn group_end() {
        console::group_end();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::*;

    pub fn write(level:Level, line:&str) {
        match level {
            Level::Warning => println!("[WARNING] {}",line),
            Level::Error   => println!("[ERROR] {}",line),
            _              => println!("{}",line),
        }
    }

    pub fn group_begin(line:&str) {
        println!(">>> {}",line);
    }

    pub fn group_end() {
        println!("<<<")
    }
}
