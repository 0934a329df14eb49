//! Hierarchical, path-based logger. Messages are prefixed with the dotted path of the logger that
//! emitted them, e.g. `[ScentVerse.ProductFinder] Attaching the callback.`.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub mod disabled;
pub mod enabled;

pub use enabled::Logger;



// ==============
// === LogMsg ===
// ==============

/// A message that can be lazily turned into a string slice. Closures are evaluated only when the
/// message is actually emitted.
pub trait LogMsg {
    /// Run `f` with the message text.
    fn with_log_msg<F:FnOnce(&str) -> T, T>(&self, f:F) -> T;
}

impl LogMsg for &str {
    fn with_log_msg<F:FnOnce(&str) -> T, T>(&self, f:F) -> T {
        f(self)
    }
}

impl<F:Fn() -> S, S:AsRef<str>> LogMsg for F {
    fn with_log_msg<G:FnOnce(&str) -> T, T>(&self, f:G) -> T {
        f(self().as_ref())
    }
}



// =============
// === Level ===
// =============

/// Severity of a log message.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
#[allow(missing_docs)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}



// =================
// === LoggerApi ===
// =================

/// Common interface of the enabled and disabled loggers.
pub trait LoggerApi {
    /// Creates a new logger. Path should be a unique identifier of this logger.
    fn new(path:impl AsRef<str>) -> Self;
    /// Creates a new logger with this logger as a parent.
    fn sub(&self, path:impl AsRef<str>) -> Self;
    /// Log a message with the given severity.
    fn log<M:LogMsg>(&self, level:Level, msg:M);
    /// Visually groups all logs between group_begin and group_end.
    fn group_begin<M:LogMsg>(&self, msg:M);
    /// Closes the group opened by the last `group_begin`.
    fn group_end(&self);

    /// Log with stacktrace and level:trace.
    fn trace  <M:LogMsg>(&self, msg:M) { self.log(Level::Trace,msg)   }
    /// Log with level:debug.
    fn debug  <M:LogMsg>(&self, msg:M) { self.log(Level::Debug,msg)   }
    /// Log with level:info.
    fn info   <M:LogMsg>(&self, msg:M) { self.log(Level::Info,msg)    }
    /// Log with level:warning.
    fn warning<M:LogMsg>(&self, msg:M) { self.log(Level::Warning,msg) }
    /// Log with level:error.
    fn error  <M:LogMsg>(&self, msg:M) { self.log(Level::Error,msg)   }

    /// Evaluates function `f` and visually groups all logs that occur during its execution.
    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T {
        self.group_begin(msg);
        let out = f();
        self.group_end();
        out
    }
}



// ==============
// === Macros ===
// ==============

/// Log a `format!`-style message at level:trace.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerApi as _;
        $logger.trace(|| format!($($arg)*))
    }};
}

/// Log a `format!`-style message at level:debug.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerApi as _;
        $logger.debug(|| format!($($arg)*))
    }};
}

/// Log a `format!`-style message at level:info.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerApi as _;
        $logger.info(|| format!($($arg)*))
    }};
}

/// Log a `format!`-style message at level:warning.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerApi as _;
        $logger.warning(|| format!($($arg)*))
    }};
}

/// Log a `format!`-style message at level:error.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerApi as _;
        $logger.error(|| format!($($arg)*))
    }};
}

/// Run the body inside a console group titled with the given message.
#[macro_export]
macro_rules! group {
    ($logger:expr, $message:expr, {$($body:tt)*}) => {{
        use $crate::LoggerApi as _;
        let __logger = $logger.clone();
        __logger.group_begin(|| $message.to_string());
        let out = {$($body)*};
        __logger.group_end();
        out
    }};
}



// =============
// === Tests ===
// =============
