//! Logger which discards all the messages. Messages given as closures are never evaluated.

use crate::enabled;
use crate::Level;
use crate::LogMsg;
use crate::LoggerApi;



/// Trivial logger that discards all the messages.
#[derive(Clone,Copy,Debug,Default)]
pub struct Logger();

impl From<enabled::Logger> for Logger {
    fn from(_:enabled::Logger) -> Self { Logger() }
}

impl From<&enabled::Logger> for Logger {
    fn from(_:&enabled::Logger) -> Self { Logger() }
}

impl LoggerApi for Logger {
    fn new(_:impl AsRef<str>) -> Self { Logger() }
    fn sub(&self, _:impl AsRef<str>) -> Self { Logger() }
    fn log<M:LogMsg>(&self, _:Level, _:M) {}
    fn group_begin<M:LogMsg>(&self, _:M) {}
    fn group_end(&self) {}
}
