//! Blocking notifications shown with `window.alert`.

use crate::prelude::*;

use crate::controller::notification::Notifier;



// =====================
// === AlertNotifier ===
// =====================

/// Shows every notification in a blocking `alert` dialog.
#[derive(Clone,Debug)]
pub struct AlertNotifier {
    logger : Logger,
}

impl AlertNotifier {
    /// Constructor.
    pub fn new(logger:&Logger) -> Self {
        let logger = logger.sub("AlertNotifier");
        Self {logger}
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message:&str) {
        info!(self.logger, "Notifying: {}", message);
        if let Err(err) = web::alert(message) {
            warning!(self.logger, "Cannot show the notification: {}", err);
        }
    }
}
