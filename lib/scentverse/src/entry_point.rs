//! Entry point of the page enhancements: installs every feature and keeps it alive for the
//! lifetime of the page.

use crate::prelude::*;

use crate::config::Startup;
use crate::controller::effects::RevealMode;
use crate::view::finder::ProductFinder;
use crate::view::footer;
use crate::view::lazy_images;
use crate::view::parallax::Parallax;
use crate::view::reveal::Reveal;
use crate::view::ripple::Ripple;
use crate::view::subscribe::Subscription;



// ================
// === Showcase ===
// ================

/// All installed page features. A feature whose elements are missing from the page is `None`.
#[derive(Debug)]
pub struct Showcase {
    logger           : Logger,
    /// Product search.
    pub finder       : Option<ProductFinder>,
    /// Reveal-on-scroll.
    pub reveal       : Option<Reveal>,
    /// Hero parallax. Skipped under the reduced-motion preference.
    pub parallax     : Option<Parallax>,
    /// Button ripple. Skipped under the reduced-motion preference.
    pub ripple       : Option<Ripple>,
    /// Subscription form demo.
    pub subscription : Option<Subscription>,
    /// Number of images switched to lazy loading.
    pub lazy_images  : Option<usize>,
    /// The year written to the footer.
    pub year         : Option<u32>,
}

impl Showcase {
    /// Install every feature. Failures of one feature are logged and do not affect the others.
    pub fn new(config:&Startup) -> Self {
        let logger         = Logger::new("ScentVerse");
        let reduced_motion = web::prefers_reduced_motion();
        let reveal_mode    = RevealMode::select(reduced_motion,web::supports_intersection_observer());
        let selectors      = &config.selectors;
        group!(logger, "Installing page features.", {
            info!(logger, "Reduced motion: {}, reveal mode: {:?}.", reduced_motion, reveal_mode);
            let finder       = setup(&logger,"Product Finder",|| ProductFinder::new(&logger,config));
            let reveal       = setup(&logger,"Reveal",|| Reveal::new(&logger,selectors,reveal_mode));
            let lazy_images  = setup(&logger,"Lazy images",|| lazy_images::apply(&logger,selectors));
            let subscription = setup(&logger,"Subscription",|| Subscription::new(&logger,selectors));
            let year         = setup(&logger,"Footer year",|| footer::stamp_year(&logger,selectors));
            let (parallax,ripple) = if reduced_motion {
                info!(logger, "Skipping parallax and ripple.");
                (None,None)
            } else {
                let parallax = setup(&logger,"Parallax",|| Parallax::new(&logger,selectors));
                let timings  = &config.timings;
                let ripple   = setup(&logger,"Ripple",|| Ripple::new(&logger,selectors,timings));
                (parallax,ripple)
            };
            Self {logger,finder,reveal,parallax,ripple,subscription,lazy_images,year}
        })
    }

    /// Keep the features installed until the page is closed.
    pub fn forget(self) {
        debug!(self.logger, "Page features installed.");
        std::mem::forget(self)
    }
}

fn setup<T>(logger:&Logger, feature:&str, f:impl FnOnce() -> FallibleResult<T>) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(err)  => {
            warning!(logger, "Skipping {}: {}", feature, err);
            None
        }
    }
}



// ===============
// === Exports ===
// ===============

/// Install the page features with the default configuration.
#[wasm_bindgen]
pub fn run_scentverse() {
    web::forward_panic_hook_to_console();
    Showcase::new(&default()).forget();
}

/// Install the page features with selectors and timings overridden by the JSON object. Throws when
/// the JSON is malformed.
#[wasm_bindgen]
pub fn run_scentverse_with_config(json:&str) -> Result<(),JsValue> {
    web::forward_panic_hook_to_console();
    let config = Startup::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Showcase::new(&config).forget();
    Ok(())
}
