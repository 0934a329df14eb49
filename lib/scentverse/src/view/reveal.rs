//! Reveal-on-scroll of the page sections and cards.

use crate::prelude::*;

use crate::config::Selectors;
use crate::constants;
use crate::controller::effects::RevealMode;

use showcase_system_web::intersection_observer;
use showcase_system_web::intersection_observer::IntersectionObserver;
use showcase_system_web::ClassSetter;



// ==============
// === Reveal ===
// ==============

/// Marks the reveal targets and shows each of them the first time it scrolls into view.
///
/// In `RevealMode::Immediate` every target is shown right away and nothing is observed.
#[derive(Debug)]
pub struct Reveal {
    mode     : RevealMode,
    observer : Option<IntersectionObserver>,
}

impl Reveal {
    /// Constructor. Targets are looked up once, at construction.
    pub fn new(logger:&Logger, selectors:&Selectors, mode:RevealMode) -> FallibleResult<Self> {
        let logger   = logger.sub("Reveal");
        let targets  = web::query_selector_all(&selectors.reveal_targets)?;
        let observer = match mode {
            RevealMode::Immediate => {
                for target in &targets {
                    target.add_class_or_warn(constants::REVEAL_IN_CLASS,&logger);
                }
                None
            }
            RevealMode::OnScroll => {
                let observer = Self::observer(&logger)?;
                for target in &targets {
                    target.add_class_or_warn(constants::REVEAL_INIT_CLASS,&logger);
                    observer.observe(target);
                }
                Some(observer)
            }
        };
        debug!(logger, "{} targets in mode {:?}.", targets.len(), mode);
        Ok(Self {mode,observer})
    }

    fn observer(logger:&Logger) -> web::Result<IntersectionObserver> {
        let logger  = logger.clone();
        let options = intersection_observer::Options {
            threshold   : constants::REVEAL_THRESHOLD,
            root_margin : constants::REVEAL_ROOT_MARGIN.into(),
        };
        IntersectionObserver::new(&options,move |entry,observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                target.add_class_or_warn(constants::REVEAL_IN_CLASS,&logger);
                observer.unobserve(&target);
            }
        })
    }

    /// The mode the targets are revealed in.
    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Whether the targets are being watched for intersections.
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }
}
