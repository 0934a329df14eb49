//! Ripple micro-interaction of the buttons: a fading circle spawned where the control was clicked.

use crate::prelude::*;

use crate::config::Selectors;
use crate::config::Timings;
use crate::controller::effects;
use crate::controller::effects::px;
use crate::view;

use showcase_system_web::event;
use showcase_system_web::event::Slot;
use showcase_system_web::f;
use showcase_system_web::timer;
use showcase_system_web::HtmlElement;
use showcase_system_web::MouseEvent;
use showcase_system_web::StyleSetter;



// =============
// === Model ===
// =============

#[derive(Debug)]
struct Model {
    logger  : Logger,
    timings : Timings,
}

impl Model {
    fn prepare(&self, control:&HtmlElement) {
        if control.inline_style("position").is_empty() {
            control.set_style_or_warn("position","relative",&self.logger);
        }
        control.set_style_or_warn("overflow","hidden",&self.logger);
    }

    fn spawn(&self, control:&HtmlElement, event:&MouseEvent) {
        if let Err(err) = self.try_spawn(control,event) {
            warning!(self.logger, "Cannot spawn the ripple: {}", err);
        }
    }

    fn try_spawn(&self, control:&HtmlElement, event:&MouseEvent) -> web::Result<()> {
        let ripple = effects::Ripple::new(&view::client_rect(control),view::client_position(event));
        let circle = web::document()?.create_element("span")?;
        let circle = web::dyn_into::<_,HtmlElement>(circle)?;
        let styles = [
            ("position"       , "absolute".to_string()),
            ("width"          , px(ripple.size)),
            ("height"         , px(ripple.size)),
            ("left"           , px(ripple.position.x)),
            ("top"            , px(ripple.position.y)),
            ("border-radius"  , "50%".to_string()),
            ("background"     , "rgba(255,255,255,0.15)".to_string()),
            ("transform"      , "scale(0)".to_string()),
            ("pointer-events" , "none".to_string()),
            ("transition"     , "transform 450ms ease, opacity 600ms ease".to_string()),
        ];
        for (name,value) in &styles {
            circle.set_style_or_warn(name,value,&self.logger);
        }
        control.append_child(&circle)?;

        let logger = self.logger.clone();
        let grown  = circle.clone();
        web::on_next_frame(move || grown.set_style_or_warn("transform","scale(1)",&logger))?;
        let logger = self.logger.clone();
        let faded  = circle.clone();
        timer::after_detached(self.timings.ripple_fade_delay_ms,move || {
            faded.set_style_or_warn("opacity","0",&logger)
        });
        timer::after_detached(self.timings.ripple_remove_delay_ms,move || circle.remove());
        Ok(())
    }
}



// ==============
// === Ripple ===
// ==============

/// Ripple effect of every matching control. Never prevents the default action of the click.
#[derive(Debug)]
pub struct Ripple {
    model     : Rc<Model>,
    on_clicks : Vec<Slot<event::Click>>,
}

impl Ripple {
    /// Prepare the controls and register the click listeners.
    pub fn new(logger:&Logger, selectors:&Selectors, timings:&Timings) -> FallibleResult<Self> {
        let logger   = logger.sub("Ripple");
        let timings  = *timings;
        let model    = Rc::new(Model {logger,timings});
        let controls = web::query_selector_all(&selectors.ripple_controls)?;
        let controls = controls.into_iter().filter_map(|control| control.dyn_into::<HtmlElement>().ok());
        let on_clicks = controls.map(|control| {
            model.prepare(&control);
            Slot::<event::Click>::with_callback(&control,&model.logger,
                f!([model,control] (event:MouseEvent) model.spawn(&control,&event))
            )
        }).collect::<Vec<_>>();
        debug!(model.logger, "Attached to {} controls.", on_clicks.len());
        Ok(Self {model,on_clicks})
    }

    /// Number of controls with the effect.
    pub fn control_count(&self) -> usize {
        self.on_clicks.len()
    }
}
