//! Hero parallax: the background follows the page scroll and the content follows the pointer.

use crate::prelude::*;

use crate::config::Selectors;
use crate::controller::effects;
use crate::view;

use showcase_system_web::event;
use showcase_system_web::event::Slot;
use showcase_system_web::f;
use showcase_system_web::f_;
use showcase_system_web::HtmlElement;
use showcase_system_web::MouseEvent;
use showcase_system_web::StyleSetter;



// =============
// === Model ===
// =============

#[derive(Debug)]
struct Model {
    logger  : Logger,
    hero    : HtmlElement,
    content : Option<HtmlElement>,
}

impl Model {
    fn follow_scroll(&self, scroll_y:f64) {
        let position = effects::parallax_background_position(scroll_y);
        self.hero.set_style_or_warn("background-position",&position,&self.logger);
    }

    fn follow_pointer(&self, event:&MouseEvent) {
        if let Some(content) = &self.content {
            let hero      = view::client_rect(&self.hero);
            let offset    = effects::parallax_content_offset(&hero,view::client_position(event));
            let transform = effects::parallax_content_transform(offset);
            content.set_style_or_warn("transform",&transform,&self.logger);
        }
    }

    fn reset_content(&self) {
        if let Some(content) = &self.content {
            let transform = effects::PARALLAX_RESET_TRANSFORM;
            content.set_style_or_warn("transform",transform,&self.logger);
        }
    }
}



// ================
// === Parallax ===
// ================

/// Parallax effect of the hero section. Requires the hero. The pointer effect is installed only
/// when the hero content exists.
#[derive(Debug)]
pub struct Parallax {
    model          : Rc<Model>,
    on_scroll      : Slot<event::Scroll>,
    on_mouse_move  : Option<Slot<event::MouseMove>>,
    on_mouse_leave : Option<Slot<event::MouseLeave>>,
}

impl Parallax {
    /// Look up the hero and register the listeners.
    pub fn new(logger:&Logger, selectors:&Selectors) -> FallibleResult<Self> {
        let logger  = logger.sub("Parallax");
        let hero    = web::dyn_into::<_,HtmlElement>(web::query_selector(&selectors.hero)?)?;
        let content = web::query_selector_within(&hero,&selectors.hero_content).ok();
        let content = content.and_then(|content| content.dyn_into::<HtmlElement>().ok());
        let window  = web::window()?;
        let model   = Rc::new(Model {logger,hero,content});

        let on_scroll = Slot::<event::Scroll>::with_callback(&window,&model.logger,f_!([model]
            model.follow_scroll(web::scroll_y())
        ));
        let has_content    = model.content.is_some();
        let on_mouse_move  = has_content.then(|| {
            Slot::<event::MouseMove>::with_callback(&model.hero,&model.logger,
                f!([model] (event:MouseEvent) model.follow_pointer(&event))
            )
        });
        let on_mouse_leave = has_content.then(|| {
            Slot::<event::MouseLeave>::with_callback(&model.hero,&model.logger,f_!([model]
                model.reset_content()
            ))
        });
        debug!(model.logger, "Initialized, pointer effect: {}.", has_content);
        Ok(Self {model,on_scroll,on_mouse_move,on_mouse_leave})
    }

    /// Move the hero background for the given page scroll offset.
    pub fn follow_scroll(&self, scroll_y:f64) {
        self.model.follow_scroll(scroll_y)
    }

    /// Whether the hero content follows the pointer.
    pub fn follows_pointer(&self) -> bool {
        self.on_mouse_move.is_some()
    }
}
