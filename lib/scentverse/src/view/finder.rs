//! Product Finder view: the search input, its suggestion list and the optional search button.

use crate::prelude::*;

use crate::config::Startup;
use crate::constants;
use crate::controller::finder::Finder;
use crate::controller::finder::SearchOutcome;
use crate::controller::highlight::WebScheduler;
use crate::controller::notification::Notifier;
use crate::model::product::DomProductRepository;
use crate::view::notification::AlertNotifier;

use showcase_system_web::event;
use showcase_system_web::f;
use showcase_system_web::f_;
use showcase_system_web::event::Slot;
use showcase_system_web::Element;
use showcase_system_web::HtmlElement;
use showcase_system_web::HtmlInputElement;
use showcase_system_web::KeyboardEvent;
use showcase_system_web::MouseEvent;
use showcase_system_web::StyleSetter;



// =============
// === Model ===
// =============

type DomFinder<N> = Finder<DomProductRepository,WebScheduler,N>;

#[derive(Derivative)]
#[derivative(Debug(bound=""))]
struct Model<N> {
    logger      : Logger,
    finder      : DomFinder<N>,
    input       : HtmlInputElement,
    suggestions : HtmlElement,
    search_wrap : String,
}

impl<N:Notifier> Model<N> {
    fn show_suggestions(&self, query:&str) {
        if let Err(err) = self.render_suggestions(query) {
            warning!(self.logger, "Cannot render suggestions: {}", err);
            self.hide_suggestions();
        }
    }

    fn render_suggestions(&self, query:&str) -> web::Result<()> {
        self.suggestions.set_inner_html("");
        let names = self.finder.suggestions(query);
        if names.is_empty() {
            self.hide_suggestions();
            return Ok(())
        }
        let document = web::document()?;
        for name in &names {
            let item = document.create_element("li")?;
            item.set_text_content(Some(name));
            self.suggestions.append_child(&item)?;
        }
        self.suggestions.set_style_or_warn("display","block",&self.logger);
        Ok(())
    }

    fn hide_suggestions(&self) {
        self.suggestions.set_style_or_warn("display","none",&self.logger);
    }

    fn search_input(&self) -> SearchOutcome {
        self.hide_suggestions();
        self.finder.scroll_to_product(&self.input.value())
    }

    fn pick_suggestion(&self, name:&str) -> SearchOutcome {
        self.input.set_value(name);
        self.hide_suggestions();
        self.finder.scroll_to_product(name)
    }

    /// The suggestion item containing the event target, if any.
    fn clicked_suggestion(&self, event:&MouseEvent) -> Option<String> {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        let item   = target.closest("li").ok()??;
        let node   : &web_sys::Node = &item;
        let inside = self.suggestions.contains(Some(node));
        if inside { item.text_content() } else { None }
    }

    fn is_inside_search_area(&self, event:&MouseEvent) -> bool {
        let target = event.target().and_then(|target| target.dyn_into::<Element>().ok());
        let wrap   = target.and_then(|target| target.closest(&self.search_wrap).ok().flatten());
        wrap.is_some()
    }
}



// =====================
// === ProductFinder ===
// =====================

/// Live suggestions while typing and scroll-to-product on Enter, on the search button, or on a
/// picked suggestion.
///
/// Requires the search input and the suggestion container. The search button is optional.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
pub struct ProductFinder<N=AlertNotifier> {
    model             : Rc<Model<N>>,
    on_input          : Slot<event::Input>,
    on_key_down       : Slot<event::KeyDown>,
    on_pick           : Slot<event::Click>,
    on_button_click   : Option<Slot<event::Click>>,
    on_document_click : Slot<event::Click>,
}

impl ProductFinder {
    /// Look up the search elements and register the listeners. Failed searches are reported with
    /// an `alert`.
    pub fn new(logger:&Logger, config:&Startup) -> FallibleResult<Self> {
        let notifier = AlertNotifier::new(logger);
        Self::new_with_notifier(logger,config,notifier)
    }
}

impl<N:Notifier+'static> ProductFinder<N> {
    /// Look up the search elements and register the listeners. Failed searches are reported
    /// through the given notifier.
    pub fn new_with_notifier(logger:&Logger, config:&Startup, notifier:N) -> FallibleResult<Self> {
        let logger      = logger.sub("ProductFinder");
        let selectors   = Rc::new(config.selectors.clone());
        let input       = web::get_element_by_id_as::<HtmlInputElement>(&selectors.search_input_id)?;
        let suggestions = web::get_element_by_id_as::<HtmlElement>(&selectors.suggestions_id)?;
        let button      = web::get_element_by_id(&selectors.search_button_id).ok();
        let document    = web::document()?;
        let search_wrap = selectors.search_wrap.clone();
        let repository  = DomProductRepository::new(&logger,selectors);
        let duration    = config.timings.highlight_duration_ms;
        let finder      = Finder::new(&logger,repository,WebScheduler,notifier,duration);
        let model       = Rc::new(Model {logger,finder,input,suggestions,search_wrap});

        let on_input = Slot::<event::Input>::with_callback(&model.input,&model.logger,f_!([model]
            model.show_suggestions(&model.input.value())
        ));
        let on_key_down = Slot::<event::KeyDown>::with_callback(&model.input,&model.logger,
            f!([model] (event:KeyboardEvent) {
                if event.key() == constants::SEARCH_KEY {
                    event.prevent_default();
                    model.search_input();
                }
            })
        );
        let on_pick = Slot::<event::Click>::with_callback(&model.suggestions,&model.logger,
            f!([model] (event:MouseEvent) {
                if let Some(name) = model.clicked_suggestion(&event) {
                    model.pick_suggestion(&name);
                }
            })
        );
        let on_button_click = button.map(|button| {
            Slot::<event::Click>::with_callback(&button,&model.logger,
                f!([model] (event:MouseEvent) {
                    event.prevent_default();
                    model.search_input();
                })
            )
        });
        let on_document_click = Slot::<event::Click>::with_callback(&document,&model.logger,
            f!([model] (event:MouseEvent) {
                if !model.is_inside_search_area(&event) {
                    model.hide_suggestions();
                }
            })
        );
        debug!(model.logger, "Initialized.");
        Ok(Self {model,on_input,on_key_down,on_pick,on_button_click,on_document_click})
    }

    /// Render the suggestions for the query, hiding the list when there are none.
    pub fn show_suggestions(&self, query:&str) {
        self.model.show_suggestions(query)
    }

    /// Hide the suggestion list.
    pub fn hide_suggestions(&self) {
        self.model.hide_suggestions()
    }

    /// Resolve the name to a product, scroll to it and highlight it.
    pub fn scroll_to_product(&self, name:&str) -> SearchOutcome {
        self.model.finder.scroll_to_product(name)
    }

    /// Behave as if the user picked the suggestion with the given name.
    pub fn pick_suggestion(&self, name:&str) -> SearchOutcome {
        self.model.pick_suggestion(name)
    }
}
