//! Product Finder controller: suggestions while typing and resolving a query to a highlighted
//! product.

use crate::prelude::*;

use crate::controller::highlight::HighlightTarget;
use crate::controller::highlight::Highlighter;
use crate::controller::highlight::Scheduler;
use crate::controller::notification;
use crate::controller::notification::Notifier;
use crate::controller::search;
use crate::controller::search::MatchStage;
use crate::controller::search::Resolution;
use crate::model::ProductRepository;



// =====================
// === SearchOutcome ===
// =====================

/// What happened when a query was searched.
#[derive(Clone,Debug,Eq,PartialEq)]
pub enum SearchOutcome {
    /// The query was blank. Nothing was shown nor scrolled.
    Skipped,
    /// No product matched. The user was notified.
    NotFound,
    /// The named product was highlighted.
    #[allow(missing_docs)]
    Highlighted {name:String, stage:MatchStage},
}



// ==============
// === Finder ===
// ==============

/// Product Finder controller.
///
/// Reads the product list from the repository on every operation, so it always reflects the
/// current page.
#[derive(Derivative)]
#[derivative(Debug(bound="R:Debug, S:Debug"))]
pub struct Finder<R,S:Scheduler,N> {
    logger      : Logger,
    repository  : R,
    highlighter : Highlighter<S>,
    #[derivative(Debug="ignore")]
    notifier    : N,
}

impl<R,S,N> Finder<R,S,N>
where R       : ProductRepository,
      R::Handle : HighlightTarget,
      S       : Scheduler,
      N       : Notifier {
    /// Constructor.
    pub fn new
    (logger:&Logger, repository:R, scheduler:S, notifier:N, highlight_duration_ms:u32) -> Self {
        let logger      = logger.sub("Finder");
        let highlighter = Highlighter::new(&logger,scheduler,highlight_duration_ms);
        Self {logger,repository,highlighter,notifier}
    }

    /// Suggestions for the query, trimmed of surrounding whitespace.
    pub fn suggestions(&self, query:&str) -> Vec<String> {
        let products = self.repository.list_products();
        search::compute_suggestions(query.trim(),&products)
    }

    /// Resolve the name to a product, scroll to it and highlight it. Notifies the user when
    /// nothing matches.
    pub fn scroll_to_product(&self, name:&str) -> SearchOutcome {
        let name     = name.trim();
        let products = self.repository.list_products();
        match search::resolve(name,&products) {
            Resolution::Skipped => SearchOutcome::Skipped,
            Resolution::NotFound => {
                info!(self.logger, "No product found for '{}'.", name);
                self.notifier.notify(&notification::product_not_found(name));
                SearchOutcome::NotFound
            }
            Resolution::Found {product,stage} => {
                debug!(self.logger, "Found '{}' ({:?}).", product.name, stage);
                let handles = products.iter().map(|product| &product.handle);
                self.highlighter.highlight(&product.handle,handles);
                let name = product.name.clone();
                SearchOutcome::Highlighted {name,stage}
            }
        }
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod test {
    use super::*;

    use crate::controller::test_utils::*;
    use crate::model::Product;

    type TestFinder = Finder<Rc<RefCell<Vec<Product<TestTarget>>>>,ManualScheduler,RecordingNotifier>;

    impl ProductRepository for Rc<RefCell<Vec<Product<TestTarget>>>> {
        type Handle = TestTarget;
        fn list_products(&self) -> Vec<Product<TestTarget>> {
            self.borrow().clone()
        }
    }

    struct Fixture {
        products  : Rc<RefCell<Vec<Product<TestTarget>>>>,
        scheduler : ManualScheduler,
        notifier  : RecordingNotifier,
        finder    : TestFinder,
    }

    impl Fixture {
        fn new(names:&[&str]) -> Self {
            let products  = names.iter().enumerate();
            let products  = products.map(|(ix,name)| Product::named(*name,TestTarget::new(ix)));
            let products  = Rc::new(RefCell::new(products.collect::<Vec<_>>()));
            let scheduler = ManualScheduler::default();
            let notifier  = RecordingNotifier::default();
            let logger    = Logger::new("Test");
            let finder    = Finder::new(&logger,products.clone(),scheduler.clone(),notifier.clone(),2600);
            Fixture {products,scheduler,notifier,finder}
        }

        fn highlighted(&self) -> Vec<String> {
            let products = self.products.borrow();
            products.iter().filter(|p| p.handle.is_highlighted()).map(|p| p.name.clone()).collect()
        }
    }

    #[test]
    fn ocean_scenario() {
        let fixture = Fixture::new(&["Ocean Breeze","Ocean Mist"]);
        assert_eq!(fixture.finder.suggestions("ocean"), vec!["Ocean Breeze","Ocean Mist"]);
        let outcome = fixture.finder.scroll_to_product("ocean");
        let name    = "Ocean Breeze".to_string();
        assert_eq!(outcome, SearchOutcome::Highlighted {name,stage:MatchStage::Substring});
        assert_eq!(fixture.highlighted(), vec!["Ocean Breeze"]);
        assert!(fixture.notifier.messages().is_empty());
    }

    #[test]
    fn empty_query_does_nothing() {
        let fixture = Fixture::new(&["Ocean Breeze"]);
        assert!(fixture.finder.suggestions("").is_empty());
        assert!(fixture.finder.suggestions("   ").is_empty());
        assert_eq!(fixture.finder.scroll_to_product(""), SearchOutcome::Skipped);
        assert!(fixture.notifier.messages().is_empty());
        assert_eq!(fixture.products.borrow()[0].handle.scroll_count(), 0);
    }

    #[test]
    fn missing_product_notifies_with_query() {
        let fixture = Fixture::new(&["Ocean Breeze"]);
        assert_eq!(fixture.finder.scroll_to_product("Sandalwood"), SearchOutcome::NotFound);
        let messages = fixture.notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("\"Sandalwood\""));
        assert!(fixture.highlighted().is_empty());
    }

    #[test]
    fn query_is_trimmed_before_resolution() {
        let fixture = Fixture::new(&["Rosemary","Rose"]);
        let outcome = fixture.finder.scroll_to_product("  Rose ");
        let name    = "Rose".to_string();
        assert_eq!(outcome, SearchOutcome::Highlighted {name,stage:MatchStage::ExactAttribute});
    }

    #[test]
    fn products_are_read_on_every_search() {
        let fixture = Fixture::new(&["Amber"]);
        assert_eq!(fixture.finder.scroll_to_product("Oud"), SearchOutcome::NotFound);
        fixture.products.borrow_mut().push(Product::named("Oud Royale",TestTarget::new(1)));
        assert_eq!(fixture.finder.suggestions("oud"), vec!["Oud Royale"]);
        assert!(matches!(fixture.finder.scroll_to_product("Oud"), SearchOutcome::Highlighted{..}));
    }

    #[test]
    fn highlight_moves_and_expires() {
        let fixture = Fixture::new(&["Amber","Cedar"]);
        fixture.finder.scroll_to_product("Amber");
        fixture.scheduler.advance(1000);
        fixture.finder.scroll_to_product("Cedar");
        assert_eq!(fixture.highlighted(), vec!["Cedar"]);
        fixture.scheduler.advance(2599);
        assert_eq!(fixture.highlighted(), vec!["Cedar"]);
        fixture.scheduler.advance(1);
        assert!(fixture.highlighted().is_empty());
    }
}
