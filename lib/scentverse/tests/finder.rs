use logger::Logger;
use logger::LoggerApi;
use scentverse::config::Startup;
use scentverse::controller::finder::SearchOutcome;
use scentverse::controller::notification::Notifier;
use scentverse::controller::search::MatchStage;
use scentverse::view::finder::ProductFinder;
use showcase_system_web as web;
use showcase_system_web::ClassSetter;
use showcase_system_web::StyleSetter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::Element;
use web_sys::HtmlElement;
use web_sys::HtmlInputElement;
use web_sys::KeyboardEvent;
use web_sys::KeyboardEventInit;

wasm_bindgen_test_configure!(run_in_browser);



// ===============
// === Fixture ===
// ===============

const PAGE:&str = r#"
    <div class="search-wrap">
        <input id="searchInput" />
        <button id="searchBtn">Search</button>
        <ul id="suggestions"></ul>
    </div>
    <div class="product" data-name="Ocean Breeze"><h3>Ocean Breeze</h3></div>
    <div class="product" data-name="Rose"><h3>Rose</h3></div>
    <div class="product" data-name="Rosemary"><h3>Rosemary</h3></div>
    <div class="product"><h3>Ocean Mist</h3></div>
"#;

#[derive(Clone,Debug,Default)]
struct RecordingNotifier {
    messages : Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message:&str) {
        self.messages.borrow_mut().push(message.to_string())
    }
}

struct Fixture {
    root     : Element,
    notifier : RecordingNotifier,
    finder   : ProductFinder<RecordingNotifier>,
}

impl Fixture {
    fn new() -> Self {
        let document = web::document().unwrap();
        let root     = document.create_element("div").unwrap();
        root.set_inner_html(PAGE);
        document.body().unwrap().append_child(&root).unwrap();
        let logger   = Logger::new("Test");
        let notifier = RecordingNotifier::default();
        let config   = Startup::default();
        let finder   = ProductFinder::new_with_notifier(&logger,&config,notifier.clone()).unwrap();
        Fixture {root,notifier,finder}
    }

    fn input(&self) -> HtmlInputElement {
        web::get_element_by_id_as(&Startup::default().selectors.search_input_id).unwrap()
    }

    fn suggestions(&self) -> HtmlElement {
        web::get_element_by_id_as("suggestions").unwrap()
    }

    fn suggestion_names(&self) -> Vec<String> {
        let items = web::query_selector_all_within(&self.suggestions(),"li").unwrap();
        items.iter().filter_map(|item| item.text_content()).collect()
    }

    fn highlighted(&self) -> Vec<String> {
        let products = web::query_selector_all_within(&self.root,".product").unwrap();
        let products = products.into_iter().filter(|product| product.has_class("highlight"));
        products.filter_map(|product| product.get_attribute("data-name")).collect()
    }

    fn type_query(&self, query:&str) {
        let input = self.input();
        input.set_value(query);
        input.dispatch_event(&web_sys::Event::new("input").unwrap()).unwrap();
    }

    fn press_enter(&self) {
        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown",&init).unwrap();
        self.input().dispatch_event(&event).unwrap();
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}



// =============
// === Tests ===
// =============

#[wasm_bindgen_test]
fn typing_shows_matching_suggestions() {
    let fixture = Fixture::new();
    fixture.type_query("ocean");
    assert_eq!(fixture.suggestion_names(), vec!["Ocean Breeze","Ocean Mist"]);
    assert_eq!(fixture.suggestions().inline_style("display"), "block");
    fixture.type_query("xyz");
    assert!(fixture.suggestion_names().is_empty());
    assert_eq!(fixture.suggestions().inline_style("display"), "none");
}

#[wasm_bindgen_test]
fn empty_query_hides_suggestions_and_skips_search() {
    let fixture = Fixture::new();
    fixture.type_query("");
    assert!(fixture.suggestion_names().is_empty());
    assert_eq!(fixture.suggestions().inline_style("display"), "none");
    assert_eq!(fixture.finder.scroll_to_product("   "), SearchOutcome::Skipped);
    assert!(fixture.notifier.messages.borrow().is_empty());
    assert!(fixture.highlighted().is_empty());
}

#[wasm_bindgen_test]
fn enter_highlights_the_product() {
    let fixture = Fixture::new();
    fixture.type_query("rose");
    fixture.press_enter();
    assert_eq!(fixture.highlighted(), vec!["Rose"]);
    assert_eq!(fixture.suggestions().inline_style("display"), "none");
}

#[wasm_bindgen_test]
fn exact_name_wins_over_substring() {
    let fixture = Fixture::new();
    let outcome = fixture.finder.scroll_to_product("Rose");
    let name    = "Rose".to_string();
    let stage   = MatchStage::ExactAttribute;
    assert_eq!(outcome, SearchOutcome::Highlighted {name,stage});
    let outcome = fixture.finder.scroll_to_product("rosemary");
    let name    = "Rosemary".to_string();
    let stage   = MatchStage::CaseInsensitive;
    assert_eq!(outcome, SearchOutcome::Highlighted {name,stage});
    assert_eq!(fixture.highlighted(), vec!["Rosemary"]);
}

#[wasm_bindgen_test]
fn heading_names_products_without_attribute() {
    let fixture = Fixture::new();
    let outcome = fixture.finder.scroll_to_product("mist");
    let name    = "Ocean Mist".to_string();
    let stage   = MatchStage::Substring;
    assert_eq!(outcome, SearchOutcome::Highlighted {name,stage});
}

#[wasm_bindgen_test]
fn clicking_a_suggestion_picks_it() {
    let fixture = Fixture::new();
    fixture.type_query("mary");
    let items = web::query_selector_all_within(&fixture.suggestions(),"li").unwrap();
    assert_eq!(items.len(), 1);
    items[0].dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(fixture.input().value(), "Rosemary");
    assert_eq!(fixture.highlighted(), vec!["Rosemary"]);
    assert_eq!(fixture.suggestions().inline_style("display"), "none");
}

#[wasm_bindgen_test]
fn search_button_resolves_the_input() {
    let fixture = Fixture::new();
    fixture.input().set_value("  ocean breeze  ");
    let button = web::get_element_by_id_as::<HtmlElement>("searchBtn").unwrap();
    button.click();
    assert_eq!(fixture.highlighted(), vec!["Ocean Breeze"]);
}

#[wasm_bindgen_test]
fn unknown_product_notifies_the_user() {
    let fixture = Fixture::new();
    assert_eq!(fixture.finder.scroll_to_product("Sandalwood"), SearchOutcome::NotFound);
    let messages = fixture.notifier.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("\"Sandalwood\""));
}

#[wasm_bindgen_test]
fn clicking_outside_hides_suggestions() {
    let fixture = Fixture::new();
    fixture.type_query("o");
    assert_eq!(fixture.suggestions().inline_style("display"), "block");
    fixture.input().click();
    assert_eq!(fixture.suggestions().inline_style("display"), "block");
    web::document().unwrap().body().unwrap().click();
    assert_eq!(fixture.suggestions().inline_style("display"), "none");
}
