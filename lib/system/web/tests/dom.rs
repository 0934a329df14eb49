use logger::Logger;
use logger::LoggerApi;
use showcase_system_web::*;
use showcase_system_web::event::Slot;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);



// ===============
// === Fixture ===
// ===============

struct Fixture {
    root : Element,
}

impl Fixture {
    fn new(html:&str) -> Self {
        let document = document().unwrap();
        let root     = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Fixture {root}
    }

    fn button(&self, id:&str) -> HtmlElement {
        get_element_by_id_as(id).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn counter() -> (Rc<Cell<usize>>, impl FnMut(MouseEvent) + 'static) {
    let count    = Rc::new(Cell::new(0));
    let callback = { let count = count.clone(); move |_:MouseEvent| count.set(count.get() + 1) };
    (count,callback)
}



// ===============
// === Lookups ===
// ===============

#[wasm_bindgen_test]
fn queries_return_elements_in_document_order() {
    let fixture = Fixture::new(r#"<p class="t">1</p><div><p class="t">2</p></div><p>3</p>"#);
    let texts   = query_selector_all(".t").unwrap().into_iter().filter_map(|e| e.text_content());
    assert_eq!(texts.collect::<Vec<_>>(), vec!["1","2"]);
    let within  = query_selector_all_within(&fixture.root,"p").unwrap();
    assert_eq!(within.len(), 3);
}

#[wasm_bindgen_test]
fn scoped_query_ignores_elements_outside_root() {
    let fixture = Fixture::new(r#"<p class="s">out</p><div id="scope"><p class="s">in</p></div>"#);
    let scope   = get_element_by_id("scope").unwrap();
    let found   = query_selector_within(&scope,".s").unwrap();
    assert_eq!(found.text_content(), Some("in".to_string()));
    assert!(matches!(query_selector_within(&scope,".none"), Err(Error::Missing{..})));
    drop(fixture);
}

#[wasm_bindgen_test]
fn missing_and_mistyped_elements_are_errors() {
    let _fixture = Fixture::new(r#"<div id="plain"></div>"#);
    assert!(matches!(get_element_by_id("nothing-here"), Err(Error::Missing{..})));
    assert!(matches!(query_selector(".nothing-here"), Err(Error::Missing{..})));
    let input = get_element_by_id_as::<HtmlInputElement>("plain");
    assert!(matches!(input, Err(Error::TypeMismatch{..})));
}

#[wasm_bindgen_test]
fn class_and_style_helpers() {
    let fixture = Fixture::new(r#"<button id="styled"></button>"#);
    let logger  = Logger::new("Test");
    let button  = fixture.button("styled");
    button.add_class_or_warn("highlight",&logger);
    assert!(button.has_class("highlight"));
    button.remove_class_or_warn("highlight",&logger);
    assert!(!button.has_class("highlight"));
    assert_eq!(button.inline_style("overflow"), "");
    button.set_style_or_warn("overflow","hidden",&logger);
    assert_eq!(button.inline_style("overflow"), "hidden");
}



// ============
// === Slot ===
// ============

#[wasm_bindgen_test]
fn slot_calls_callback_until_cleared() {
    let fixture         = Fixture::new(r#"<button id="slot"></button>"#);
    let button          = fixture.button("slot");
    let (count,handler) = counter();
    let mut slot        = Slot::<event::Click>::with_callback(&button,&Logger::new("Test"),handler);
    assert!(slot.is_active());
    button.click();
    button.click();
    assert_eq!(count.get(), 2);
    slot.clear_callback();
    assert!(!slot.is_active());
    button.click();
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
fn slot_follows_its_target() {
    let fixture         = Fixture::new(r#"<button id="a"></button><button id="b"></button>"#);
    let (first,second)  = (fixture.button("a"),fixture.button("b"));
    let (count,handler) = counter();
    let mut slot        = Slot::<event::Click>::with_callback(&first,&Logger::new("Test"),handler);
    slot.set_target(&second);
    first.click();
    assert_eq!(count.get(), 0);
    second.click();
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn dropped_slot_unregisters() {
    let fixture         = Fixture::new(r#"<button id="dropped"></button>"#);
    let button          = fixture.button("dropped");
    let (count,handler) = counter();
    let slot            = Slot::<event::Click>::with_callback(&button,&Logger::new("Test"),handler);
    drop(slot);
    button.click();
    assert_eq!(count.get(), 0);
}
