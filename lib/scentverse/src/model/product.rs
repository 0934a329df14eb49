//! Products displayed on the page and the repository listing them.

use crate::prelude::*;

use crate::config::Selectors;
use crate::constants;

use showcase_system_web::ClassSetter;
use showcase_system_web::Element;



// ===============
// === Product ===
// ===============

/// A displayed catalog item.
///
/// `H` is the handle of the visual element the product occupies: a DOM element in the browser,
/// any test double elsewhere.
#[derive(Clone,Debug,PartialEq)]
pub struct Product<H> {
    /// Value of the explicit name attribute, if present.
    pub name_attribute : Option<String>,
    /// Display name: the name attribute, falling back to the heading text.
    pub name           : String,
    /// Scroll and highlight target.
    pub handle         : H,
}

impl<H> Product<H> {
    /// Constructor. The display name is the attribute when non-empty, otherwise the heading text,
    /// otherwise empty.
    pub fn new(name_attribute:Option<String>, heading:Option<String>, handle:H) -> Self {
        let attribute = name_attribute.clone().filter(|name| !name.is_empty());
        let name      = attribute.or(heading).unwrap_or_default();
        Self {name_attribute,name,handle}
    }

    /// Product with an explicit name attribute.
    pub fn named(name:impl Into<String>, handle:H) -> Self {
        Self::new(Some(name.into()),None,handle)
    }
}



// =========================
// === ProductRepository ===
// =========================

/// Read-only access to the products currently on the page, in document order.
///
/// Implementations must not cache: every call reflects what is rendered right now.
pub trait ProductRepository {
    /// Handle of a product's visual element.
    type Handle : Clone;

    /// List the products in document order.
    fn list_products(&self) -> Vec<Product<Self::Handle>>;
}

impl<H:Clone> ProductRepository for Vec<Product<H>> {
    type Handle = H;
    fn list_products(&self) -> Vec<Product<H>> {
        self.clone()
    }
}



// ======================
// === ProductElement ===
// ======================

/// DOM element of a product.
#[derive(Clone,Debug)]
pub struct ProductElement {
    /// The element itself.
    pub element : Element,
    logger      : Logger,
}

impl PartialEq for ProductElement {
    fn eq(&self, other:&Self) -> bool {
        self.element == other.element
    }
}

impl controller::highlight::HighlightTarget for ProductElement {
    fn set_highlighted(&self, highlighted:bool) {
        if highlighted {
            self.element.add_class_or_warn(constants::HIGHLIGHT_CLASS,&self.logger)
        } else {
            self.element.remove_class_or_warn(constants::HIGHLIGHT_CLASS,&self.logger)
        }
    }

    fn is_highlighted(&self) -> bool {
        self.element.has_class(constants::HIGHLIGHT_CLASS)
    }

    fn scroll_into_view(&self) {
        web::scroll_into_view_centered(&self.element)
    }
}



// ============================
// === DomProductRepository ===
// ============================

/// Lists the product elements by querying the document on every call.
#[derive(Clone,Debug)]
pub struct DomProductRepository {
    logger    : Logger,
    selectors : Rc<Selectors>,
}

impl DomProductRepository {
    /// Constructor.
    pub fn new(logger:&Logger, selectors:Rc<Selectors>) -> Self {
        let logger = logger.sub("DomProductRepository");
        Self {logger,selectors}
    }

    fn product_of(&self, element:Element) -> Product<ProductElement> {
        let attribute = element.get_attribute(&self.selectors.product_name_attribute);
        let heading   = element.query_selector(&self.selectors.product_heading).ok().flatten();
        let heading   = heading.and_then(|heading| heading.text_content());
        let logger    = self.logger.clone();
        Product::new(attribute,heading,ProductElement {element,logger})
    }
}

impl ProductRepository for DomProductRepository {
    type Handle = ProductElement;

    fn list_products(&self) -> Vec<Product<ProductElement>> {
        match web::query_selector_all(&self.selectors.product) {
            Ok(elements) => elements.into_iter().map(|element| self.product_of(element)).collect(),
            Err(err)     => {
                warning!(self.logger, "Cannot list products: {}", err);
                default()
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

    #[test]
    fn name_prefers_attribute_over_heading() {
        let product = Product::new(Some("Rose".into()),Some("Rose Eau".into()),());
        assert_eq!(product.name, "Rose");
        let product = Product::new(None,Some("Rose Eau".into()),());
        assert_eq!(product.name, "Rose Eau");
        assert_eq!(product.name_attribute, None);
        let product = Product::<()>::new(None,None,());
        assert_eq!(product.name, "");
    }

    #[test]
    fn empty_attribute_falls_back_to_heading() {
        let product = Product::new(Some(String::new()),Some("Vetiver".into()),0);
        assert_eq!(product.name, "Vetiver");
        assert_eq!(product.name_attribute, Some(String::new()));
        let products = vec![product];
        let found    = controller::search::resolve("vetiver",&products).product().map(|p| p.handle);
        assert_eq!(controller::search::compute_suggestions("vet",&products), vec!["Vetiver"]);
        assert_eq!(found, Some(0));
    }

    #[test]
    fn vector_repository_lists_in_order() {
        let products = vec![Product::named("A",1), Product::named("B",2)];
        let names    = products.list_products().into_iter().map(|p| p.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["A","B"]);
    }
}
