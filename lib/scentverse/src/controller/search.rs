//! Matching free-text queries against product names.

use crate::model::Product;



// ===================
// === Suggestions ===
// ===================

/// Names of the products whose name contains the query, case-insensitively, in document order.
///
/// An empty query yields no suggestions. The list is neither capped nor deduplicated.
pub fn compute_suggestions<H>(query:&str, products:&[Product<H>]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new()
    }
    let query = query.to_lowercase();
    let names = products.iter().map(|product| &product.name);
    names.filter(|name| name.to_lowercase().contains(&query)).cloned().collect()
}



// ==================
// === Resolution ===
// ==================

/// Stage of the match cascade which resolved a query.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum MatchStage {
    /// The name attribute equals the query verbatim.
    ExactAttribute,
    /// The name equals the query ignoring case.
    CaseInsensitive,
    /// The name contains the query ignoring case.
    Substring,
}

/// Result of resolving a query to a single product.
#[derive(Debug,PartialEq)]
pub enum Resolution<'a,H> {
    /// The query was empty, nothing was attempted.
    Skipped,
    /// No product matches the query.
    NotFound,
    /// The first product matched by the earliest succeeding stage.
    #[allow(missing_docs)]
    Found {product:&'a Product<H>, stage:MatchStage},
}

impl<'a,H> Resolution<'a,H> {
    /// The resolved product, if any.
    pub fn product(&self) -> Option<&'a Product<H>> {
        match self {
            Self::Found {product,..} => Some(*product),
            _                        => None,
        }
    }
}

/// Resolve the query with the three-stage cascade: exact attribute match, case-insensitive exact
/// match, case-insensitive substring match. Within a stage the first product in document order
/// wins. A query that is empty after trimming is skipped.
pub fn resolve<'a,H>(name:&str, products:&'a [Product<H>]) -> Resolution<'a,H> {
    let name = name.trim();
    if name.is_empty() {
        return Resolution::Skipped
    }
    let lowercase = name.to_lowercase();
    let exact     = || products.iter().find(|p| p.name_attribute.as_deref() == Some(name));
    let equal     = || products.iter().find(|p| p.name.to_lowercase() == lowercase);
    let contains  = || products.iter().find(|p| p.name.to_lowercase().contains(&lowercase));
    let found     = exact().map(|product| (product,MatchStage::ExactAttribute))
        .or_else(|| equal().map(|product| (product,MatchStage::CaseInsensitive)))
        .or_else(|| contains().map(|product| (product,MatchStage::Substring)));
    match found {
        Some((product,stage)) => Resolution::Found {product,stage},
        None                  => Resolution::NotFound,
    }
}



// =============
// === Tests ===
// =============
