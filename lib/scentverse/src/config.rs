//! Page configuration: where the features find their elements and how long their effects last.
//!
//! The defaults match the ScentVerse markup. A page may override any subset of the values by
//! passing a JSON object to `entry_point::run_scentverse_with_config`.

use crate::prelude::*;

use crate::constants;

use serde::Deserialize;



// =================
// === Selectors ===
// =================

/// Element ids and CSS selectors of the collaborating page elements.
#[derive(Clone,Debug,Deserialize,PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    /// Elements representing products.
    pub product                : String,
    /// Product attribute holding its name.
    pub product_name_attribute : String,
    /// Heading inside a product used as its name when the attribute is missing.
    pub product_heading        : String,
    /// Id of the search text input.
    pub search_input_id        : String,
    /// Id of the suggestion list container.
    pub suggestions_id         : String,
    /// Id of the optional search button.
    pub search_button_id       : String,
    /// Wrapper of the search area. Clicks outside of it hide the suggestions.
    pub search_wrap            : String,
    /// Elements revealed on scroll.
    pub reveal_targets         : String,
    /// Hero section.
    pub hero                   : String,
    /// Hero content moved with the pointer.
    pub hero_content           : String,
    /// Controls getting the ripple effect.
    pub ripple_controls        : String,
    /// Images made lazy-loading.
    pub images                 : String,
    /// Id of the subscription form.
    pub subscribe_form_id      : String,
    /// Id of the subscription email input.
    pub subscribe_email_id     : String,
    /// Id of the element showing the current year.
    pub year_id                : String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            product                : ".product".into(),
            product_name_attribute : "data-name".into(),
            product_heading        : "h3".into(),
            search_input_id        : "searchInput".into(),
            suggestions_id         : "suggestions".into(),
            search_button_id       : "searchBtn".into(),
            search_wrap            : ".search-wrap".into(),
            reveal_targets         : "section, .collection-card, .product, .testimonial-card".into(),
            hero                   : ".hero".into(),
            hero_content           : ".hero-content".into(),
            ripple_controls        : ".btn, button".into(),
            images                 : "img".into(),
            subscribe_form_id      : "subscribeForm".into(),
            subscribe_email_id     : "subscribeEmail".into(),
            year_id                : "year".into(),
        }
    }
}



// ===============
// === Timings ===
// ===============

/// Durations of the time-limited effects, in milliseconds.
#[derive(Clone,Copy,Debug,Deserialize,PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    /// How long a found product stays highlighted.
    pub highlight_duration_ms  : u32,
    /// Delay before a ripple starts fading out.
    pub ripple_fade_delay_ms   : u32,
    /// Delay before a ripple is removed.
    pub ripple_remove_delay_ms : u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            highlight_duration_ms  : constants::HIGHLIGHT_DURATION_MS,
            ripple_fade_delay_ms   : constants::RIPPLE_FADE_DELAY_MS,
            ripple_remove_delay_ms : constants::RIPPLE_REMOVE_DELAY_MS,
        }
    }
}



// ===============
// === Startup ===
// ===============

/// Configuration data necessary to initialize the page features.
#[derive(Clone,Debug,Default,Deserialize,PartialEq)]
#[serde(default)]
pub struct Startup {
    /// Where to find the page elements.
    pub selectors : Selectors,
    /// Effect durations.
    pub timings   : Timings,
}

impl Startup {
    /// Read the configuration from a JSON object. Missing fields keep their defaults.
    pub fn from_json(json:&str) -> FallibleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_matches_page_markup() {
        let config = Startup::default();
        assert_eq!(config.selectors.product, ".product");
        assert_eq!(config.selectors.search_input_id, "searchInput");
        assert_eq!(config.timings.highlight_duration_ms, 2600);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json   = r#"{"selectors":{"product":".item"},"timings":{"highlightDurationMs":1000}}"#;
        let config = Startup::from_json(json).unwrap();
        assert_eq!(config.selectors.product, ".item");
        assert_eq!(config.selectors.suggestions_id, "suggestions");
        assert_eq!(config.timings.highlight_duration_ms, 1000);
        assert_eq!(config.timings.ripple_remove_delay_ms, 700);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Startup::from_json("{}").unwrap(), Startup::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Startup::from_json("{selectors:").is_err());
    }
}
