//! In-page navigation. Sections are addressed by element id; a missing id is
//! ignored.

use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

pub const ABOUT: &str = "sobre";
pub const SERVICES: &str = "servicos";
pub const METHOD: &str = "metodologia";
pub const FAQ: &str = "faq";
pub const CONTACT: &str = "contato";

/// Accepts `"contato"` as well as `"#contato"`.
pub fn anchor_id(anchor: &str) -> &str {
    anchor.trim_start_matches('#')
}

pub fn scroll_to_anchor(anchor: &str) {
    let id = anchor_id(anchor);
    let Some(element) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        debug!("no element for anchor #{}", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(anchor_id("#contato"), CONTACT);
        assert_eq!(anchor_id(ABOUT), "sobre");
    }
}
