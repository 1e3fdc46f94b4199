use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scrolls the element with the given id into view.
///
/// Returns `false` without doing anything when there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No element with id '{}', nothing to scroll to", id);
            false
        }
    }
}

pub fn faq_anchor(index: usize) -> String {
    format!("faq-{}", index)
}

/// Reads the entry index out of a `#faq-<n>` location hash.
pub fn parse_faq_anchor(hash: &str) -> Option<usize> {
    hash.strip_prefix('#')
        .unwrap_or(hash)
        .strip_prefix("faq-")?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_anchor_round_trips_through_hash() {
        let hash = format!("#{}", faq_anchor(3));
        assert_eq!(parse_faq_anchor(&hash), Some(3));
    }

    #[test]
    fn rejects_unrelated_hashes() {
        assert_eq!(parse_faq_anchor(""), None);
        assert_eq!(parse_faq_anchor("#about"), None);
        assert_eq!(parse_faq_anchor("#faq-"), None);
        assert_eq!(parse_faq_anchor("#faq-two"), None);
    }

    #[test]
    fn accepts_hash_without_pound_sign() {
        assert_eq!(parse_faq_anchor("faq-0"), Some(0));
    }
}
