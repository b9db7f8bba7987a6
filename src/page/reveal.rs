/// Elements faded in as they scroll into view.
pub const REVEAL_SELECTOR: &str = ".mission-card, .project-card, .contact-card, .section-header";

/// How far past the bottom edge an element's top must travel before it shows.
pub const REVEAL_OFFSET: f64 = 150.0;

pub fn is_revealed(element_top: f64, window_height: f64) -> bool {
    element_top < window_height - REVEAL_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold() {
        assert!(is_revealed(0.0, 800.0));
        assert!(is_revealed(649.9, 800.0));
        assert!(!is_revealed(650.0, 800.0));
        assert!(!is_revealed(2_000.0, 800.0));
        // already scrolled past
        assert!(is_revealed(-300.0, 800.0));
    }
}
