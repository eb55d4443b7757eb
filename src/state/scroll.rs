//! Scroll-derived decisions: progress ratio, navbar hide/show, active
//! section. Kept free of DOM types so they run under the host test harness;
//! the components feed them measurements from `web_sys`.

/// Downward scrolls above this offset hide the navbar.
pub const NAVBAR_HIDE_THRESHOLD_PX: f64 = 150.0;

/// Quiet period after which a hidden navbar is forced visible again.
pub const NAVBAR_WATCHDOG_MS: u32 = 600;

/// Scroll-to-top button appears past this progress ratio.
pub const SCROLL_TOP_VISIBLE_RATIO: f64 = 0.15;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    Hero,
    About,
    Services,
    Work,
    Faq,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Services,
        Self::Work,
        Self::Faq,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Work => "work",
            Self::Faq => "faq",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

/// Ratio of the current offset to the total scrollable distance, clamped to
/// `[0, 1]`. A page shorter than the viewport reports 0.
pub fn progress_ratio(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Hide only while scrolling down and already past the threshold, so the
/// navbar never disappears near the top of the page.
pub fn navbar_hidden(latest: f64, previous: f64) -> bool {
    latest > previous && latest > NAVBAR_HIDE_THRESHOLD_PX
}

/// Picks the last section whose top edge has crossed the viewport midpoint,
/// i.e. the section currently being read. `tops` must follow the document
/// order of [`SectionId::ALL`].
pub fn active_section(tops: &[(SectionId, f64)], midpoint: f64) -> SectionId {
    let mut current = SectionId::Hero;
    for &(section, top) in tops {
        if top <= midpoint {
            current = section;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_stays_in_unit_interval_and_is_monotone() {
        let doc = 5000.0;
        let view = 1000.0;
        let mut last = -1.0;
        for step in 0..=50 {
            let y = step as f64 * 100.0;
            let ratio = progress_ratio(y, doc, view);
            assert!((0.0..=1.0).contains(&ratio));
            assert!(ratio >= last);
            last = ratio;
        }
        assert_eq!(progress_ratio(0.0, doc, view), 0.0);
        assert_eq!(progress_ratio(4000.0, doc, view), 1.0);
        assert_eq!(progress_ratio(9999.0, doc, view), 1.0);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        assert_eq!(progress_ratio(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(50.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn navbar_hides_only_scrolling_down_past_threshold() {
        assert!(navbar_hidden(200.0, 180.0));
        assert!(!navbar_hidden(180.0, 200.0));
        assert!(!navbar_hidden(140.0, 100.0));
        assert!(!navbar_hidden(150.0, 140.0));
        assert!(navbar_hidden(151.0, 140.0));
        assert!(!navbar_hidden(200.0, 200.0));
    }

    #[test]
    fn active_section_picks_lowest_crossed_top() {
        let offsets = [0.0, 800.0, 1600.0, 2400.0, 3200.0, 4000.0];
        let viewport = 1000.0;
        let scroll_y = 900.0;
        let tops: Vec<_> = SectionId::ALL
            .iter()
            .zip(offsets)
            .map(|(&s, off)| (s, off - scroll_y))
            .collect();
        assert_eq!(active_section(&tops, viewport / 2.0), SectionId::About);
    }

    #[test]
    fn active_section_defaults_to_first() {
        let tops: Vec<_> = SectionId::ALL.iter().map(|&s| (s, 10_000.0)).collect();
        assert_eq!(active_section(&tops, 500.0), SectionId::Hero);
        assert_eq!(active_section(&[], 500.0), SectionId::Hero);
    }

    #[test]
    fn bottom_of_page_activates_contact() {
        let tops: Vec<_> = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i as f64 * 100.0 - 5000.0))
            .collect();
        assert_eq!(active_section(&tops, 500.0), SectionId::Contact);
    }
}
