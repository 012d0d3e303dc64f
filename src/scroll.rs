//! Scroll-position derived navigation state.

pub const HEADER_OFFSET: f64 = 70.0;
pub const NAVBAR_SCROLLED_AFTER: f64 = 100.0;
pub const SECTION_ACTIVATION_LEAD: f64 = 200.0;

pub const HERO_BACKGROUND_RATE: f64 = 0.5;
pub const GRADIENT_RATE: f64 = -0.5;
pub const LITERARY_ELEMENTS_RATE: f64 = -0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

/// Id of the last section, in document order, whose top (minus the lead) has
/// been scrolled past.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.offset_top - SECTION_ACTIVATION_LEAD)
        .map(|section| section.id.as_str())
}

/// What the navbar shows for a scroll position. Most scroll frames leave it
/// unchanged, so callers compare before publishing a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

impl NavState {
    pub fn at(scroll_y: f64, sections: &[SectionBounds]) -> Self {
        Self {
            scrolled: navbar_scrolled(scroll_y),
            active_section: active_section(scroll_y, sections).map(ToString::to_string),
        }
    }
}

pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}

pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    format!("transform: translateY({}px);", scroll_y * rate)
}

/// `#about` -> `about`; anything that is not a same-page anchor -> `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
