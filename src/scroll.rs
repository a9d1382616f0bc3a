//! Scroll synchronisation for the itinerary timeline. The shell reports raw
//! scroll offsets; the core decides which day section is active, whether the
//! back-to-top button shows, and where day-pill taps should scroll to.

/// Added to the raw scroll position before matching it against section
/// offsets, so the active pill flips while the section header is still
/// under the sticky bar.
pub const ACTIVE_SECTION_PROBE_PX: f64 = 250.0;

/// Back-to-top button appears once the user has scrolled past this.
pub const TOP_BUTTON_THRESHOLD_PX: f64 = 300.0;

/// Day sections are anchored this many pixels above their measured top, to
/// clear the sticky header.
pub const SECTION_ANCHOR_OFFSET_PX: f64 = 180.0;

/// Index of the last section whose top offset is at or above the probe
/// position (`scroll_y + ACTIVE_SECTION_PROBE_PX`). Defaults to the first
/// section when nothing matches or no offsets have been measured yet.
#[must_use]
pub fn active_section(offsets: &[f64], scroll_y: f64) -> usize {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_PX;
    offsets
        .iter()
        .rposition(|&top| top <= probe)
        .unwrap_or(0)
}

#[must_use]
pub fn show_top_button(scroll_y: f64) -> bool {
    scroll_y > TOP_BUTTON_THRESHOLD_PX
}

/// Scroll target for jumping to a section, or `None` when the section has
/// not been measured.
#[must_use]
pub fn section_scroll_target(offsets: &[f64], index: usize) -> Option<f64> {
    offsets
        .get(index)
        .map(|&top| (top - SECTION_ANCHOR_OFFSET_PX).max(0.0))
}
