//! One-shot "fade up when first visible" animation.
//!
//! Each rendered block owns a [`Reveal`] flag. A visibility observer feeds
//! it intersection changes; the block turns visible the first time it
//! intersects and never goes back, whatever scrolling happens afterwards.

/// Timing and geometry of the fade-up transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSettings {
    /// Initial downward offset in pixels
    pub offset_px: u32,
    /// Transition duration in milliseconds
    pub duration_ms: u32,
    /// Observer root margin; negative shrinks the viewport so blocks
    /// reveal a little after they scroll in
    pub root_margin: &'static str,
}

/// Settings used by the page.
pub const FADE_UP: RevealSettings = RevealSettings {
    offset_px: 12,
    duration_ms: 500,
    root_margin: "-100px",
};

/// Per-element one-shot flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    /// Feed one intersection change. Returns `true` exactly once: on the
    /// first call where `intersecting` is true.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Whether the block has been revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl RevealSettings {
    /// CSS for the hidden and revealed states. Rules only apply under
    /// [`crate::hooks::REVEAL_READY_CLASS`], so the page stays fully visible
    /// when the interaction module never loads.
    pub fn css(&self) -> String {
        format!(
            ".{ready} [{attr}] {{ opacity: 0; transform: translateY({offset}px); \
             transition: opacity {ms}ms ease, transform {ms}ms ease; }}\n\
             .{ready} [{attr}].{shown} {{ opacity: 1; transform: none; }}\n",
            ready = crate::hooks::REVEAL_READY_CLASS,
            attr = crate::hooks::REVEAL_ATTR,
            shown = crate::hooks::REVEALED_CLASS,
            offset = self.offset_px,
            ms = self.duration_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_on_first_intersection() {
        let mut r = Reveal::default();
        assert!(!r.observe(false));
        assert!(!r.is_revealed());
        assert!(r.observe(true));
        assert!(r.is_revealed());
    }

    #[test]
    fn never_retriggers_after_scroll_out_and_in() {
        let mut r = Reveal::default();
        let fired: Vec<bool> = [true, false, true, false, true]
            .into_iter()
            .map(|i| r.observe(i))
            .collect();
        assert_eq!(fired, vec![true, false, false, false, false]);
        assert!(r.is_revealed());
    }

    #[test]
    fn flags_are_per_instance() {
        let mut a = Reveal::default();
        let b = Reveal::default();
        a.observe(true);
        assert!(a.is_revealed());
        assert!(!b.is_revealed());
    }

    #[test]
    fn css_uses_fade_up_timing() {
        let css = FADE_UP.css();
        assert!(css.contains("translateY(12px)"));
        assert!(css.contains("500ms"));
        assert!(css.contains(".reveal-ready [data-reveal].is-revealed"));
    }
}
