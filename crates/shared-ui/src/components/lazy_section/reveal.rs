/// One-way reveal state of a lazy section.
///
/// The only transition is `Waiting -> Revealed`; there is no method that
/// goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Waiting,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Feed one intersection observation.
    ///
    /// `ratio` is the visible fraction of the element, or a negative value
    /// when the element is not intersecting at all. Returns `true` only on
    /// the observation that performs the reveal.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.is_revealed() || ratio < 0.0 || ratio + RATIO_TOLERANCE < threshold {
            return false;
        }
        *self = RevealState::Revealed;
        true
    }

    /// Reveal without an observation, used when the host cannot observe.
    pub fn force(&mut self) -> bool {
        let changed = !self.is_revealed();
        *self = RevealState::Revealed;
        changed
    }
}

/// Slack for browsers that report a ratio a hair under the crossed threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Ratio sent by the observer script when intersection observation is
/// unavailable. Larger than any valid threshold, so the section reveals.
pub(crate) const OBSERVER_UNAVAILABLE: f64 = 2.0;

/// Script that attaches an `IntersectionObserver` to the element with `id`
/// and streams each entry's ratio back through `dioxus.send`.
///
/// Non-intersecting entries are reported as `-1` so a zero threshold does
/// not fire for an element that is merely adjacent to the viewport.
pub(crate) fn observe_script(id: &str, threshold: f64, root_margin: &str) -> String {
    let threshold = threshold.clamp(0.0, 1.0);
    let root_margin = root_margin.replace('\\', "").replace('"', "");
    format!(
        r#"
        const el = document.getElementById("{id}");
        if (!el || typeof IntersectionObserver === "undefined") {{
            dioxus.send({OBSERVER_UNAVAILABLE});
            return;
        }}
        window.__lazySections = window.__lazySections || {{}};
        const observer = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                dioxus.send(entry.isIntersecting ? entry.intersectionRatio : -1);
            }}
        }}, {{ threshold: {threshold}, rootMargin: "{root_margin}" }});
        window.__lazySections["{id}"] = observer;
        observer.observe(el);
        "#
    )
}

/// Script that disconnects and forgets the observer registered for `id`.
pub(crate) fn disconnect_script(id: &str) -> String {
    format!(
        r#"
        const sections = window.__lazySections;
        if (sections && sections["{id}"]) {{
            sections["{id}"].disconnect();
            delete sections["{id}"];
        }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_waiting() {
        assert_eq!(RevealState::default(), RevealState::Waiting);
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn below_threshold_keeps_waiting() {
        let mut state = RevealState::default();
        assert!(!state.observe(0.05, 0.1));
        assert!(!state.observe(-1.0, 0.1));
        assert_eq!(state, RevealState::Waiting);
    }

    #[test]
    fn ratio_equal_to_threshold_reveals() {
        let mut state = RevealState::default();
        assert!(state.observe(0.1, 0.1));
        assert!(state.is_revealed());
    }

    #[test]
    fn ratio_just_under_threshold_reveals() {
        let mut state = RevealState::default();
        assert!(state.observe(0.0995, 0.1));
        assert!(state.is_revealed());
    }

    #[test]
    fn reveal_fires_once_and_never_reverts() {
        let mut state = RevealState::default();
        assert!(state.observe(0.5, 0.1));
        // Leaves the viewport, then comes back.
        assert!(!state.observe(-1.0, 0.1));
        assert!(state.is_revealed());
        assert!(!state.observe(0.9, 0.1));
        assert!(state.is_revealed());
    }

    #[test]
    fn zero_threshold_needs_intersection() {
        let mut state = RevealState::default();
        assert!(!state.observe(-1.0, 0.0));
        assert!(state.observe(0.0, 0.0));
    }

    #[test]
    fn unavailable_marker_meets_any_threshold() {
        let mut state = RevealState::default();
        assert!(state.observe(OBSERVER_UNAVAILABLE, 1.0));
    }

    #[test]
    fn force_reports_change_once() {
        let mut state = RevealState::default();
        assert!(state.force());
        assert!(!state.force());
        assert!(state.is_revealed());
    }

    #[test]
    fn observe_script_embeds_options() {
        let js = observe_script("lazy-section-3", 0.25, "50px 0px");
        assert!(js.contains(r#"getElementById("lazy-section-3")"#));
        assert!(js.contains("threshold: 0.25"));
        assert!(js.contains(r#"rootMargin: "50px 0px""#));
    }

    #[test]
    fn observe_script_sends_unavailable_marker() {
        let js = observe_script("x", 0.1, "0px");
        assert!(js.contains("dioxus.send(2);"));
        assert!(js.contains(&format!("dioxus.send({OBSERVER_UNAVAILABLE});")));
    }

    #[test]
    fn observe_script_clamps_threshold_and_strips_quotes() {
        let js = observe_script("x", 3.0, r#"10px" + alert(1) + ""#);
        assert!(js.contains("threshold: 1"));
        assert!(!js.contains(r#"10px" +"#));
    }

    #[test]
    fn disconnect_script_targets_id() {
        let js = disconnect_script("lazy-section-7");
        assert!(js.contains(r#"sections["lazy-section-7"].disconnect()"#));
    }
}
