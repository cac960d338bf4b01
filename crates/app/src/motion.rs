use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::LazyAnimation;

/// Seconds between consecutive cards revealing together.
const STAGGER_STEP_SECS: f64 = 0.05;

/// Cards past this index share the last delay so long lists don't lag.
const STAGGER_MAX_INDEX: usize = 6;

/// Entrance animation for lazy sections, honoring the `reduced_motion` flag.
pub fn section_animation(flags: &FeatureFlags, preferred: LazyAnimation) -> LazyAnimation {
    if flags.reduced_motion {
        LazyAnimation::None
    } else {
        preferred
    }
}

/// Hook form of [`section_animation`] reading flags from context.
pub fn use_section_animation(preferred: LazyAnimation) -> LazyAnimation {
    let flags: FeatureFlags = use_context();
    section_animation(&flags, preferred)
}

/// Delay for the card at `index` in a grid.
pub fn stagger_delay(index: usize) -> f64 {
    index.min(STAGGER_MAX_INDEX) as f64 * STAGGER_STEP_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_disables_animation() {
        let flags = FeatureFlags {
            reduced_motion: true,
        };
        assert_eq!(
            section_animation(&flags, LazyAnimation::Slide),
            LazyAnimation::None
        );
    }

    #[test]
    fn preferred_animation_kept_by_default() {
        let flags = FeatureFlags::default();
        assert_eq!(
            section_animation(&flags, LazyAnimation::Scale),
            LazyAnimation::Scale
        );
    }

    #[test]
    fn stagger_grows_then_caps() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(2) - 0.1).abs() < 1e-9);
        assert_eq!(stagger_delay(6), stagger_delay(40));
    }
}
