/// Entrance animation played when a [`LazySection`](super::LazySection) reveals its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LazyAnimation {
    #[default]
    Fade,
    Slide,
    Scale,
    /// Children appear immediately with no wrapper.
    None,
}

/// All presets in display order.
pub const ALL_ANIMATIONS: &[LazyAnimation] = &[
    LazyAnimation::Fade,
    LazyAnimation::Slide,
    LazyAnimation::Scale,
    LazyAnimation::None,
];

/// Seconds every entrance animation runs for.
pub const ENTER_DURATION_SECS: f64 = 0.6;

/// Timing function shared by every preset.
pub const ENTER_EASING: &str = "ease-out";

/// One end of an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub opacity: f64,
    pub transform: &'static str,
}

/// Hidden and visible frames for a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrames {
    pub hidden: MotionFrame,
    pub visible: MotionFrame,
}

impl LazyAnimation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LazyAnimation::Fade => "fade",
            LazyAnimation::Slide => "slide",
            LazyAnimation::Scale => "scale",
            LazyAnimation::None => "none",
        }
    }

    /// Parse a preset key, falling back to `Fade`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "slide" => LazyAnimation::Slide,
            "scale" => LazyAnimation::Scale,
            "none" => LazyAnimation::None,
            _ => LazyAnimation::Fade,
        }
    }

    /// Frames to interpolate between, or `None` for the unanimated preset.
    pub fn frames(&self) -> Option<MotionFrames> {
        let visible_at = |transform| MotionFrame {
            opacity: 1.0,
            transform,
        };
        match self {
            LazyAnimation::Fade => Some(MotionFrames {
                hidden: MotionFrame {
                    opacity: 0.0,
                    transform: "none",
                },
                visible: visible_at("none"),
            }),
            LazyAnimation::Slide => Some(MotionFrames {
                hidden: MotionFrame {
                    opacity: 0.0,
                    transform: "translateY(50px)",
                },
                visible: visible_at("translateY(0)"),
            }),
            LazyAnimation::Scale => Some(MotionFrames {
                hidden: MotionFrame {
                    opacity: 0.0,
                    transform: "scale(0.8)",
                },
                visible: visible_at("scale(1)"),
            }),
            LazyAnimation::None => None,
        }
    }

    /// Inline style for the animated wrapper.
    ///
    /// The frames travel as custom properties so a single `@keyframes`
    /// rule in the stylesheet serves every preset. Negative delays clamp to 0.
    pub fn container_style(&self, delay_secs: f64) -> Option<String> {
        let frames = self.frames()?;
        let delay = delay_secs.max(0.0);
        Some(format!(
            "--lazy-from-opacity: {}; --lazy-from-transform: {}; \
             --lazy-to-opacity: {}; --lazy-to-transform: {}; \
             animation: lazy-section-enter {ENTER_DURATION_SECS}s {ENTER_EASING} {delay}s both;",
            frames.hidden.opacity,
            frames.hidden.transform,
            frames.visible.opacity,
            frames.visible.transform,
        ))
    }
}
