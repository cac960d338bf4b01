use std::time::Duration;

/// Snapshot of the simulated navigation progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub loading: bool,
}

impl ProgressState {
    pub const HIDDEN: ProgressState = ProgressState {
        progress: 0,
        loading: false,
    };

    pub fn showing(progress: u8) -> Self {
        Self {
            progress: progress.min(100),
            loading: true,
        }
    }
}

/// Progress steps as (milliseconds after the path change, percent).
pub const PROGRESS_STEPS: &[(u64, u8)] = &[(100, 30), (300, 60), (600, 90), (800, 100)];

/// How long the full bar stays up after the last step.
pub const HIDE_AFTER_COMPLETE_MS: u64 = 200;

/// Milliseconds from a path change until the bar is hidden.
pub fn total_duration_ms() -> u64 {
    PROGRESS_STEPS.last().map(|(at, _)| *at).unwrap_or(0) + HIDE_AFTER_COMPLETE_MS
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Drive one progress sequence, handing each state to `apply` in order.
///
/// The future must be dropped (by cancelling the task that owns it) to stop
/// a sequence early; nothing is applied after the drop.
pub async fn run_sequence(mut apply: impl FnMut(ProgressState)) {
    apply(ProgressState::showing(0));
    let mut elapsed = 0;
    for &(at, progress) in PROGRESS_STEPS {
        sleep(Duration::from_millis(at - elapsed)).await;
        elapsed = at;
        apply(ProgressState::showing(progress));
    }
    sleep(Duration::from_millis(HIDE_AFTER_COMPLETE_MS)).await;
    apply(ProgressState::HIDDEN);
}

/// A handle to a running sequence that can be cancelled.
pub trait SequenceHandle {
    fn cancel_sequence(self);
}

impl SequenceHandle for dioxus::core::Task {
    fn cancel_sequence(self) {
        self.cancel();
    }
}

/// Holds the one sequence that is allowed to update the bar.
///
/// Starting a new sequence cancels the previous one in the same step, so two
/// sequences never interleave their updates.
#[derive(Debug)]
pub struct SequenceSlot<H: SequenceHandle> {
    current: Option<H>,
}

impl<H: SequenceHandle> Default for SequenceSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: SequenceHandle> SequenceSlot<H> {
    /// Install `handle` as the current sequence, cancelling the old one.
    pub fn replace(&mut self, handle: H) {
        if let Some(previous) = self.current.replace(handle) {
            previous.cancel_sequence();
        }
    }

    /// Cancel the current sequence, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel_sequence();
        }
    }
}
