use dioxus::core::Task;
use dioxus::prelude::*;

use super::{run_sequence, ProgressState, SequenceSlot};

/// Simulated navigation progress bar.
///
/// Every change of `path` (and the first mount) restarts a fixed sequence:
/// 0% immediately, then 30/60/90/100% at 100/300/600/800ms, hidden at 1000ms.
/// Any sequence still running for an earlier path is cancelled first, and
/// unmounting cancels the running one. The bar does not track real loading.
#[component]
pub fn PageProgress(path: String) -> Element {
    let mut state = use_signal(ProgressState::default);
    let mut slot = use_signal(SequenceSlot::<Task>::default);

    use_effect(use_reactive!(|(path,)| {
        tracing::trace!(%path, "starting page progress sequence");
        let task = spawn(async move {
            run_sequence(move |next| state.set(next)).await;
        });
        slot.write().replace(task);
    }));

    use_drop(move || {
        if let Ok(mut slot) = slot.try_write() {
            slot.clear();
        }
    });

    let current = state();
    rsx! {
        ProgressBar { progress: current.progress, loading: current.loading }
    }
}

/// The bar itself: nothing while idle, a fixed top strip while loading.
#[component]
pub fn ProgressBar(progress: u8, loading: bool) -> Element {
    if !loading {
        return rsx! {};
    }
    let width = progress.min(100);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "page-progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{width}",
            div {
                class: "page-progress-indicator",
                style: "width: {width}%;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::{NoOpMutations, VirtualDom};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::time::Instant;

    /// The bar's rendered percent, or "hidden" when nothing is rendered.
    fn bar_state(html: &str) -> String {
        match html.split("aria-valuenow=\"").nth(1) {
            Some(rest) => rest.split('"').next().unwrap_or_default().to_string(),
            None => "hidden".to_string(),
        }
    }

    /// Drive `dom` for `span` of (paused) time, recording each visible change
    /// of the bar as (milliseconds since start, state).
    async fn record_bar(dom: &mut VirtualDom, span: Duration) -> Vec<(u64, String)> {
        let origin = Instant::now();
        let deadline = origin + span;
        let mut log: Vec<(u64, String)> = Vec::new();
        loop {
            dom.render_immediate(&mut NoOpMutations);
            let state = bar_state(&dioxus_ssr::render(dom));
            if log.last().map(|(_, last)| *last != state).unwrap_or(true) {
                log.push((origin.elapsed().as_millis() as u64, state));
            }
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
        // Before the first effect runs the bar is not shown yet.
        log.retain(|(at, state)| !(*at == 0 && state == "hidden"));
        log
    }

    #[component]
    fn PathSwitchesAt50ms() -> Element {
        let mut path = use_signal(|| "/admin/services".to_string());
        use_hook(|| {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                path.set("/admin/snippets".to_string());
            })
        });
        rsx! {
            PageProgress { path: path() }
        }
    }

    #[component]
    fn UnmountsAt150ms() -> Element {
        let mut shown = use_signal(|| true);
        use_hook(|| {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(150)).await;
                shown.set(false);
            })
        });
        rsx! {
            if shown() {
                PageProgress { path: "/admin/services" }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn path_change_restarts_sequence_and_drops_stale_updates() {
        let mut dom = VirtualDom::new(PathSwitchesAt50ms);
        dom.rebuild_in_place();

        let log = record_bar(&mut dom, Duration::from_millis(1500)).await;
        let expected: Vec<(u64, String)> = [
            (0, "0"),
            (150, "30"),
            (350, "60"),
            (650, "90"),
            (850, "100"),
            (1050, "hidden"),
        ]
        .into_iter()
        .map(|(at, state)| (at, state.to_string()))
        .collect();
        assert_eq!(log, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_leaves_no_pending_update() {
        let mut dom = VirtualDom::new(UnmountsAt150ms);
        dom.rebuild_in_place();

        let log = record_bar(&mut dom, Duration::from_millis(2000)).await;
        let expected: Vec<(u64, String)> = [(0, "0"), (100, "30"), (150, "hidden")]
            .into_iter()
            .map(|(at, state)| (at, state.to_string()))
            .collect();
        assert_eq!(log, expected);

        let more_work =
            tokio::time::timeout(Duration::from_secs(2), dom.wait_for_work()).await;
        assert!(more_work.is_err());
        drop(dom);
    }

    #[test]
    fn idle_bar_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! {
            ProgressBar { progress: 60, loading: false }
        });
        assert!(!html.contains("page-progress"));
    }

    #[test]
    fn loading_bar_width_tracks_progress() {
        let html = dioxus_ssr::render_element(rsx! {
            ProgressBar { progress: 60, loading: true }
        });
        assert!(html.contains("class=\"page-progress\""));
        assert!(html.contains("width: 60%;"));
        assert!(html.contains("aria-valuenow=\"60\""));
    }

    #[test]
    fn width_is_capped_at_full() {
        let html = dioxus_ssr::render_element(rsx! {
            ProgressBar { progress: 250, loading: true }
        });
        assert!(html.contains("width: 100%;"));
    }

    #[test]
    fn page_progress_is_hidden_before_first_tick() {
        let html = dioxus_ssr::render_element(rsx! {
            PageProgress { path: "/admin/services" }
        });
        assert!(!html.contains("page-progress"));
    }
}
