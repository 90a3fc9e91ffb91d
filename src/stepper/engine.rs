//! Scroll-synchronized stepper core. Plain Rust with no DOM dependency:
//! `stepper::dom` feeds it geometry and receives style/class writes through
//! the [`StepperView`] seam, so all of this is testable without a viewport.

use crate::config;

/// Geometry of the tracked section, sampled fresh on every computation
/// since it depends on the live scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Top of the section relative to the viewport top, in pixels.
    pub top: f64,
    /// Height of the section, in pixels.
    pub height: f64,
    /// Height of the viewport, in pixels.
    pub viewport: f64,
}

/// Where the engine's rail width and step activation writes land.
pub trait StepperView {
    fn set_rail_width(&mut self, value: &str);
    fn set_step_active(&mut self, index: usize, active: bool);
}

/// Outcome of an intersection notification for the listener lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenChange {
    Start,
    Stop,
    /// Already in the requested state; repeated enter/exit notifications
    /// must not duplicate listener registrations.
    Unchanged,
}

/// Continuous progress of the section through its scroll window, in [0, 1].
///
/// The window opens at `SCROLL_WINDOW_START × viewport` (section still below
/// the fold, approaching) and closes at `SCROLL_WINDOW_END × height`
/// (section top slightly above the viewport), with linear interpolation
/// between and clamping outside.
pub fn progress(geometry: &SectionGeometry) -> f64 {
    let start = config::SCROLL_WINDOW_START * geometry.viewport;
    let end = config::SCROLL_WINDOW_END * geometry.height;
    let span = start - end;
    if span <= f64::EPSILON {
        // Degenerate geometry (zero-size section and viewport).
        return 0.0;
    }
    ((start - geometry.top) / span).clamp(0.0, 1.0)
}

/// Evenly spaced activation thresholds for `count` steps, covering [0, 1].
/// Three steps gives the familiar 0.0 / 0.5 / 1.0 table.
pub fn step_thresholds(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

pub struct StepperEngine<V> {
    view: V,
    thresholds: Vec<f64>,
    epsilon: f64,
    listening: bool,
}

impl<V: StepperView> StepperEngine<V> {
    pub fn new(view: V, step_count: usize) -> Self {
        Self {
            view,
            thresholds: step_thresholds(step_count),
            epsilon: config::STEP_EPSILON,
            listening: false,
        }
    }

    /// One full recomputation from a geometry snapshot. The rail and every
    /// step reflect the same progress value; calling this twice with
    /// unchanged geometry produces an identical observable result.
    pub fn update(&mut self, geometry: &SectionGeometry) {
        self.apply(progress(geometry));
    }

    /// Frame-coalesced recomputation path. A frame queued while the section
    /// was in view can still fire after it leaves, so the work is skipped
    /// unless scroll/resize signals are currently being listened to.
    /// Returns whether an update ran.
    pub fn update_if_listening(&mut self, geometry: &SectionGeometry) -> bool {
        if !self.listening {
            return false;
        }
        self.update(geometry);
        true
    }

    /// Terminal state for the reduced-motion path: rail full, every step
    /// active, and no listener will ever be registered.
    pub fn complete(&mut self) {
        self.apply(1.0);
    }

    fn apply(&mut self, progress: f64) {
        self.view.set_rail_width(&format!("{:.2}%", progress * 100.0));
        for (index, threshold) in self.thresholds.iter().enumerate() {
            self.view
                .set_step_active(index, progress >= threshold - self.epsilon);
        }
    }

    /// Record an intersection notification for the tracked section and
    /// report what the listener registration should do about it.
    pub fn set_intersecting(&mut self, intersecting: bool) -> ListenChange {
        if intersecting == self.listening {
            return ListenChange::Unchanged;
        }
        self.listening = intersecting;
        if intersecting {
            ListenChange::Start
        } else {
            ListenChange::Stop
        }
    }

    pub fn listening(&self) -> bool {
        self.listening
    }
}

/// Collapses any number of scroll/resize signals within one rendered frame
/// into a single scheduled recomputation.
#[derive(Default)]
pub struct FrameGate {
    queued: std::cell::Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the caller should schedule a frame; false while one is pending.
    pub fn try_arm(&self) -> bool {
        if self.queued.get() {
            return false;
        }
        self.queued.set(true);
        true
    }

    pub fn release(&self) {
        self.queued.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        rail: Option<String>,
        active: Vec<bool>,
        rail_writes: usize,
    }

    impl StepperView for RecordingView {
        fn set_rail_width(&mut self, value: &str) {
            self.rail = Some(value.to_string());
            self.rail_writes += 1;
        }

        fn set_step_active(&mut self, index: usize, active: bool) {
            if self.active.len() <= index {
                self.active.resize(index + 1, false);
            }
            self.active[index] = active;
        }
    }

    fn geometry(top: f64) -> SectionGeometry {
        SectionGeometry {
            top,
            height: 500.0,
            viewport: 1000.0,
        }
    }

    fn engine() -> StepperEngine<RecordingView> {
        StepperEngine::new(RecordingView::default(), 3)
    }

    #[test]
    fn section_below_window_reports_zero() {
        // viewport 1000, height 500: window runs from top=900 down to top=-100
        let mut engine = engine();
        engine.update(&geometry(950.0));
        assert_eq!(progress(&geometry(950.0)), 0.0);
        assert_eq!(engine.view.rail.as_deref(), Some("0.00%"));
        assert_eq!(engine.view.active, vec![false, false, false]);
    }

    #[test]
    fn section_halfway_through_window_reports_half() {
        let mut engine = engine();
        engine.update(&geometry(400.0));
        assert_eq!(progress(&geometry(400.0)), 0.5);
        assert_eq!(engine.view.rail.as_deref(), Some("50.00%"));
        assert_eq!(engine.view.active, vec![true, true, false]);
    }

    #[test]
    fn section_past_window_reports_full() {
        let mut engine = engine();
        engine.update(&geometry(-150.0));
        assert_eq!(progress(&geometry(-150.0)), 1.0);
        assert_eq!(engine.view.rail.as_deref(), Some("100.00%"));
        assert_eq!(engine.view.active, vec![true, true, true]);
    }

    #[test]
    fn progress_clamps_exactly_at_window_edges() {
        // At or above the start boundary the lower clamp holds exactly.
        assert_eq!(progress(&geometry(900.0)), 0.0);
        assert_eq!(progress(&geometry(4000.0)), 0.0);
        // At or below the end boundary the upper clamp holds exactly.
        assert_eq!(progress(&geometry(-100.0)), 1.0);
        assert_eq!(progress(&geometry(-4000.0)), 1.0);
    }

    #[test]
    fn progress_is_monotone_in_top_offset() {
        let mut top = -500.0;
        let mut previous = progress(&geometry(top));
        while top < 1500.0 {
            top += 25.0;
            let current = progress(&geometry(top));
            assert!(
                current <= previous,
                "progress rose from {previous} to {current} as top grew to {top}"
            );
            previous = current;
        }
    }

    #[test]
    fn step_activation_is_monotone_across_thresholds() {
        let mut engine = StepperEngine::new(RecordingView::default(), 5);
        for sample in 0..=20 {
            engine.apply(sample as f64 / 20.0);
            let active = engine.view.active.clone();
            for later in 1..active.len() {
                assert!(
                    active[later - 1] || !active[later],
                    "step {later} active without step {} at sample {sample}",
                    later - 1
                );
            }
        }
    }

    #[test]
    fn recomputation_is_idempotent() {
        let mut engine = engine();
        engine.update(&geometry(400.0));
        let rail = engine.view.rail.clone();
        let active = engine.view.active.clone();
        engine.update(&geometry(400.0));
        assert_eq!(engine.view.rail, rail);
        assert_eq!(engine.view.active, active);
        assert_eq!(engine.view.rail_writes, 2);
    }

    #[test]
    fn reduced_motion_terminal_state_without_listeners() {
        let mut engine = engine();
        engine.complete();
        assert_eq!(engine.view.rail.as_deref(), Some("100.00%"));
        assert_eq!(engine.view.active, vec![true, true, true]);
        assert!(!engine.listening());
    }

    #[test]
    fn epsilon_keeps_boundary_progress_active() {
        let mut engine = engine();
        engine.apply(0.4995);
        assert_eq!(engine.view.active, vec![true, true, false]);
        engine.apply(0.498);
        assert_eq!(engine.view.active, vec![true, false, false]);
    }

    #[test]
    fn intersection_transitions_are_idempotent() {
        let mut engine = engine();
        assert!(!engine.listening());
        assert_eq!(engine.set_intersecting(true), ListenChange::Start);
        assert_eq!(engine.set_intersecting(true), ListenChange::Unchanged);
        assert!(engine.listening());
        assert_eq!(engine.set_intersecting(false), ListenChange::Stop);
        assert_eq!(engine.set_intersecting(false), ListenChange::Unchanged);
        assert!(!engine.listening());
    }

    #[test]
    fn frames_landing_after_exit_do_not_recompute() {
        let mut engine = engine();
        engine.set_intersecting(true);
        assert!(engine.update_if_listening(&geometry(400.0)));
        engine.set_intersecting(false);
        assert!(!engine.update_if_listening(&geometry(-150.0)));
        assert_eq!(engine.view.rail.as_deref(), Some("50.00%"));
        assert_eq!(engine.view.rail_writes, 1);
    }

    #[test]
    fn thresholds_cover_the_unit_interval_evenly() {
        assert!(step_thresholds(0).is_empty());
        assert_eq!(step_thresholds(1), vec![0.0]);
        assert_eq!(step_thresholds(3), vec![0.0, 0.5, 1.0]);
        assert_eq!(
            step_thresholds(4),
            vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]
        );
    }

    #[test]
    fn frame_gate_coalesces_signals() {
        let gate = FrameGate::new();
        assert!(gate.try_arm());
        assert!(!gate.try_arm());
        assert!(!gate.try_arm());
        gate.release();
        assert!(gate.try_arm());
    }

    #[test]
    fn missing_rail_or_steps_skip_only_that_update() {
        // Zero steps: only the rail is written, nothing panics.
        let mut engine = StepperEngine::new(RecordingView::default(), 0);
        engine.update(&geometry(400.0));
        assert_eq!(engine.view.rail.as_deref(), Some("50.00%"));
        assert!(engine.view.active.is_empty());
    }
}
