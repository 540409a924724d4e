//! Transition choreography: declarative visual states, easing curves, and
//! cancellable animation tracks.
//!
//! A slide change is described up front as a set of per-element tween
//! timelines (text, icon, highlight) plus a swap point, then sampled by
//! elapsed time from a single animation-frame driver. Starting a new
//! transition cancels the in-flight one first; a cancelled transition's
//! swap and completion callbacks never fire.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use crate::config;

/// Declarative render state for one animated element. A renderer turns this
/// into styling; the state machines never touch the DOM directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl VisualState {
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };

    /// CSS fragment a renderer can drop into a style attribute.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.1}px, {:.1}px) rotate({:.1}deg) scale({:.3});",
            self.opacity, self.x, self.y, self.rotation, self.scale
        )
    }

    fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            rotation: mix(from.rotation, to.rotation),
            scale: mix(from.scale, to.scale),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out.
    SmoothOut,
    /// Ease-out with overshoot past the target before settling.
    BackOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::SmoothOut => 1.0 - (1.0 - t).powi(3),
            Ease::BackOut => {
                let c = config::BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + u * u * ((c + 1.0) * u + c)
            }
        }
    }
}

/// One tween of a piecewise timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub from: VisualState,
    pub to: VisualState,
    pub ease: Ease,
}

impl Segment {
    fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    fn sample(&self, elapsed_ms: f64) -> VisualState {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (elapsed_ms - self.start_ms) / self.duration_ms;
        VisualState::lerp(&self.from, &self.to, self.ease.apply(t))
    }
}

/// Piecewise tween timeline for one element. Segments are ordered and
/// non-overlapping; gaps hold the previous segment's end state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    segments: Vec<Segment>,
}

impl Track {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn end_ms(&self) -> f64 {
        self.segments.last().map(Segment::end_ms).unwrap_or(0.0)
    }

    pub fn sample(&self, elapsed_ms: f64) -> VisualState {
        let mut state = self
            .segments
            .first()
            .map(|s| s.from)
            .unwrap_or(VisualState::REST);
        for segment in &self.segments {
            if elapsed_ms < segment.start_ms {
                break;
            }
            state = if elapsed_ms < segment.end_ms() {
                segment.sample(elapsed_ms)
            } else {
                segment.to
            };
        }
        state
    }
}

/// Sampled states for every animated element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub text: VisualState,
    pub icon: VisualState,
    pub highlight: VisualState,
    pub past_swap: bool,
}

impl TransitionFrame {
    pub fn rest() -> Self {
        Self {
            text: VisualState::REST,
            icon: VisualState::REST,
            highlight: VisualState::REST,
            past_swap: true,
        }
    }
}

impl Default for TransitionFrame {
    fn default() -> Self {
        Self::rest()
    }
}

/// The full choreography for one slide change: independent text, icon and
/// highlight tracks plus the instant at which displayed content swaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub text: Track,
    pub icon: Track,
    pub highlight: Track,
    pub swap_at_ms: f64,
}

impl TransitionPlan {
    /// The standard slide swap: text and highlight fade to an offset state,
    /// content swaps, then everything settles back in. The icon performs a
    /// rotation flourish on its own timing and overlaps the text phases.
    pub fn slide_swap() -> Self {
        let exit = config::EXIT_DURATION_MS;
        let enter = config::ENTER_DURATION_MS;

        let text_out = VisualState {
            opacity: 0.0,
            y: -20.0,
            ..VisualState::REST
        };
        let text_in = VisualState {
            opacity: 0.0,
            y: 20.0,
            ..VisualState::REST
        };
        let text = Track::new(vec![
            Segment {
                start_ms: 0.0,
                duration_ms: exit,
                from: VisualState::REST,
                to: text_out,
                ease: Ease::Linear,
            },
            Segment {
                start_ms: exit,
                duration_ms: enter,
                from: text_in,
                to: VisualState::REST,
                ease: Ease::Linear,
            },
        ]);

        let highlight_out = VisualState {
            opacity: 0.0,
            x: 30.0,
            ..VisualState::REST
        };
        let highlight_in = VisualState {
            opacity: 0.0,
            x: -30.0,
            ..VisualState::REST
        };
        let highlight = Track::new(vec![
            Segment {
                start_ms: 0.0,
                duration_ms: exit,
                from: VisualState::REST,
                to: highlight_out,
                ease: Ease::Linear,
            },
            Segment {
                start_ms: exit,
                duration_ms: enter,
                from: highlight_in,
                to: VisualState::REST,
                ease: Ease::SmoothOut,
            },
        ]);

        let icon_out = VisualState {
            opacity: 0.0,
            rotation: -180.0,
            scale: 0.8,
            ..VisualState::REST
        };
        let icon = Track::new(vec![
            Segment {
                start_ms: 0.0,
                duration_ms: config::ICON_OUT_DURATION_MS,
                from: VisualState::REST,
                to: icon_out,
                ease: Ease::Linear,
            },
            Segment {
                start_ms: config::ICON_OUT_DURATION_MS,
                duration_ms: config::ICON_IN_DURATION_MS,
                from: icon_out,
                to: VisualState::REST,
                ease: Ease::BackOut,
            },
        ]);

        Self {
            text,
            icon,
            highlight,
            swap_at_ms: exit,
        }
    }

    pub fn total_ms(&self) -> f64 {
        self.text
            .end_ms()
            .max(self.icon.end_ms())
            .max(self.highlight.end_ms())
    }

    pub fn sample(&self, elapsed_ms: f64) -> TransitionFrame {
        TransitionFrame {
            text: self.text.sample(elapsed_ms),
            icon: self.icon.sample(elapsed_ms),
            highlight: self.highlight.sample(elapsed_ms),
            past_swap: elapsed_ms >= self.swap_at_ms,
        }
    }
}

/// What a clock tick owes the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub frame: TransitionFrame,
    /// The swap point was crossed on this tick (fires at most once).
    pub swap: bool,
    /// The transition completed on this tick; no further ticks will report.
    pub done: bool,
}

/// Pure bookkeeping for one running transition: which callbacks are due at
/// a given timestamp. The frame driver feeds it rAF timestamps; tests feed
/// it plain numbers. After cancellation or completion every tick returns
/// `None`, so stale work can never fire.
#[derive(Debug)]
pub struct TransitionClock {
    plan: TransitionPlan,
    started_at: Option<f64>,
    swapped: bool,
    finished: bool,
    cancelled: bool,
}

impl TransitionClock {
    pub fn new(plan: TransitionPlan) -> Self {
        Self {
            plan,
            started_at: None,
            swapped: false,
            finished: false,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, timestamp_ms: f64) -> Option<TickOutcome> {
        if self.cancelled || self.finished {
            return None;
        }
        let started = *self.started_at.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - started;
        let frame = self.plan.sample(elapsed);
        let swap = frame.past_swap && !self.swapped;
        if swap {
            self.swapped = true;
        }
        let done = elapsed >= self.plan.total_ms();
        if done {
            self.finished = true;
        }
        Some(TickOutcome { frame, swap, done })
    }
}

/// Handle to an in-flight transition. Cancelling stops the frame loop and
/// suppresses all remaining callbacks.
pub struct TransitionHandle {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    _step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl TransitionHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for TransitionHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owns the "current transition or none" slot for one section.
#[derive(Default)]
pub struct Choreographer {
    current: RefCell<Option<TransitionHandle>>,
}

impl Choreographer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `plan`, interrupting any in-flight transition first. `on_swap`
    /// fires exactly once at the swap point; `on_done` fires at completion;
    /// neither fires after cancellation.
    pub fn begin(
        &self,
        plan: TransitionPlan,
        on_frame: Callback<TransitionFrame>,
        on_swap: Callback<()>,
        on_done: Callback<()>,
    ) {
        self.cancel();

        let cancelled = Rc::new(Cell::new(false));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let mut clock = TransitionClock::new(plan);
        {
            let cancelled = cancelled.clone();
            let pending = pending.clone();
            let step_slot = step.clone();
            *step.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if cancelled.get() {
                    return;
                }
                let Some(outcome) = clock.tick(timestamp) else {
                    return;
                };
                if outcome.swap {
                    on_swap.emit(());
                }
                on_frame.emit(outcome.frame);
                if outcome.done {
                    on_done.emit(());
                    return;
                }
                if let Some(window) = web_sys::window() {
                    if let Some(cb) = step_slot.borrow().as_ref() {
                        if let Ok(id) =
                            window.request_animation_frame(cb.as_ref().unchecked_ref())
                        {
                            pending.set(Some(id));
                        }
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }

        if let Some(window) = web_sys::window() {
            if let Some(cb) = step.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    pending.set(Some(id));
                }
            }
        }

        *self.current.borrow_mut() = Some(TransitionHandle {
            cancelled,
            pending,
            _step: step,
        });
    }

    /// Cancel the in-flight transition, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.borrow_mut().take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_their_endpoints() {
        for ease in [Ease::Linear, Ease::SmoothOut, Ease::BackOut] {
            assert!((ease.apply(0.0)).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (0..100)
            .map(|i| Ease::BackOut.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn track_holds_rest_between_and_after_segments() {
        let plan = TransitionPlan::slide_swap();
        // Before anything starts, the text sits at rest.
        assert_eq!(plan.text.sample(0.0), VisualState::REST);
        // Well past the end, every element has settled.
        let end = plan.total_ms() + 100.0;
        assert_eq!(plan.text.sample(end), VisualState::REST);
        assert_eq!(plan.icon.sample(end), VisualState::REST);
        assert_eq!(plan.highlight.sample(end), VisualState::REST);
    }

    #[test]
    fn exit_phase_fades_the_outgoing_text() {
        let plan = TransitionPlan::slide_swap();
        let mid_exit = plan.swap_at_ms / 2.0;
        let state = plan.text.sample(mid_exit);
        assert!(state.opacity < 1.0 && state.opacity > 0.0);
        assert!(state.y < 0.0);
        // At the swap point the outgoing text is fully faded.
        let frame = plan.sample(plan.swap_at_ms);
        assert!(frame.past_swap);
    }

    #[test]
    fn icon_spins_independently_of_the_text() {
        let plan = TransitionPlan::slide_swap();
        // The icon's flourish overlaps the text timeline rather than
        // waiting for it: mid-way it is rotated while text is mid-fade.
        let t = config::ICON_OUT_DURATION_MS * 0.5;
        assert!(plan.icon.sample(t).rotation < 0.0);
        assert!(plan.icon.end_ms() != plan.text.end_ms());
    }

    #[test]
    fn swap_fires_exactly_once() {
        let mut clock = TransitionClock::new(TransitionPlan::slide_swap());
        let mut swaps = 0;
        let mut ts = 0.0;
        while let Some(outcome) = clock.tick(ts) {
            if outcome.swap {
                swaps += 1;
            }
            if outcome.done {
                break;
            }
            ts += 16.0;
        }
        assert_eq!(swaps, 1);
        assert!(clock.is_finished());
    }

    #[test]
    fn cancelled_clock_never_reports_again() {
        // Transition A (0 -> 1) is interrupted before its enter phase
        // completes; none of its remaining callbacks may fire.
        let mut a = TransitionClock::new(TransitionPlan::slide_swap());
        assert!(a.tick(0.0).is_some());
        assert!(a.tick(60.0).is_some());
        a.cancel();
        assert_eq!(a.tick(120.0), None);
        assert_eq!(a.tick(10_000.0), None);
        assert!(!a.is_finished());

        // Transition B (0 -> 2) runs to completion and owns the final state.
        let mut b = TransitionClock::new(TransitionPlan::slide_swap());
        let mut ts = 0.0;
        let mut last = None;
        while let Some(outcome) = b.tick(ts) {
            last = Some(outcome);
            if outcome.done {
                break;
            }
            ts += 16.0;
        }
        let last = last.unwrap();
        assert!(last.done);
        assert_eq!(last.frame.text, VisualState::REST);
        assert_eq!(last.frame.icon, VisualState::REST);
    }

    #[test]
    fn finished_clock_stops_ticking() {
        let mut clock = TransitionClock::new(TransitionPlan::slide_swap());
        let total = TransitionPlan::slide_swap().total_ms();
        assert!(clock.tick(0.0).is_some());
        let outcome = clock.tick(total + 1.0).unwrap();
        assert!(outcome.done);
        assert_eq!(clock.tick(total + 2.0), None);
    }
}
