//! The parametrized story section.
//!
//! Every scroll-narrative landing section is a thin configuration of this
//! component: a slide deck, an axis, and two renderers (the pinned scene
//! and the stacked fallback). The section wires the scroll signal through
//! the index mapper, pin controller and choreographer, and owns all of its
//! derived state; nothing is shared across sections except the read-only
//! scroll position.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::story::axis;
use crate::story::choreo::{Choreographer, TransitionFrame, TransitionPlan};
use crate::story::mapper::IndexTracker;
use crate::story::pin::{PinController, PinPhase};
use crate::story::progress::{measure_region, RegionGeometry, ScrollBinding, SpanSpec};
use crate::story::responsive::{mode_for_width, viewport_width, ResizeBinding, ViewMode};
use crate::story::slide::SlideDeck;

/// Scroll axis for the pinned scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoryAxis {
    /// Slides swap in place while the section is pinned for
    /// `span_factor` viewport heights of scroll.
    Vertical { span_factor: f64 },
    /// A card row wider than the viewport translates sideways; the section
    /// is pinned for exactly the row's overflow distance.
    Horizontal,
}

fn span_spec(axis: StoryAxis) -> SpanSpec {
    match axis {
        StoryAxis::Vertical { span_factor } => SpanSpec::ViewportFactor(span_factor),
        StoryAxis::Horizontal => SpanSpec::HorizontalOverflow,
    }
}

/// Static configuration a landing section provides.
#[derive(Clone, PartialEq)]
pub struct StoryConfig {
    /// Element id, also used as the anchor target for nav links.
    pub id: &'static str,
    pub deck: SlideDeck,
    pub axis: StoryAxis,
    /// Viewport widths below this render the stacked fallback.
    pub stack_below: f64,
}

/// Live snapshot handed to the scene renderer.
#[derive(Clone, PartialEq)]
pub struct StoryView {
    pub deck: SlideDeck,
    /// Slide whose content is displayed; swaps when the exit phase ends.
    pub shown_index: usize,
    /// Slide the scroll position maps to; drives indicators immediately.
    pub target_index: usize,
    pub frame: TransitionFrame,
    /// Horizontal row offset (always 0.0 on the vertical axis).
    pub offset_x: f64,
    pub pin: PinPhase,
    /// Programmatic seek to a slide; runs through the normal pipeline.
    pub seek: Callback<usize>,
    /// Horizontal scenes attach this to their card row so the overflow
    /// distance can be measured.
    pub row_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct StorySectionProps {
    pub config: StoryConfig,
    /// Renders the pinned scene from the live view.
    pub scene: Callback<StoryView, Html>,
    /// Renders the stacked fallback for small viewports.
    pub stacked: Callback<SlideDeck, Html>,
}

struct EngineState {
    geometry: RegionGeometry,
    tracker: IndexTracker,
    pin: PinController,
    choreographer: Choreographer,
    mode: ViewMode,
}

fn remeasure(
    engine: &Rc<RefCell<EngineState>>,
    section_ref: &NodeRef,
    row_ref: &NodeRef,
    axis: StoryAxis,
    span_px: &UseStateSetter<f64>,
) {
    if let Some(section) = section_ref.cast::<Element>() {
        let row = row_ref.cast::<Element>();
        let geometry = measure_region(&section, row.as_ref(), span_spec(axis), 0.0);
        engine.borrow_mut().geometry = geometry;
        span_px.set(geometry.span);
    }
}

#[function_component(StorySection)]
pub fn story_section(props: &StorySectionProps) -> Html {
    let config = props.config.clone();
    let section_ref = use_node_ref();
    let row_ref = use_node_ref();

    let mode = use_state_eq(|| mode_for_width(viewport_width(), config.stack_below));
    let shown = use_state_eq(|| 0usize);
    let target = use_state_eq(|| 0usize);
    let frame = use_state(TransitionFrame::rest);
    let offset_x = use_state_eq(|| 0.0f64);
    let pin_phase = use_state_eq(|| PinPhase::Unpinned);
    let span_px = use_state_eq(|| 0.0f64);

    let engine = use_mut_ref(|| EngineState {
        geometry: RegionGeometry::default(),
        tracker: IndexTracker::new(),
        pin: PinController::new(false),
        choreographer: Choreographer::new(),
        mode: ViewMode::Stacked,
    });

    // Scroll pipeline: attached only in full mode, re-attached on mode
    // switches. The binding is dropped on cleanup, so an unmounted section
    // leaves no listener behind.
    {
        let engine = engine.clone();
        let section_ref = section_ref.clone();
        let row_ref = row_ref.clone();
        let shown = shown.clone();
        let target = target.clone();
        let frame = frame.clone();
        let offset_x = offset_x.clone();
        let pin_phase = pin_phase.clone();
        let span_setter = span_px.setter();
        let config = config.clone();
        use_effect_with_deps(
            move |mode: &ViewMode| {
                let mut binding = None;
                let mut late_measure = None;
                if *mode == ViewMode::Full {
                    remeasure(&engine, &section_ref, &row_ref, config.axis, &span_setter);
                    engine.borrow_mut().pin.set_enabled(true);
                    engine.borrow_mut().mode = ViewMode::Full;

                    // Fonts and images settling after mount can shift the
                    // region; measure once more when layout has calmed down.
                    late_measure = {
                        let engine = engine.clone();
                        let section_ref = section_ref.clone();
                        let row_ref = row_ref.clone();
                        let span_setter = span_setter.clone();
                        let axis = config.axis;
                        Some(Timeout::new(crate::config::LATE_LAYOUT_REMEASURE_MS, move || {
                            remeasure(&engine, &section_ref, &row_ref, axis, &span_setter);
                        }))
                    };

                    let deck_len = config.deck.len();
                    let horizontal = matches!(config.axis, StoryAxis::Horizontal);
                    let section_id = config.id;
                    binding = ScrollBinding::attach(move |scroll_y| {
                        let mut eng = engine.borrow_mut();
                        let geometry = eng.geometry;
                        let Some(ratio) = geometry.progress_ratio(scroll_y) else {
                            return;
                        };
                        let raw = ratio.clamp(0.0, 1.0);

                        if let Some(change) = eng.pin.observe(ratio) {
                            log::debug!("{section_id}: pin {:?} -> {:?}", change.from, change.to);
                            pin_phase.set(change.to);
                        }
                        if horizontal {
                            offset_x.set(axis::offset_x(raw, geometry.span));
                        }
                        if let Some(change) = eng.tracker.observe(raw, deck_len) {
                            target.set(change.to);
                            let to = change.to;
                            let frame = frame.clone();
                            let shown = shown.clone();
                            eng.choreographer.begin(
                                TransitionPlan::slide_swap(),
                                Callback::from(move |f| frame.set(f)),
                                Callback::from(move |_| shown.set(to)),
                                Callback::noop(),
                            );
                        }
                    });
                } else {
                    let mut eng = engine.borrow_mut();
                    eng.mode = ViewMode::Stacked;
                    eng.choreographer.cancel();
                    eng.tracker.reset();
                    if let Some(change) = eng.pin.set_enabled(false) {
                        pin_phase.set(change.to);
                    }
                }
                move || {
                    drop(binding);
                    drop(late_measure);
                }
            },
            *mode,
        );
    }

    // Responsive selector: debounced resize re-measures the region and, if
    // the width crossed the section's threshold, tears the active mode down
    // before establishing the other one.
    {
        let engine = engine.clone();
        let section_ref = section_ref.clone();
        let row_ref = row_ref.clone();
        let mode = mode.clone();
        let shown = shown.clone();
        let target = target.clone();
        let frame = frame.clone();
        let pin_phase = pin_phase.clone();
        let span_setter = span_px.setter();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let binding = ResizeBinding::attach(Callback::from(move |width: f64| {
                    remeasure(&engine, &section_ref, &row_ref, config.axis, &span_setter);
                    let next = mode_for_width(width, config.stack_below);
                    let mut eng = engine.borrow_mut();
                    if next == eng.mode {
                        return;
                    }
                    log::info!("{}: switching to {next:?} at {width:.0}px", config.id);
                    eng.mode = next;
                    eng.choreographer.cancel();
                    eng.tracker.reset();
                    if let Some(change) = eng.pin.set_enabled(false) {
                        pin_phase.set(change.to);
                    }
                    shown.set(0);
                    target.set(0);
                    frame.set(TransitionFrame::rest());
                    mode.set(next);
                }));
                move || drop(binding)
            },
            (),
        );
    }

    let seek = {
        let engine = engine.clone();
        let count = config.deck.len();
        Callback::from(move |index: usize| {
            let geometry = engine.borrow().geometry;
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(geometry.seek_offset(index, count));
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    if *mode == ViewMode::Stacked {
        return html! {
            <section id={config.id} class="story-section story-stacked" ref={section_ref}>
                { props.stacked.emit(config.deck) }
            </section>
        };
    }

    let container_style = match config.axis {
        StoryAxis::Vertical { span_factor } => {
            format!("height: calc({:.0}vh + 100vh);", span_factor * 100.0)
        }
        StoryAxis::Horizontal => format!("height: calc({:.0}px + 100vh);", *span_px),
    };
    let pin_class = match *pin_phase {
        PinPhase::Unpinned => None,
        PinPhase::Pinned => Some("pinned"),
        PinPhase::Released => Some("released"),
    };
    let view = StoryView {
        deck: config.deck.clone(),
        shown_index: *shown,
        target_index: *target,
        frame: *frame,
        offset_x: *offset_x,
        pin: *pin_phase,
        seek,
        row_ref,
    };

    html! {
        <section id={config.id} class="story-section" ref={section_ref} style={container_style}>
            <div class={classes!("story-frame", pin_class)}>
                { props.scene.emit(view) }
            </div>
        </section>
    }
}
