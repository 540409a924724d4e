//! Scroll progress source: region geometry plus the shared scroll signal.
//!
//! A single window scroll listener feeds every mounted section: bindings
//! subscribe to a process-wide hub that coalesces scroll bursts to at most
//! one dispatch per animation frame and fans the scroll offset out to each
//! subscriber. All derived values (progress, index, pin phase) are computed
//! per section from that shared read-only signal; sections never write
//! scroll state, only read it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// The scrollable span a story section occupies in the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionGeometry {
    /// Document offset at which the region's progress starts.
    pub start_offset: f64,
    /// Scrollable distance mapped onto [0, 1].
    pub span: f64,
}

impl RegionGeometry {
    /// Unclamped position of `scroll_y` relative to this region, in spans:
    /// negative above the start, above 1.0 past the end. `None` while the
    /// region cannot be measured (span not yet laid out), in which case
    /// progress is treated as 0 and pinning is skipped.
    pub fn progress_ratio(&self, scroll_y: f64) -> Option<f64> {
        if self.span <= 0.0 {
            return None;
        }
        Some((scroll_y - self.start_offset) / self.span)
    }

    /// Progress clamped to [0, 1].
    pub fn raw_progress(&self, scroll_y: f64) -> f64 {
        self.progress_ratio(scroll_y)
            .map(|r| r.clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    /// Document offset whose progress maps to slide `index`: the region
    /// start plus `index / slide_count` of the span.
    pub fn seek_offset(&self, index: usize, slide_count: usize) -> f64 {
        if slide_count == 0 {
            return self.start_offset;
        }
        self.start_offset + (index as f64 / slide_count as f64) * self.span
    }
}

/// How a section derives its span from layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanSpec {
    /// Span is a multiple of the viewport height (pinned scrollytelling).
    ViewportFactor(f64),
    /// Span equals the section's own height (plain scrub regions).
    OwnHeight,
    /// Span equals the bound row's horizontal overflow distance.
    HorizontalOverflow,
}

/// Measure a section's region. `lead_fraction` starts the region while the
/// section top is still that fraction of a viewport below the fold (used by
/// reveal sections that begin animating before reaching the top).
pub fn measure_region(
    section: &Element,
    row: Option<&Element>,
    spec: SpanSpec,
    lead_fraction: f64,
) -> RegionGeometry {
    let Some(window) = web_sys::window() else {
        return RegionGeometry::default();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let viewport_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = section.get_bounding_client_rect();
    let top = rect.top() + scroll_y;
    let span = match spec {
        SpanSpec::ViewportFactor(factor) => viewport_h * factor,
        SpanSpec::OwnHeight => rect.height(),
        SpanSpec::HorizontalOverflow => row
            .map(|r| super::axis::overflow_distance(r.scroll_width() as f64, viewport_w))
            .unwrap_or(0.0),
    };
    RegionGeometry {
        start_offset: top - viewport_h * lead_fraction,
        span,
    }
}

struct Subscriber {
    id: u64,
    alive: Rc<Cell<bool>>,
    handler: Rc<RefCell<dyn FnMut(f64)>>,
}

/// The one window scroll listener, attached while at least one subscriber
/// exists. Scroll bursts coalesce to one dispatch per animation frame.
struct HubDriver {
    listener: Closure<dyn FnMut()>,
    frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl HubDriver {
    fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
            Rc::new(RefCell::new(None));
        {
            let pending = pending.clone();
            let window = window.clone();
            *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
                pending.set(None);
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                // Snapshot first so a handler dropping its binding mid-
                // dispatch cannot invalidate the iteration.
                let handlers: Vec<(Rc<Cell<bool>>, Rc<RefCell<dyn FnMut(f64)>>)> =
                    SCROLL_HUB.with(|hub| {
                        hub.borrow()
                            .subscribers
                            .iter()
                            .map(|s| (s.alive.clone(), s.handler.clone()))
                            .collect()
                    });
                for (alive, handler) in handlers {
                    if alive.get() {
                        (handler.borrow_mut())(scroll_y);
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let listener = {
            let pending = pending.clone();
            let frame_cb = frame_cb.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                Self::schedule_frame(&window, &pending, &frame_cb);
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            listener,
            frame_cb,
            pending,
        })
    }

    fn schedule_frame(
        window: &web_sys::Window,
        pending: &Rc<Cell<Option<i32>>>,
        frame_cb: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    ) {
        if pending.get().is_some() {
            return;
        }
        if let Some(cb) = frame_cb.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                pending.set(Some(id));
            }
        }
    }

    fn schedule(&self) {
        if let Some(window) = web_sys::window() {
            Self::schedule_frame(&window, &self.pending, &self.frame_cb);
        }
    }
}

impl Drop for HubDriver {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.listener.as_ref().unchecked_ref(),
            );
            if let Some(id) = self.pending.take() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.frame_cb.borrow_mut().take();
    }
}

#[derive(Default)]
struct ScrollHub {
    next_id: u64,
    subscribers: Vec<Subscriber>,
    driver: Option<HubDriver>,
}

thread_local! {
    static SCROLL_HUB: RefCell<ScrollHub> = RefCell::new(ScrollHub::default());
}

/// A section's subscription to the shared scroll signal. Dropping the
/// binding removes the subscription and, with the last subscriber gone,
/// detaches the window listener and cancels any pending frame, so an
/// unmounted section can never leak scroll work.
pub struct ScrollBinding {
    id: u64,
    alive: Rc<Cell<bool>>,
}

impl ScrollBinding {
    /// Subscribe to the scroll signal. The handler receives the current
    /// document scroll offset; a frame is also scheduled at attach time so
    /// a freshly mounted section reflects the existing scroll position.
    pub fn attach(on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        SCROLL_HUB.with(|hub| {
            let mut hub = hub.borrow_mut();
            if hub.driver.is_none() {
                hub.driver = Some(HubDriver::attach()?);
            }
            let id = hub.next_id;
            hub.next_id += 1;
            let alive = Rc::new(Cell::new(true));
            hub.subscribers.push(Subscriber {
                id,
                alive: alive.clone(),
                handler: Rc::new(RefCell::new(on_scroll)),
            });
            if let Some(driver) = &hub.driver {
                driver.schedule();
            }
            Some(Self { id, alive })
        })
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        self.alive.set(false);
        SCROLL_HUB.with(|hub| {
            let mut hub = hub.borrow_mut();
            hub.subscribers.retain(|s| s.id != self.id);
            if hub.subscribers.is_empty() {
                hub.driver = None;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::mapper::map_index;

    #[test]
    fn progress_is_clamped_to_unit_interval() {
        let region = RegionGeometry {
            start_offset: 1000.0,
            span: 500.0,
        };
        assert_eq!(region.raw_progress(0.0), 0.0);
        assert_eq!(region.raw_progress(1250.0), 0.5);
        assert_eq!(region.raw_progress(9999.0), 1.0);
    }

    #[test]
    fn unmeasured_region_reports_zero_and_no_ratio() {
        let region = RegionGeometry {
            start_offset: 400.0,
            span: 0.0,
        };
        assert_eq!(region.progress_ratio(800.0), None);
        assert_eq!(region.raw_progress(800.0), 0.0);
    }

    #[test]
    fn ratio_is_signed_outside_the_region() {
        let region = RegionGeometry {
            start_offset: 1000.0,
            span: 500.0,
        };
        assert!(region.progress_ratio(900.0).unwrap() < 0.0);
        assert!(region.progress_ratio(1600.0).unwrap() > 1.0);
    }

    #[test]
    fn seek_is_idempotent() {
        let region = RegionGeometry {
            start_offset: 320.0,
            span: 1440.0,
        };
        for count in [1usize, 3, 6] {
            for i in 0..count {
                let offset = region.seek_offset(i, count);
                assert_eq!(map_index(region.raw_progress(offset), count), i);
            }
        }
    }
}
