//! Responsive mode selection for story sections.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use crate::config;

/// How a section behaves at the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Pinned scrollytelling / scroll-jacked row.
    #[default]
    Full,
    /// Plain stacked rendering with on-entry fade-ins; no pinning.
    Stacked,
}

/// Pick the mode for a viewport width given the section's stacking cutoff.
pub fn mode_for_width(width: f64, stack_below: f64) -> ViewMode {
    if width < stack_below {
        ViewMode::Stacked
    } else {
        ViewMode::Full
    }
}

/// Current viewport width, 0.0 when the window is unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Debounced window-resize subscription. Each resize event restarts the
/// debounce timer; the callback fires with the settled viewport width.
/// Dropping the binding detaches the listener and cancels a pending timer.
pub struct ResizeBinding {
    listener: Closure<dyn FnMut()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ResizeBinding {
    pub fn attach(on_resize: Callback<f64>) -> Option<Self> {
        let window = web_sys::window()?;
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let listener = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                let on_resize = on_resize.clone();
                let timeout = Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                    on_resize.emit(viewport_width());
                });
                // Replacing the slot drops (cancels) the previous timer.
                *pending.borrow_mut() = Some(timeout);
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { listener, pending })
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.listener.as_ref().unchecked_ref(),
            );
        }
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_viewports_stack() {
        assert_eq!(
            mode_for_width(380.0, config::TINY_SCREEN_WIDTH),
            ViewMode::Stacked
        );
        assert_eq!(
            mode_for_width(449.9, config::TINY_SCREEN_WIDTH),
            ViewMode::Stacked
        );
        assert_eq!(
            mode_for_width(450.0, config::TINY_SCREEN_WIDTH),
            ViewMode::Full
        );
    }

    #[test]
    fn horizontal_sections_stack_below_the_wider_cutoff() {
        assert_eq!(
            mode_for_width(700.0, config::MOBILE_SCREEN_WIDTH),
            ViewMode::Stacked
        );
        assert_eq!(
            mode_for_width(1280.0, config::MOBILE_SCREEN_WIDTH),
            ViewMode::Full
        );
    }
}
