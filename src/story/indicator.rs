//! Progress indicators: the dot cluster and the fill bar.

use yew::prelude::*;

use crate::story::slide::SlideDeck;

#[derive(Properties, PartialEq)]
pub struct ProgressDotsProps {
    pub deck: SlideDeck,
    /// Slide the scroll position currently maps to.
    pub active: usize,
    /// When set, tapping a dot seeks the region to that slide.
    #[prop_or_default]
    pub on_seek: Option<Callback<usize>>,
}

/// One marker per slide; the active marker widens and takes the slide's
/// accent gradient. Seeking goes through a programmatic scroll so the
/// normal progress pipeline runs, exactly as organic scrolling would.
#[function_component(ProgressDots)]
pub fn progress_dots(props: &ProgressDotsProps) -> Html {
    html! {
        <div class="story-dots">
            { for props.deck.iter().map(|slide| {
                let is_active = slide.index == props.active;
                let width = if is_active { 30 } else { 10 };
                let background = if is_active {
                    slide.accent_gradient
                } else {
                    "rgba(0, 0, 0, 0.1)"
                };
                let cursor = if props.on_seek.is_some() { "pointer" } else { "default" };
                let style = format!(
                    "width: {width}px; height: 10px; border-radius: 5px; background: {background}; \
                     cursor: {cursor}; transition: all 0.3s ease;"
                );
                let onclick = {
                    let seek = props.on_seek.clone();
                    let index = slide.index;
                    Callback::from(move |_: MouseEvent| {
                        if let Some(seek) = &seek {
                            seek.emit(index);
                        }
                    })
                };
                html! {
                    <span key={slide.index} class="story-dot" {style} {onclick}></span>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressFillBarProps {
    pub active: usize,
    pub count: usize,
    /// Accent gradient of the active slide.
    pub gradient: AttrValue,
}

/// Thin bar filled proportionally to the active slide.
#[function_component(ProgressFillBar)]
pub fn progress_fill_bar(props: &ProgressFillBarProps) -> Html {
    let percent = if props.count == 0 {
        0.0
    } else {
        (props.active + 1) as f64 * 100.0 / props.count as f64
    };
    let fill_style = format!(
        "width: {percent:.1}%; height: 100%; background: {}; border-radius: 2px; \
         transition: width 0.4s ease;",
        props.gradient
    );
    html! {
        <div class="story-fill-bar" style="width: 100%; height: 4px; background: rgba(0, 0, 0, 0.06); border-radius: 2px;">
            <div style={fill_style}></div>
        </div>
    }
}
