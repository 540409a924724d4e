//! Why NearZO: highlight list revealed progressively as the section
//! scrolls through its own height.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::config;
use crate::story::mapper::map_index;
use crate::story::progress::{measure_region, RegionGeometry, ScrollBinding, SpanSpec};
use crate::story::responsive::{mode_for_width, viewport_width, ResizeBinding, ViewMode};
use crate::story::slide::{Slide, SlideDeck};

fn highlight_deck() -> SlideDeck {
    SlideDeck::new(vec![
        Slide::new(
            "Unified Local Ecosystem",
            "NearZO isn't just an app; it's a digital town square. We combine job hunting, \
             service discovery, and local shopping into a single, high-performance interface, \
             saving you time and battery.",
            "#C00C0C",
            "linear-gradient(135deg, #C00C0C 0%, #ff6b6b 100%)",
            "🏠",
            &[],
        ),
        Slide::new(
            "Precision Hyperlocal Engine",
            "Our search prioritizes listings within a 2-5km radius. Whether it's a carpenter \
             or a croissant, we ensure you find the highest-rated options in your immediate \
             vicinity.",
            "#2196F3",
            "linear-gradient(135deg, #2196F3 0%, #6ec8ff 100%)",
            "🎯",
            &[],
        ),
        Slide::new(
            "Direct Connection, Zero Friction",
            "Skip the middleman. Call or chat directly with shop owners and job posters. No \
             commissions, no booking fees — just pure local connection.",
            "#FF9800",
            "linear-gradient(135deg, #FF9800 0%, #ffc107 100%)",
            "⚡",
            &[],
        ),
        Slide::new(
            "Empowering Micro-Vendors",
            "Free digital storefronts for small vendors. We believe in leveling the playing \
             field, giving every local shop the premium online presence they deserve.",
            "#4CAF50",
            "linear-gradient(135deg, #4CAF50 0%, #8bc34a 100%)",
            "🏪",
            &[],
        ),
        Slide::new(
            "Verified Trusted Community",
            "Every user and business profile undergoes basic verification. Our \
             community-driven review system ensures you are always connecting with reliable \
             neighbors.",
            "#9C27B0",
            "linear-gradient(135deg, #9C27B0 0%, #ba68c8 100%)",
            "🛡️",
            &[],
        ),
        Slide::new(
            "Real-Time Opportunities",
            "Instant notifications for flash sales at nearby shops or urgent part-time job \
             openings. Stay synced with the heartbeat of your neighborhood.",
            "#607D8B",
            "linear-gradient(135deg, #607D8B 0%, #90a4ae 100%)",
            "🔔",
            &[],
        ),
    ])
}

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let deck = use_memo(|_| highlight_deck(), ());
    let section_ref = use_node_ref();
    let stacked = use_state_eq(|| {
        mode_for_width(viewport_width(), config::TINY_SCREEN_WIDTH) == ViewMode::Stacked
    });
    // Highest item index revealed so far; grows as progress advances.
    let revealed = use_state_eq(|| 0usize);

    {
        let stacked = stacked.clone();
        use_effect_once(move || {
            let binding = ResizeBinding::attach(Callback::from(move |width: f64| {
                stacked
                    .set(mode_for_width(width, config::TINY_SCREEN_WIDTH) == ViewMode::Stacked);
            }));
            move || drop(binding)
        });
    }

    {
        let section_ref = section_ref.clone();
        let revealed = revealed.clone();
        let count = deck.len();
        use_effect_with_deps(
            move |is_stacked: &bool| {
                let mut binding = None;
                if !*is_stacked {
                    let geometry: Rc<RefCell<RegionGeometry>> =
                        Rc::new(RefCell::new(RegionGeometry::default()));
                    if let Some(section) = section_ref.cast::<Element>() {
                        *geometry.borrow_mut() =
                            measure_region(&section, None, SpanSpec::OwnHeight, 0.8);
                    }
                    // Reveals accumulate; scrolling back up keeps them.
                    let high_water = Cell::new(0usize);
                    binding = ScrollBinding::attach(move |scroll_y| {
                        let raw = geometry.borrow().raw_progress(scroll_y);
                        let index = map_index(raw, count);
                        if index > high_water.get() {
                            high_water.set(index);
                            revealed.set(index);
                        }
                    });
                } else {
                    revealed.set(count.saturating_sub(1));
                }
                move || drop(binding)
            },
            *stacked,
        );
    }

    html! {
        <section id="why-us" class="why-us" ref={section_ref}>
            <div class="why-us-inner">
                <div class="why-us-intro">
                    <span class="section-overline">{"WHY NEARZO"}</span>
                    <h2>{"Built for the street you live on"}</h2>
                    <p>
                        {"Global platforms optimize for everywhere, which means nowhere in \
                          particular. NearZO is tuned for the few kilometers that actually \
                          make up your daily life."}
                    </p>
                </div>
                <div class="why-us-list">
                    { for deck.iter().map(|slide| {
                        let visible = *stacked || slide.index <= *revealed;
                        let class = if visible {
                            "why-item why-item-visible"
                        } else {
                            "why-item"
                        };
                        let icon_style = format!("background: {};", slide.accent_gradient);
                        let dot_style = format!("background: {};", slide.accent_color);
                        html! {
                            <div key={slide.index} class={class}>
                                <span class="why-item-dot" style={dot_style}></span>
                                <div class="why-item-icon" style={icon_style}>{ slide.icon_ref }</div>
                                <div>
                                    <h3>{ slide.title }</h3>
                                    <p>{ slide.body }</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .why-us { padding: 6rem 2rem; background: #fafafa; }

                    .why-us-inner {
                        display: grid;
                        grid-template-columns: 0.8fr 1.2fr;
                        gap: 4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        align-items: start;
                    }
                    @media (max-width: 768px) {
                        .why-us-inner { grid-template-columns: 1fr; gap: 2rem; }
                    }

                    .why-us-intro { position: sticky; top: 6rem; }
                    .why-us-intro h2 { font-size: 2.6rem; font-weight: 800; margin: 0.5rem 0 1rem; }
                    .why-us-intro p { color: #666; line-height: 1.8; }

                    .why-us-list { display: flex; flex-direction: column; gap: 1.5rem; }

                    .why-item {
                        position: relative;
                        display: flex;
                        gap: 1.25rem;
                        padding: 1.75rem;
                        border-radius: 24px;
                        background: #fff;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.06);
                        opacity: 0;
                        transform: translateX(50px) scale(0.95);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .why-item-visible { opacity: 1; transform: translateX(0) scale(1); }
                    .why-item:hover { transform: translateX(15px) scale(1.02); box-shadow: 0 30px 60px rgba(192, 12, 12, 0.15); }

                    .why-item h3 { margin: 0 0 0.5rem; }
                    .why-item p { color: #666; line-height: 1.7; margin: 0; }

                    .why-item-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                        width: 56px;
                        height: 56px;
                        border-radius: 16px;
                        font-size: 1.5rem;
                    }

                    .why-item-dot {
                        position: absolute;
                        top: 1.75rem;
                        left: -0.4rem;
                        width: 0.8rem;
                        height: 0.8rem;
                        border-radius: 50%;
                    }
                "#}
            </style>
        </section>
    }
}
