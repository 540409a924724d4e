//! How it works: four numbered steps along a scroll-grown progress line.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::story::mapper::map_index;
use crate::story::progress::{measure_region, RegionGeometry, ScrollBinding, SpanSpec};

const STEPS: [(&str, &str, &str); 4] = [
    (
        "Register as You",
        "Join as a Job Seeker, Employer, or Shop Owner. It takes less than a minute.",
        "#C00C0C",
    ),
    (
        "Search & Explore",
        "Browse local jobs, nearby services, or filter by category to find exactly what you need.",
        "#7C2F2F",
    ),
    (
        "Connect Instantly",
        "Call, chat, or get directions to the shop. Direct communication with no middlemen.",
        "#C00C0C",
    ),
    (
        "Grow Local",
        "Hire faster, find work easily, or boost your shop's visibility in your community.",
        "#7C2F2F",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section_ref = use_node_ref();
    let progress = use_state_eq(|| 0.0f64);

    {
        let section_ref = section_ref.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let geometry: Rc<RefCell<RegionGeometry>> =
                    Rc::new(RefCell::new(RegionGeometry::default()));
                if let Some(section) = section_ref.cast::<Element>() {
                    *geometry.borrow_mut() =
                        measure_region(&section, None, SpanSpec::OwnHeight, 0.6);
                }
                let binding = ScrollBinding::attach(move |scroll_y| {
                    progress.set(geometry.borrow().raw_progress(scroll_y));
                });
                move || drop(binding)
            },
            (),
        );
    }

    let reached = map_index(*progress, STEPS.len());
    let line_style = format!(
        "transform: scaleY({:.3}); transform-origin: top;",
        *progress
    );

    html! {
        <section id="how-it-works" class="how-it-works" ref={section_ref}>
            <div class="how-head">
                <span class="section-overline">{"HOW IT WORKS"}</span>
                <h2>{"From download to hired in four steps"}</h2>
            </div>
            <div class="how-steps">
                <div class="how-line"><div class="how-line-fill" style={line_style}></div></div>
                { for STEPS.iter().enumerate().map(|(i, &(title, desc, color))| {
                    let active = *progress > 0.0 && i <= reached;
                    let class = if active { "how-step how-step-active" } else { "how-step" };
                    let badge_style = format!("background: {color};");
                    html! {
                        <div key={i} class={class}>
                            <span class="how-step-badge" style={badge_style}>{ i + 1 }</span>
                            <div>
                                <h3>{ title }</h3>
                                <p>{ desc }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .how-it-works { padding: 6rem 2rem; background: #ffffff; }

                    .how-head { text-align: center; margin-bottom: 3rem; }
                    .how-head h2 { font-size: 2.6rem; font-weight: 800; margin: 0.5rem 0 0; }

                    .how-steps {
                        position: relative;
                        max-width: 640px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                        padding-left: 1rem;
                    }

                    .how-line {
                        position: absolute;
                        top: 1rem;
                        bottom: 1rem;
                        left: 2.2rem;
                        width: 3px;
                        background: rgba(192, 12, 12, 0.12);
                        border-radius: 2px;
                    }
                    .how-line-fill {
                        width: 100%;
                        height: 100%;
                        background: #C00C0C;
                        border-radius: 2px;
                    }

                    .how-step {
                        display: flex;
                        gap: 1.5rem;
                        align-items: flex-start;
                        opacity: 0.35;
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .how-step-active { opacity: 1; transform: translateX(6px); }

                    .how-step-badge {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        color: #fff;
                        font-weight: 900;
                        z-index: 1;
                    }

                    .how-step h3 { margin: 0.5rem 0; }
                    .how-step p { color: #666; line-height: 1.7; margin: 0; }
                "#}
            </style>
        </section>
    }
}
