//! Hero: entry flourish, floating tags, phone mockup with a live map scene,
//! and a scroll-scrubbed mockup tilt driven by the story progress source.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::config;
use crate::story::progress::{measure_region, RegionGeometry, ScrollBinding, SpanSpec};
use crate::story::responsive::{mode_for_width, viewport_width, ResizeBinding, ViewMode};

const TAGS: [(&str, &str); 3] = [
    ("🏠", "Local Jobs"),
    ("🛍️", "Nearby Shops"),
    ("💼", "Hire Locally"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let is_mobile = use_state_eq(|| {
        mode_for_width(viewport_width(), config::MOBILE_SCREEN_WIDTH) == ViewMode::Stacked
    });
    // Scrubbed progress through the hero's own height.
    let tilt = use_state_eq(|| 0.0f64);

    {
        let is_mobile = is_mobile.clone();
        use_effect_once(move || {
            let binding = ResizeBinding::attach(Callback::from(move |width: f64| {
                is_mobile
                    .set(mode_for_width(width, config::MOBILE_SCREEN_WIDTH) == ViewMode::Stacked);
            }));
            move || drop(binding)
        });
    }

    // Desktop only: map scroll progress over the hero onto the mockup tilt.
    {
        let hero_ref = hero_ref.clone();
        let tilt = tilt.clone();
        use_effect_with_deps(
            move |mobile: &bool| {
                let mut binding = None;
                if !*mobile {
                    let geometry: Rc<RefCell<RegionGeometry>> =
                        Rc::new(RefCell::new(RegionGeometry::default()));
                    if let Some(section) = hero_ref.cast::<Element>() {
                        *geometry.borrow_mut() =
                            measure_region(&section, None, SpanSpec::OwnHeight, 0.0);
                    }
                    binding = ScrollBinding::attach(move |scroll_y| {
                        tilt.set(geometry.borrow().raw_progress(scroll_y));
                    });
                }
                move || drop(binding)
            },
            *is_mobile,
        );
    }

    // Entry rotateY(-20deg) eases toward -10deg as the hero scrolls away.
    let mockup_style = if *is_mobile {
        "transform: rotateY(0deg) rotateX(0deg);".to_string()
    } else {
        format!(
            "transform: rotateY({:.2}deg) rotateX(3deg);",
            -20.0 + *tilt * 10.0
        )
    };

    html! {
        <header class="hero" ref={hero_ref}>
            { if !*is_mobile {
                html! { <span class="hero-watermark">{"NearZO"}</span> }
            } else {
                html! {}
            } }
            <div class="hero-inner">
                <div class="hero-copy">
                    <span class="hero-text hero-overline">{"HYPER-LOCAL ECOSYSTEM"}</span>
                    <h1 class="hero-text">
                        {"Made Simple with, "}
                        <span class="hero-brand">{"NearZO"}</span>
                    </h1>
                    <p class="hero-text hero-subtitle">
                        {"NearZO is your all-in-one hyperlocal platform to find nearby jobs, \
                          hire local workers, and discover small shops around you. Whether you're \
                          a job seeker, shop owner, or someone looking for daily needs like food, \
                          services, or repairs — NearZO connects you with real people in your \
                          neighborhood."}
                    </p>
                    <div class="hero-text hero-cta-group">
                        <a href="#download" class="hero-cta">{"Download App"}</a>
                        <a href="#core-features" class="hero-cta-outline">{"Explore Features"}</a>
                    </div>
                </div>

                <div class="hero-stage">
                    { if !*is_mobile {
                        html! {
                            <>
                                <div class="floating-tag" style="top: 10%; left: 4%;">
                                    <span class="tag-icon">{"🏠"}</span>{"Local Jobs"}
                                </div>
                                <div class="floating-tag" style="top: 45%; left: -4%;">
                                    <span class="tag-icon">{"🛍️"}</span>{"Nearby Shops"}
                                </div>
                                <div class="floating-tag" style="bottom: 10%; right: 0;">
                                    <span class="tag-icon">{"💼"}</span>{"Hire Locally"}
                                </div>
                            </>
                        }
                    } else {
                        html! {}
                    } }

                    <div class="phone-mockup" style={mockup_style}>
                        <div class="phone-glow"></div>
                        <div class="phone-frame">
                            <div class="phone-notch"></div>
                            <div class="phone-app-bar">
                                <strong>{"NearZO"}</strong>
                                <span>{"Discover what's around you"}</span>
                            </div>
                            <div class="phone-map">
                                <svg viewBox="0 0 280 360">
                                    <path
                                        class="route-path"
                                        d="M 120 140 Q 150 180, 200 240 T 220 280"
                                        fill="none"
                                        stroke="#C00C0C"
                                        stroke-width="3"
                                        stroke-dasharray="1000"
                                        opacity="0.6"
                                    />
                                </svg>
                                <div class="map-marker map-marker-you">
                                    <span class="marker-dot">{"📍"}</span>
                                    <span class="marker-pulse"></span>
                                    <span class="marker-label">{"You"}</span>
                                </div>
                                <div class="map-marker map-marker-shop">
                                    <span class="marker-shop">{"🏪"}</span>
                                    <span class="marker-label marker-label-accent">{"Egg Corner"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            { if *is_mobile {
                html! {
                    <div class="hero-tag-row">
                        { for TAGS.iter().map(|&(icon, text)| html! {
                            <div class="floating-tag floating-tag-inline">
                                <span class="tag-icon">{icon}</span>{text}
                            </div>
                        }) }
                    </div>
                }
            } else {
                html! {}
            } }

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        padding: 6rem 2rem 4rem;
                        background: linear-gradient(135deg, #f5f7fa 0%, #e9ecef 100%);
                    }

                    .hero-watermark {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        font-size: 23rem;
                        font-weight: 900;
                        opacity: 0.03;
                        white-space: nowrap;
                        pointer-events: none;
                        user-select: none;
                    }

                    .hero-inner {
                        position: relative;
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        z-index: 1;
                    }

                    @media (max-width: 768px) {
                        .hero { padding-top: 5rem; }
                        .hero-inner { grid-template-columns: 1fr; gap: 1.5rem; }
                    }

                    @keyframes hero-fade-up {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .hero-text {
                        animation: hero-fade-up 1s ease-out both;
                    }
                    .hero-copy .hero-text:nth-child(2) { animation-delay: 0.1s; }
                    .hero-copy .hero-text:nth-child(3) { animation-delay: 0.2s; }
                    .hero-copy .hero-text:nth-child(4) { animation-delay: 0.3s; }

                    .hero-overline {
                        display: block;
                        color: #C00C0C;
                        font-weight: 900;
                        letter-spacing: 4px;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }

                    .hero-copy h1 {
                        font-size: 4rem;
                        font-weight: 800;
                        line-height: 1.2;
                        margin: 0 0 1rem;
                    }

                    @media (max-width: 768px) {
                        .hero-copy h1 { font-size: 2.2rem; }
                        .hero-watermark { display: none; }
                    }

                    .hero-brand { color: #C00C0C; }

                    .hero-subtitle {
                        max-width: 550px;
                        font-size: 1.1rem;
                        color: #4a4a4a;
                        line-height: 1.7;
                    }

                    .hero-cta-group { display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 1.5rem; }

                    .hero-cta, .hero-cta-outline {
                        padding: 1rem 2.5rem;
                        border-radius: 100px;
                        font-weight: 700;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .hero-cta { background: #C00C0C; color: #fff; }
                    .hero-cta:hover { background: #a00a0a; }
                    .hero-cta-outline { border: 2px solid #1a1a1a; color: #1a1a1a; }
                    .hero-cta-outline:hover { border-color: #C00C0C; background: rgba(192, 12, 12, 0.05); }

                    .hero-stage { position: relative; height: 600px; }
                    @media (max-width: 768px) { .hero-stage { height: 420px; } }

                    @keyframes tag-pop {
                        from { opacity: 0; transform: scale(0); }
                        to { opacity: 1; transform: scale(1); }
                    }

                    .floating-tag {
                        position: absolute;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        min-width: 140px;
                        padding: 12px 24px;
                        border-radius: 100px;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
                        border: 1px solid rgba(192, 12, 12, 0.2);
                        font-weight: 700;
                        font-size: 0.875rem;
                        z-index: 6;
                        animation: tag-pop 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .floating-tag:nth-of-type(2) { animation-delay: 0.45s; }
                    .floating-tag:nth-of-type(3) { animation-delay: 0.6s; }
                    .floating-tag:hover {
                        transform: translateY(-4px) scale(1.05);
                        box-shadow: 0 15px 40px rgba(192, 12, 12, 0.3);
                    }

                    .floating-tag-inline { position: static; min-width: 0; padding: 6px 16px; }
                    .hero-tag-row {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                        margin-top: 1.5rem;
                    }

                    .tag-icon {
                        display: flex;
                        background: rgba(192, 12, 12, 0.15);
                        padding: 8px;
                        border-radius: 50%;
                    }

                    @keyframes phone-float {
                        0%, 100% { margin-top: 0; }
                        50% { margin-top: -5px; }
                    }

                    .phone-mockup {
                        position: absolute;
                        top: 50%;
                        left: 55%;
                        translate: -50% -50%;
                        width: 280px;
                        z-index: 5;
                        transform-style: preserve-3d;
                        animation: phone-float 3s ease-in-out infinite;
                    }
                    @media (max-width: 768px) { .phone-mockup { width: 200px; left: 50%; } }

                    .phone-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 120%;
                        height: 80%;
                        background: radial-gradient(circle, rgba(192, 12, 12, 0.25) 0%, transparent 70%);
                        filter: blur(40px);
                        z-index: -1;
                    }

                    .phone-frame {
                        aspect-ratio: 1 / 2;
                        background: #1a1a1a;
                        border-radius: 40px;
                        border: 6px solid #2a2a2a;
                        box-shadow: 0 40px 80px -20px rgba(0, 0, 0, 0.5);
                        overflow: hidden;
                        position: relative;
                    }

                    .phone-notch {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 100px;
                        height: 20px;
                        background: #2a2a2a;
                        border-radius: 0 0 12px 12px;
                        z-index: 3;
                    }

                    .phone-app-bar {
                        display: flex;
                        flex-direction: column;
                        gap: 2px;
                        padding: 2.5rem 1.25rem 1rem;
                        background: #C00C0C;
                        color: #fff;
                    }
                    .phone-app-bar span { font-size: 0.6rem; }

                    .phone-map {
                        position: relative;
                        height: 100%;
                        background: #f8f8f8;
                        background-image:
                            linear-gradient(#e0e0e0 1px, transparent 1px),
                            linear-gradient(90deg, #e0e0e0 1px, transparent 1px);
                        background-size: 20px 20px;
                        overflow: hidden;
                    }
                    .phone-map svg {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }

                    @keyframes route-draw {
                        from { stroke-dashoffset: 1000; }
                        to { stroke-dashoffset: 0; }
                    }
                    .route-path { animation: route-draw 3s ease-in-out infinite; }

                    .map-marker {
                        position: absolute;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        z-index: 2;
                    }
                    .map-marker-you { top: 32%; left: 38%; }
                    .map-marker-shop { top: 68%; left: 70%; }

                    @keyframes marker-pulse {
                        0% { transform: scale(1); opacity: 0.5; }
                        50% { transform: scale(1.5); opacity: 0.2; }
                        100% { transform: scale(1); opacity: 0.5; }
                    }
                    .marker-pulse {
                        position: absolute;
                        top: 0;
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        background: #C00C0C;
                        animation: marker-pulse 2s infinite;
                        z-index: -1;
                    }

                    .marker-label {
                        margin-top: 4px;
                        background: #fff;
                        padding: 0 6px;
                        border-radius: 4px;
                        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
                        font-size: 0.65rem;
                        font-weight: 800;
                    }
                    .marker-label-accent { color: #C00C0C; }
                    .marker-shop {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        background: #C00C0C;
                        border-radius: 10px;
                        box-shadow: 0 6px 12px rgba(192, 12, 12, 0.3);
                    }
                "#}
            </style>
        </header>
    }
}
