//! Core features: pinned vertical scrollytelling over six feature beats.

use yew::prelude::*;

use crate::config;
use crate::story::indicator::{ProgressDots, ProgressFillBar};
use crate::story::section::{StoryAxis, StoryConfig, StorySection, StoryView};
use crate::story::slide::{Slide, SlideDeck};

fn feature_deck() -> SlideDeck {
    SlideDeck::new(vec![
        Slide::new(
            "Local Job Finder",
            "Find part-time and full-time work in your immediate neighborhood.",
            "#C00C0C",
            "linear-gradient(135deg, #C00C0C 0%, #ff6b6b 100%)",
            "🔍",
            &["Find work near you"],
        ),
        Slide::new(
            "Hire Instantly",
            "Shop owners can find and hire workers in minutes, not days.",
            "#2196F3",
            "linear-gradient(135deg, #2196F3 0%, #6ec8ff 100%)",
            "✅",
            &["Quick hiring process"],
        ),
        Slide::new(
            "Shop Discovery",
            "Discover hidden gems and small shops that aren't on major platforms.",
            "#FF9800",
            "linear-gradient(135deg, #FF9800 0%, #ffc107 100%)",
            "🛍️",
            &["Find local stores"],
        ),
        Slide::new(
            "Service Search",
            "Need an egg sandwich or a tailor? Find exactly what you need fast.",
            "#4CAF50",
            "linear-gradient(135deg, #4CAF50 0%, #8bc34a 100%)",
            "🍳",
            &["Services at your doorstep"],
        ),
        Slide::new(
            "GPS-based Results",
            "Every result is hyper-local, sorted by distance from your current location.",
            "#9C27B0",
            "linear-gradient(135deg, #9C27B0 0%, #ba68c8 100%)",
            "📍",
            &["Location-aware search"],
        ),
        Slide::new(
            "Profile & Reviews",
            "Verified user reviews help you make trusted choices in your community.",
            "#607D8B",
            "linear-gradient(135deg, #607D8B 0%, #90a4ae 100%)",
            "⭐",
            &["Trusted community reviews"],
        ),
    ])
}

fn scene(view: StoryView) -> Html {
    let shown = view
        .deck
        .get(view.shown_index)
        .cloned()
        .unwrap_or_else(|| view.deck.get(0).cloned().expect("non-empty deck"));
    let target = view.deck.get(view.target_index).cloned().unwrap_or_else(|| shown.clone());

    let highlight_style = format!(
        "{} border-left: 4px solid {}; color: {};",
        view.frame.highlight.style(),
        shown.accent_color,
        shown.accent_color,
    );
    let icon_tile_style = format!(
        "{} background: {}; box-shadow: 0 30px 60px {}40;",
        view.frame.icon.style(),
        shown.accent_gradient,
        shown.accent_color,
    );
    let numeral_style = format!("color: {}0d;", shown.accent_color);

    html! {
        <div class="features-scene">
            <div class="features-head">
                <span class="section-overline">{"CORE FEATURES"}</span>
                <h2>{"Everything local, in one app"}</h2>
            </div>
            <ProgressFillBar
                active={view.target_index}
                count={view.deck.len()}
                gradient={AttrValue::from(target.accent_gradient)}
            />
            <div class="features-grid">
                <div class="features-copy">
                    <span class="features-counter" style={format!("color: {};", shown.accent_color)}>
                        { format!("0{} / 0{}", shown.index + 1, view.deck.len()) }
                    </span>
                    <h3 style={view.frame.text.style()}>{ shown.title }</h3>
                    <blockquote class="features-highlight" style={highlight_style}>
                        { shown.highlight().unwrap_or_default() }
                    </blockquote>
                    <p class="features-desc" style={view.frame.text.style()}>{ shown.body }</p>
                    <ProgressDots
                        deck={view.deck.clone()}
                        active={view.target_index}
                        on_seek={view.seek.clone()}
                    />
                </div>
                <div class="features-visual">
                    <span class="features-numeral" style={numeral_style}>
                        { format!("0{}", shown.index + 1) }
                    </span>
                    <div class="features-icon-tile" style={icon_tile_style}>
                        { shown.icon_ref }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn stacked(deck: SlideDeck) -> Html {
    html! {
        <div class="features-stacked">
            <span class="section-overline">{"CORE FEATURES"}</span>
            <h2>{"Everything local, in one app"}</h2>
            { for deck.iter().map(|slide| {
                let tile_style = format!("background: {};", slide.accent_gradient);
                let highlight_style = format!(
                    "border-left: 4px solid {0}; color: {0};",
                    slide.accent_color
                );
                html! {
                    <div key={slide.index} class="feature-card story-fade-in">
                        <div class="feature-card-icon" style={tile_style}>{ slide.icon_ref }</div>
                        <div>
                            <h3>{ slide.title }</h3>
                            <blockquote class="features-highlight" style={highlight_style}>
                                { slide.highlight().unwrap_or_default() }
                            </blockquote>
                            <p>{ slide.body }</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(CoreFeatures)]
pub fn core_features() -> Html {
    let story = use_memo(
        |_| StoryConfig {
            id: "core-features",
            deck: feature_deck(),
            axis: StoryAxis::Vertical { span_factor: 3.0 },
            stack_below: config::TINY_SCREEN_WIDTH,
        },
        (),
    );

    html! {
        <>
            <StorySection
                config={(*story).clone()}
                scene={Callback::from(scene)}
                stacked={Callback::from(stacked)}
            />
            <style>
                {r#"
                    #core-features { background: #ffffff; }

                    .features-scene {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        height: 100%;
                        box-sizing: border-box;
                    }

                    .section-overline {
                        color: #C00C0C;
                        font-weight: 900;
                        letter-spacing: 4px;
                        font-size: 0.9rem;
                    }

                    .features-head h2, .features-stacked h2 {
                        font-size: 2.6rem;
                        font-weight: 800;
                        margin: 0.5rem 0 0;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        flex: 1;
                    }

                    .features-counter {
                        font-weight: 900;
                        letter-spacing: 2px;
                        font-size: 0.9rem;
                    }

                    .features-copy h3 {
                        font-size: 2.2rem;
                        font-weight: 800;
                        margin: 0.75rem 0;
                    }

                    .features-highlight {
                        margin: 0 0 1rem;
                        padding: 0.75rem 1.25rem;
                        background: rgba(0, 0, 0, 0.03);
                        font-weight: 700;
                        opacity: 0.7;
                    }

                    .features-desc {
                        font-size: 1.1rem;
                        color: #4a4a4a;
                        line-height: 1.7;
                        min-height: 3.5rem;
                    }

                    .features-visual {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .features-numeral {
                        position: absolute;
                        font-size: 16rem;
                        font-weight: 900;
                        user-select: none;
                        pointer-events: none;
                    }

                    .features-icon-tile {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 220px;
                        height: 220px;
                        border-radius: 48px;
                        font-size: 5rem;
                    }

                    .features-copy .story-dots { margin-top: 1.5rem; }

                    .features-stacked {
                        max-width: 700px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .feature-card {
                        display: flex;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        border-radius: 24px;
                        background: #fff;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                    }

                    .feature-card h3 { margin: 0 0 0.5rem; }

                    .feature-card-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                        width: 64px;
                        height: 64px;
                        border-radius: 18px;
                        font-size: 1.8rem;
                    }
                "#}
            </style>
        </>
    }
}
