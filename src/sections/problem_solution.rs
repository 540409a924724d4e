//! Problem/solution: the gap between neighborhoods and their opportunities,
//! answered by a horizontally scroll-jacked row of solution cards.

use yew::prelude::*;

use crate::config;
use crate::story::indicator::ProgressDots;
use crate::story::section::{StoryAxis, StoryConfig, StorySection, StoryView};
use crate::story::slide::{Slide, SlideDeck};

const PROBLEMS: [(&str, &str, &str); 3] = [
    (
        "🔎",
        "No nearby job visibility",
        "People still walk shop to shop asking for work without knowing where vacancies exist.",
    ),
    (
        "🏪",
        "Hard to find local services",
        "Finding a mechanic, nurse, or even an egg sandwich nearby takes unnecessary effort.",
    ),
    (
        "🏢",
        "Small shops are invisible",
        "Local businesses lose customers because they have no digital presence.",
    ),
];

struct SolutionMeta {
    subtitle: &'static str,
    stat: &'static str,
    stat_label: &'static str,
}

const SOLUTION_META: [SolutionMeta; 3] = [
    SolutionMeta {
        subtitle: "One platform",
        stat: "3-in-1",
        stat_label: "Unified Platform",
    },
    SolutionMeta {
        subtitle: "Near you",
        stat: "Real-time",
        stat_label: "GPS Results",
    },
    SolutionMeta {
        subtitle: "Trusted",
        stat: "Verified",
        stat_label: "Local Network",
    },
];

fn solution_deck() -> SlideDeck {
    SlideDeck::new(vec![
        Slide::new(
            "Jobs, Shops & Services",
            "Find local jobs, nearby shops, and daily services in one single app.",
            "#4CAF50",
            "linear-gradient(135deg, #4CAF50 0%, #8bc34a 100%)",
            "✅",
            &["Job Search", "Hire Workers", "Discover Shops"],
        ),
        Slide::new(
            "Location Based Search",
            "Search anything — egg sandwich, pharmacy, mechanic — and see results around you.",
            "#2196F3",
            "linear-gradient(135deg, #2196F3 0%, #6ec8ff 100%)",
            "📍",
            &["Nearby Search", "Map View", "Instant Call"],
        ),
        Slide::new(
            "Verified Local Network",
            "Profiles are verified so users can trust who they are hiring or visiting.",
            "#9C27B0",
            "linear-gradient(135deg, #9C27B0 0%, #ba68c8 100%)",
            "🛡️",
            &["Verified Profiles", "Community Reviews", "Safe Hiring"],
        ),
    ])
}

fn solution_card(slide: &Slide, wide: bool) -> Html {
    let meta = &SOLUTION_META[slide.index.min(SOLUTION_META.len() - 1)];
    let icon_style = format!("background: {};", slide.accent_gradient);
    let stat_style = format!("color: {};", slide.accent_color);
    let class = if wide {
        "solution-card solution-card-wide"
    } else {
        "solution-card story-fade-in"
    };
    html! {
        <div key={slide.index} class={class}>
            <div class="solution-icon" style={icon_style}>{ slide.icon_ref }</div>
            <span class="solution-subtitle">{ meta.subtitle }</span>
            <h3>{ slide.title }</h3>
            <p>{ slide.body }</p>
            <div class="solution-stat">
                <strong style={stat_style}>{ meta.stat }</strong>
                <span>{ meta.stat_label }</span>
            </div>
            <ul class="solution-features">
                { for slide.tags.iter().map(|&tag| html! { <li>{ tag }</li> }) }
            </ul>
        </div>
    }
}

fn scene(view: StoryView) -> Html {
    let row_style = format!(
        "transform: translateX({:.1}px); transition: transform 0.05s linear;",
        view.offset_x
    );
    html! {
        <div class="solutions-scene">
            <div class="solutions-head">
                <span class="section-overline">{"THE SOLUTION"}</span>
                <h2>{"NearZO closes the gap"}</h2>
            </div>
            <div class="solutions-row" ref={view.row_ref.clone()} style={row_style}>
                { for view.deck.iter().map(|slide| solution_card(slide, true)) }
            </div>
            <ProgressDots
                deck={view.deck.clone()}
                active={view.target_index}
                on_seek={view.seek.clone()}
            />
        </div>
    }
}

fn stacked(deck: SlideDeck) -> Html {
    html! {
        <div class="solutions-stacked">
            <span class="section-overline">{"THE SOLUTION"}</span>
            <h2>{"NearZO closes the gap"}</h2>
            { for deck.iter().map(|slide| solution_card(slide, false)) }
        </div>
    }
}

#[function_component(ProblemSolution)]
pub fn problem_solution() -> Html {
    let story = use_memo(
        |_| StoryConfig {
            id: "solutions",
            deck: solution_deck(),
            axis: StoryAxis::Horizontal,
            stack_below: config::MOBILE_SCREEN_WIDTH,
        },
        (),
    );

    html! {
        <>
            <div id="problems" class="problems">
                <div class="problems-head">
                    <span class="section-overline">{"THE PROBLEM"}</span>
                    <h2>{"Your neighborhood is full of opportunities you can't see"}</h2>
                </div>
                <div class="problems-grid">
                    { for PROBLEMS.iter().enumerate().map(|(i, &(icon, title, desc))| html! {
                        <div key={i} class="problem-card story-fade-in">
                            <span class="problem-icon">{ icon }</span>
                            <h3>{ title }</h3>
                            <p>{ desc }</p>
                        </div>
                    }) }
                </div>
                <div class="gap-circle-wrap">
                    <div class="gap-circle">{"THE GAP"}</div>
                    <div class="dashed-circle"></div>
                </div>
            </div>
            <StorySection
                config={(*story).clone()}
                scene={Callback::from(scene)}
                stacked={Callback::from(stacked)}
            />
            <style>
                {r#"
                    .problems {
                        position: relative;
                        padding: 6rem 2rem 8rem;
                        background: #fafafa;
                        overflow: hidden;
                    }

                    .problems-head { text-align: center; max-width: 760px; margin: 0 auto 3rem; }
                    .problems-head h2 { font-size: 2.6rem; font-weight: 800; margin: 0.5rem 0 0; }

                    .problems-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 768px) {
                        .problems-grid { grid-template-columns: 1fr; }
                        .gap-circle-wrap { display: none; }
                    }

                    .problem-card {
                        padding: 2rem;
                        border-radius: 24px;
                        background: #fff;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.06);
                        text-align: center;
                    }
                    .problem-card h3 { margin: 1rem 0 0.5rem; }
                    .problem-card p { color: #666; line-height: 1.6; }
                    .problem-icon { font-size: 2.5rem; }

                    @keyframes gap-pulse {
                        0%, 100% { transform: translateX(-50%) scale(1); opacity: 1; }
                        50% { transform: translateX(-50%) scale(1.1); opacity: 0.8; }
                    }
                    @keyframes dash-spin {
                        to { transform: translateX(-50%) rotate(360deg); }
                    }

                    .gap-circle-wrap { position: relative; height: 120px; margin-top: 3rem; }
                    .gap-circle {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 110px;
                        height: 110px;
                        border-radius: 50%;
                        background: #C00C0C;
                        color: #fff;
                        font-weight: 900;
                        font-size: 0.85rem;
                        animation: gap-pulse 2s ease-in-out infinite;
                        z-index: 1;
                    }
                    .dashed-circle {
                        position: absolute;
                        left: 50%;
                        top: -15px;
                        transform: translateX(-50%);
                        width: 140px;
                        height: 140px;
                        border-radius: 50%;
                        border: 2px dashed rgba(192, 12, 12, 0.4);
                        animation: dash-spin 40s linear infinite;
                    }

                    #solutions { background: #1a1a1a; }

                    .solutions-scene {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 2.5rem;
                        height: 100%;
                        padding: 3rem 0;
                        box-sizing: border-box;
                        overflow: hidden;
                    }

                    .solutions-head { padding: 0 2rem; max-width: 1100px; margin: 0 auto; width: 100%; box-sizing: border-box; }
                    .solutions-head h2, .solutions-stacked h2 { color: #fff; font-size: 2.6rem; font-weight: 800; margin: 0.5rem 0 0; }

                    .solutions-row {
                        display: flex;
                        gap: 2rem;
                        padding: 0 2rem;
                        width: max-content;
                        will-change: transform;
                    }

                    .solution-card {
                        border-radius: 28px;
                        background: #242424;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 2.5rem;
                        color: #eee;
                    }
                    .solution-card-wide { width: 56vw; max-width: 760px; flex-shrink: 0; }
                    .solution-card h3 { font-size: 1.8rem; margin: 0.5rem 0; color: #fff; }
                    .solution-card p { color: #aaa; line-height: 1.7; }

                    .solution-subtitle {
                        text-transform: uppercase;
                        letter-spacing: 2px;
                        font-size: 0.75rem;
                        color: #888;
                        font-weight: 700;
                    }

                    .solution-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 56px;
                        height: 56px;
                        border-radius: 16px;
                        font-size: 1.6rem;
                        margin-bottom: 1rem;
                    }

                    .solution-stat { display: flex; align-items: baseline; gap: 0.75rem; margin: 1rem 0; }
                    .solution-stat strong { font-size: 2rem; font-weight: 900; }
                    .solution-stat span { color: #888; font-size: 0.85rem; }

                    .solution-features {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        color: #ccc;
                        font-weight: 600;
                        flex-wrap: wrap;
                    }
                    .solution-features li::before { content: "• "; color: #C00C0C; }

                    .solutions-scene .story-dots { justify-content: center; }
                    #solutions .story-dot { background-clip: padding-box; }

                    .solutions-stacked {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 4rem 1.5rem;
                        max-width: 700px;
                        margin: 0 auto;
                    }
                "#}
            </style>
        </>
    }
}
