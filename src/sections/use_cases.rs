//! Use cases: pinned storytelling that walks through a day in the
//! neighborhood, one persona per slide.

use yew::prelude::*;

use crate::config;
use crate::story::indicator::ProgressDots;
use crate::story::section::{StoryAxis, StoryConfig, StorySection, StoryView};
use crate::story::slide::{Slide, SlideDeck};

struct Persona {
    subtitle: &'static str,
    moment: &'static str,
    character: &'static str,
}

const PERSONAS: [Persona; 3] = [
    Persona {
        subtitle: "Rahul, a college student",
        moment: "6:00 PM",
        character: "🎓",
    },
    Persona {
        subtitle: "Mrs. Gupta, Bakery Owner",
        moment: "8:00 AM",
        character: "👩‍🍳",
    },
    Persona {
        subtitle: "Anjali, New to the City",
        moment: "12:30 PM",
        character: "👩‍💼",
    },
];

fn use_case_deck() -> SlideDeck {
    SlideDeck::new(vec![
        Slide::new(
            "For Job Seekers",
            "6:00 PM, Rahul finishes his classes. He needs a part-time job to support \
             his education. Within minutes on NearZO, he discovers a cafe hiring nearby. \
             By 7:00 PM, he's already scheduled for an interview.",
            "#C00C0C",
            "linear-gradient(135deg, #C00C0C 0%, #ff6b6b 100%)",
            "💼",
            &["Part-time", "Nearby", "Flexible Hours", "Student Friendly"],
        ),
        Slide::new(
            "For Shop Owners",
            "8:00 AM, Mrs. Gupta's bakery is bustling. Her delivery boy calls in sick. \
             She posts on NearZO at 8:15 AM. By 9:30 AM, three local candidates have \
             applied. By 10:00 AM, she's hired her new delivery partner.",
            "#FF9800",
            "linear-gradient(135deg, #FF9800 0%, #ffc107 100%)",
            "🏪",
            &["Urgent Hiring", "Local Talent", "Quick Process", "Verified"],
        ),
        Slide::new(
            "For Customers",
            "12:30 PM, Anjali is craving an egg sandwich but doesn't know the area. \
             She opens NearZO, searches \"breakfast near me\", and finds \"Red Velvet \
             Cafe\" just 200m away with 4.8 stars. 15 minutes later, she's enjoying \
             her sandwich.",
            "#4CAF50",
            "linear-gradient(135deg, #4CAF50 0%, #8bc34a 100%)",
            "🙋",
            &["Discover", "Reviews", "Nearby", "Food"],
        ),
    ])
}

fn story_card(slide: &Slide, persona: &Persona, text_style: Option<String>) -> Html {
    html! {
        <div class="usecase-story" style={text_style.unwrap_or_default()}>
            <span class="usecase-moment" style={format!("background: {}1a; color: {};", slide.accent_color, slide.accent_color)}>
                { persona.moment }
            </span>
            <h3>{ slide.title }</h3>
            <span class="usecase-subtitle">{ persona.subtitle }</span>
            <p>{ slide.body }</p>
            <div class="usecase-chips">
                { for slide.tags.iter().map(|&tag| html! {
                    <span class="usecase-chip">{ tag }</span>
                }) }
            </div>
        </div>
    }
}

fn scene(view: StoryView) -> Html {
    let shown = view
        .deck
        .get(view.shown_index)
        .cloned()
        .unwrap_or_else(|| view.deck.get(0).cloned().expect("non-empty deck"));
    let persona = &PERSONAS[shown.index.min(PERSONAS.len() - 1)];
    let visual_style = format!(
        "{} background: {};",
        view.frame.icon.style(),
        shown.accent_gradient
    );

    html! {
        <div class="usecases-scene">
            <div class="usecases-head">
                <span class="section-overline">{"COMMUNITY IMPACT"}</span>
                <h2>{"Real stories from your neighborhood"}</h2>
            </div>
            <div class="usecases-grid">
                { story_card(&shown, persona, Some(view.frame.text.style())) }
                <div class="usecase-visual" style={visual_style}>
                    <span class="usecase-character">{ persona.character }</span>
                    <span class="usecase-icon">{ shown.icon_ref }</span>
                </div>
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
        <div class="usecases-stacked">
            <span class="section-overline">{"COMMUNITY IMPACT"}</span>
            <h2>{"Real stories from your neighborhood"}</h2>
            { for deck.iter().map(|slide| {
                let persona = &PERSONAS[slide.index.min(PERSONAS.len() - 1)];
                html! {
                    <div key={slide.index} class="usecase-card story-fade-in">
                        { story_card(slide, persona, None) }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(UseCases)]
pub fn use_cases() -> Html {
    let story = use_memo(
        |_| StoryConfig {
            id: "use-cases",
            deck: use_case_deck(),
            axis: StoryAxis::Vertical { span_factor: 2.0 },
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
                    #use-cases {
                        background:
                            radial-gradient(circle at 10% 20%, rgba(192, 12, 12, 0.02) 0%, transparent 30%),
                            radial-gradient(circle at 90% 80%, rgba(192, 12, 12, 0.02) 0%, transparent 30%),
                            #ffffff;
                    }

                    .usecases-scene {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                        height: 100%;
                        box-sizing: border-box;
                    }

                    .usecases-head { text-align: center; }
                    .usecases-head h2, .usecases-stacked h2 {
                        font-size: 2.6rem;
                        font-weight: 800;
                        margin: 0.5rem 0 0;
                    }

                    .usecases-grid {
                        display: grid;
                        grid-template-columns: 1.1fr 0.9fr;
                        gap: 3rem;
                        align-items: center;
                        flex: 1;
                    }

                    .usecase-story h3 { font-size: 2rem; font-weight: 800; margin: 0.75rem 0 0.25rem; }
                    .usecase-subtitle { color: #888; font-weight: 600; }
                    .usecase-story p { font-size: 1.05rem; line-height: 1.8; color: #4a4a4a; }

                    .usecase-moment {
                        display: inline-block;
                        padding: 4px 14px;
                        border-radius: 100px;
                        font-weight: 800;
                        font-size: 0.8rem;
                    }

                    .usecase-chips { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-top: 0.75rem; }
                    .usecase-chip {
                        padding: 4px 12px;
                        border-radius: 100px;
                        background: rgba(0, 0, 0, 0.05);
                        font-size: 0.75rem;
                        font-weight: 700;
                    }

                    .usecase-visual {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 320px;
                        border-radius: 32px;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.12);
                    }
                    .usecase-character { font-size: 6rem; }
                    .usecase-icon {
                        position: absolute;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        font-size: 2rem;
                        background: rgba(255, 255, 255, 0.85);
                        border-radius: 16px;
                        padding: 0.5rem;
                    }

                    .usecases-scene .story-dots { justify-content: center; }

                    .usecases-stacked {
                        max-width: 700px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        text-align: left;
                    }
                    .usecase-card {
                        padding: 1.5rem;
                        border-radius: 24px;
                        background: #fff;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                    }
                "#}
            </style>
        </>
    }
}
