//! The landing page: every story section assembled in reading order.

use yew::prelude::*;

use crate::sections::core_features::CoreFeatures;
use crate::sections::download_cta::DownloadCta;
use crate::sections::hero::Hero;
use crate::sections::how_it_works::HowItWorks;
use crate::sections::problem_solution::ProblemSolution;
use crate::sections::use_cases::UseCases;
use crate::sections::why_us::WhyUs;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <ProblemSolution />
            <HowItWorks />
            <CoreFeatures />
            <UseCases />
            <WhyUs />
            <DownloadCta />
            <style>
                {r#"
                    .landing-page {
                        overflow-x: hidden;
                        font-family: "Outfit", -apple-system, BlinkMacSystemFont, "Segoe UI",
                            Roboto, Helvetica, Arial, sans-serif;
                        color: #1a1a1a;
                    }

                    .story-section { position: relative; }

                    /* The pinned frame holds its viewport position while the
                       tall section container scrolls the span underneath it. */
                    .story-frame {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }

                    .story-stacked { padding: 2rem 0; }

                    .story-dots { display: flex; gap: 0.5rem; }

                    @keyframes story-fade-in {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .story-fade-in { animation: story-fade-in 0.8s ease-out both; }
                "#}
            </style>
        </div>
    }
}
