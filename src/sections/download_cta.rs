//! Closing call-to-action and footer.

use yew::prelude::*;

const EXPLORE_LINKS: [(&str, &str); 4] = [
    ("#core-features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#use-cases", "Use Cases"),
    ("#why-us", "Why NearZO"),
];

#[function_component(DownloadCta)]
pub fn download_cta() -> Html {
    html! {
        <>
            <section id="download" class="download-cta">
                <div class="cta-box story-fade-in">
                    <span class="cta-circle cta-circle-top"></span>
                    <span class="cta-circle cta-circle-bottom"></span>
                    <div class="cta-content">
                        <h2>
                            {"Ready to discover everything "}
                            <span class="cta-accent">{"Near You?"}</span>
                        </h2>
                        <p>
                            {"Find local jobs, hire nearby workers, and discover small shops \
                              around you — all in one app."}
                        </p>
                        <a href="#" class="cta-button">{"Download App Now"}</a>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div class="footer-about">
                        <span class="footer-logo">{"NearZO"}</span>
                        <p>
                            {"A hyper-local platform connecting job seekers, shops, and \
                              services. Building stronger communities through instant local \
                              discovery."}
                        </p>
                    </div>
                    <div class="footer-links">
                        <h4>{"Explore"}</h4>
                        { for EXPLORE_LINKS.iter().map(|&(href, label)| html! {
                            <a href={href}>{ label }</a>
                        }) }
                    </div>
                    <div class="footer-links">
                        <h4>{"Legal"}</h4>
                        <a href="#">{"Terms & Conditions"}</a>
                        <a href="#">{"Privacy Policy"}</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{"© NearZO. Made for your neighborhood."}</span>
                </div>
            </footer>

            <style>
                {r#"
                    .download-cta { padding: 7rem 2rem; background: #ffffff; }

                    .cta-box {
                        position: relative;
                        max-width: 1100px;
                        margin: 0 auto;
                        border-radius: 40px;
                        padding: 5rem 2.5rem;
                        background: #C00C0C;
                        color: #fff;
                        text-align: center;
                        overflow: hidden;
                        box-shadow: 0 20px 40px rgba(192, 12, 12, 0.2);
                    }

                    .cta-circle { position: absolute; border-radius: 50%; }
                    .cta-circle-top {
                        top: -10%; right: -5%;
                        width: 300px; height: 300px;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .cta-circle-bottom {
                        bottom: -15%; left: -5%;
                        width: 200px; height: 200px;
                        background: rgba(0, 0, 0, 0.1);
                    }

                    .cta-content { position: relative; z-index: 1; }
                    .cta-content h2 { font-size: 2.8rem; font-weight: 900; margin: 0 0 1.5rem; }
                    .cta-accent { color: #1a1a1a; }
                    .cta-content p {
                        max-width: 700px;
                        margin: 0 auto 2.5rem;
                        font-size: 1.25rem;
                        line-height: 1.6;
                        opacity: 0.9;
                    }

                    .cta-button {
                        display: inline-block;
                        padding: 1rem 3rem;
                        border-radius: 100px;
                        background: #fff;
                        color: #C00C0C;
                        font-weight: 900;
                        font-size: 1.1rem;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .cta-button:hover { background: rgba(255, 255, 255, 0.9); transform: scale(1.05); }

                    .site-footer {
                        padding: 5rem 2rem 2rem;
                        background: #ffffff;
                        border-top: 1px solid rgba(0, 0, 0, 0.05);
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto 3rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; gap: 2rem; }
                    }

                    .footer-logo { color: #C00C0C; font-weight: 900; font-size: 2rem; }
                    .footer-about p { color: #555; max-width: 400px; line-height: 1.6; }

                    .footer-links { display: flex; flex-direction: column; gap: 0.6rem; }
                    .footer-links h4 { margin: 0 0 0.5rem; }
                    .footer-links a { color: #666; text-decoration: none; }
                    .footer-links a:hover { color: #C00C0C; }

                    .footer-bottom {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(0, 0, 0, 0.05);
                        color: #888;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </>
    }
}
