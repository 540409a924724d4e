use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod story {
    pub mod axis;
    pub mod choreo;
    pub mod indicator;
    pub mod mapper;
    pub mod pin;
    pub mod progress;
    pub mod responsive;
    pub mod section;
    pub mod slide;
}
mod sections {
    pub mod core_features;
    pub mod download_cta;
    pub mod hero;
    pub mod how_it_works;
    pub mod problem_solution;
    pub mod use_cases;
    pub mod why_us;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"Nothing around here."}</p>
                    <Link<Route> to={Route::Home}>{"Back to NearZO"}</Link<Route>>
                </div>
            }
        }
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#problems", "The Gap"),
    ("#core-features", "Features"),
    ("#use-cases", "Use Cases"),
    ("#why-us", "Why NearZO"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"NearZO"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|&(href, label)| html! {
                        <a href={href} class="nav-link" onclick={close_menu.clone()}>
                            { label }
                        </a>
                    }) }
                    <a href="#download" class="nav-download" onclick={close_menu.clone()}>
                        {"Download App"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1rem 2rem;
                        transition: all 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .top-nav.scrolled {
                        padding: 0.5rem 2rem;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.08);
                    }

                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .nav-logo {
                        color: #C00C0C;
                        font-weight: 900;
                        font-size: 1.5rem;
                        text-decoration: none;
                    }

                    .nav-right { display: flex; align-items: center; gap: 1.75rem; }

                    .nav-link {
                        color: #1a1a1a;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .nav-link:hover { color: #C00C0C; }

                    .nav-download {
                        padding: 0.6rem 1.5rem;
                        border-radius: 100px;
                        background: #C00C0C;
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 3px;
                        border-radius: 2px;
                        background: #1a1a1a;
                    }

                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: rgba(255, 255, 255, 0.97);
                            box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
