use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod state {
    pub mod counter;
    pub mod films;
    pub mod gallery;
    pub mod journey;
}
mod components {
    pub mod faq;
    pub mod films;
    pub mod gallery;
    pub mod journey;
    pub mod observe;
    pub mod reveal;
    pub mod scroll_link;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use components::scroll_link::ScrollLink;
use pages::home::Home;

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("stats", "Numbers"),
    ("journey", "Journey"),
    ("films", "Films"),
    ("gallery", "Gallery"),
    ("faq", "FAQ"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::wrap(Box::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            let scroll_top = web_sys::window()
                                .and_then(|window| window.document())
                                .and_then(|document| document.document_element())
                                .map(|root| root.scroll_top())
                                .unwrap_or(0);
                            is_scrolled.set(scroll_top > 40);
                        }
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
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
        Callback::from(move |_| {
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
                <ScrollLink target="about" class="nav-logo">
                    {"Limelight"}
                </ScrollLink>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(target, label)| html! {
                        <ScrollLink
                            target={*target}
                            class="nav-link"
                            onclick={close_menu.clone()}
                        >
                            { *label }
                        </ScrollLink>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.95);
                    border-bottom: 1px solid rgba(255, 158, 44, 0.15);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #FFB95E;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #ddd;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #FFB95E;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        background: rgba(26, 26, 26, 0.98);
                        padding: 1rem 2rem;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }

                    .nav-right .nav-link {
                        padding: 0.8rem 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
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
