use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::observe::observe_once;
use crate::state::counter;

const STATS_THRESHOLD: f64 = 0.3;

struct Stat {
    target: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        target: 12,
        suffix: "",
        label: "Years on stage",
    },
    Stat {
        target: 48,
        suffix: "",
        label: "Productions staged",
    },
    Stat {
        target: 260,
        suffix: "+",
        label: "Young actors trained",
    },
    Stat {
        target: 35,
        suffix: "",
        label: "Festival awards",
    },
];

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    target: u32,
    #[prop_or_default]
    suffix: AttrValue,
    /// Flipped once by the section observer; the count-up runs then.
    started: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state(|| 0u32);

    {
        let shown = shown.clone();
        let target = props.target;
        use_effect_with_deps(
            move |started| {
                let mut destructor: Box<dyn FnOnce()> = Box::new(|| ());

                if *started {
                    let performance =
                        web_sys::window().and_then(|window| window.performance());
                    match performance {
                        Some(performance) if !prefers_reduced_motion() => {
                            let started_at = performance.now();
                            let raf_id = Rc::new(Cell::new(None::<i32>));
                            let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                                Rc::new(RefCell::new(None));

                            let tick = {
                                let frame = frame.clone();
                                let raf_id = raf_id.clone();
                                let shown = shown.clone();
                                Closure::<dyn FnMut(f64)>::new(move |now: f64| {
                                    let progress = counter::progress(started_at, now);
                                    shown.set(counter::value_at(target, progress));
                                    if progress < 1.0 {
                                        if let (Some(window), Some(tick)) =
                                            (web_sys::window(), frame.borrow().as_ref())
                                        {
                                            if let Ok(id) = window.request_animation_frame(
                                                tick.as_ref().unchecked_ref(),
                                            ) {
                                                raf_id.set(Some(id));
                                            }
                                        }
                                    }
                                })
                            };
                            *frame.borrow_mut() = Some(tick);

                            if let (Some(window), Some(tick)) =
                                (web_sys::window(), frame.borrow().as_ref())
                            {
                                if let Ok(id) = window
                                    .request_animation_frame(tick.as_ref().unchecked_ref())
                                {
                                    raf_id.set(Some(id));
                                }
                            }

                            destructor = Box::new(move || {
                                if let (Some(id), Some(window)) =
                                    (raf_id.get(), web_sys::window())
                                {
                                    let _ = window.cancel_animation_frame(id);
                                }
                                frame.borrow_mut().take();
                            });
                        }
                        // Reduced motion (or no clock): land on the target at once.
                        _ => shown.set(target),
                    }
                }

                move || {
                    destructor();
                }
            },
            props.started,
        );
    }

    html! {
        <span class="stat-number">{ counter::display(*shown, &props.suffix) }</span>
    }
}

/// "The studio in numbers" band. The counters arm once, when the section
/// first reaches 30% visibility.
#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let started = use_state(|| false);
    let node = use_node_ref();

    {
        let started = started.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        observe_once(&element, STATS_THRESHOLD, move || started.set(true))
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

    html! {
        <section id="stats" class="stats" ref={node}>
            <h2 class="section-heading">{"The studio in numbers"}</h2>
            <div class="stats-grid">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <StatCounter
                            target={stat.target}
                            suffix={stat.suffix}
                            started={*started}
                        />
                        <p class="stat-label">{stat.label}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .stats {
                    padding: 5rem 2rem;
                    background: rgba(26, 26, 26, 0.85);
                    border-top: 1px solid rgba(255, 158, 44, 0.15);
                    border-bottom: 1px solid rgba(255, 158, 44, 0.15);
                }

                .stats-grid {
                    max-width: 960px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #fff, #FFB95E);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .stat-label {
                    margin-top: 0.5rem;
                    color: #999;
                    font-size: 1rem;
                }

                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .stat-number {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
