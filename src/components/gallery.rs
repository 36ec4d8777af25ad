use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::state::gallery::{GalleryItem, GalleryView, ALL_FILTER};

const FILTERS: &[(&str, &str)] = &[
    (ALL_FILTER, "All photos"),
    ("rehearsal", "Rehearsals"),
    ("stage", "On stage"),
    ("backstage", "Backstage"),
];

const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: "rehearsal-1",
        category: "rehearsal",
        category_label: "Rehearsals",
        thumb: "assets/gallery/rehearsal-1.jpg",
        full: "assets/gallery/rehearsal-1.jpg",
        alt: "A rehearsal at the Limelight studio",
        caption: "A rehearsal at the Limelight studio",
    },
    GalleryItem {
        id: "stage-1",
        category: "stage",
        category_label: "On stage",
        thumb: "assets/gallery/stage-1.jpg",
        full: "assets/gallery/stage-1.jpg",
        alt: "Young actors on the main stage",
        caption: "Young actors on the main stage",
    },
    GalleryItem {
        id: "backstage-1",
        category: "backstage",
        category_label: "Backstage",
        thumb: "assets/gallery/backstage-1.jpg",
        full: "assets/gallery/backstage-1.jpg",
        alt: "Backstage minutes before the show",
        caption: "Backstage minutes before the show",
    },
    GalleryItem {
        id: "rehearsal-2",
        category: "rehearsal",
        category_label: "Rehearsals",
        thumb: "assets/gallery/rehearsal-2.jpg",
        full: "assets/gallery/rehearsal-2.jpg",
        alt: "Working through a difficult scene",
        caption: "Working through a difficult scene",
    },
    GalleryItem {
        id: "stage-2",
        category: "stage",
        category_label: "On stage",
        thumb: "assets/gallery/stage-2.jpg",
        full: "assets/gallery/stage-2.jpg",
        alt: "The final bow of the spring show",
        caption: "The final bow of the spring show",
    },
    GalleryItem {
        id: "backstage-2",
        category: "backstage",
        category_label: "Backstage",
        thumb: "assets/gallery/backstage-2.jpg",
        full: "assets/gallery/backstage-2.jpg",
        alt: "Costume fitting in the wardrobe room",
        caption: "Costume fitting in the wardrobe room",
    },
    GalleryItem {
        id: "rehearsal-3",
        category: "rehearsal",
        category_label: "Rehearsals",
        thumb: "assets/gallery/rehearsal-3.jpg",
        full: "assets/gallery/rehearsal-3.jpg",
        alt: "Movement class warm-up",
        caption: "Movement class warm-up",
    },
    GalleryItem {
        id: "stage-3",
        category: "stage",
        category_label: "On stage",
        thumb: "assets/gallery/stage-3.jpg",
        full: "assets/gallery/stage-3.jpg",
        alt: "A scene from the winter fairy tale",
        caption: "A scene from the winter fairy tale",
    },
];

const BODY_OPEN_CLASS: &str = "is-lightbox-open";

fn lightbox(view: &UseStateHandle<GalleryView>) -> Html {
    let item = match view.current() {
        Some(item) => *item,
        None => return html! {},
    };

    let close = {
        let view = view.clone();
        let snapshot = (*view).clone();
        Callback::from(move |_| {
            let mut next = snapshot.clone();
            next.close();
            view.set(next);
        })
    };
    let step = |delta: isize| {
        let view = view.clone();
        let snapshot = (*view).clone();
        Callback::from(move |_| {
            let mut next = snapshot.clone();
            next.step(delta);
            view.set(next);
        })
    };

    html! {
        <div id="gallery-lightbox" class="lightbox">
            <div class="lightbox-backdrop" onclick={close.clone()}></div>
            <figure class="lightbox-figure">
                <img class="lightbox-image" src={item.full} alt={item.alt} />
                <figcaption class="lightbox-caption">{ item.caption }</figcaption>
            </figure>
            <button type="button" class="lightbox-prev" onclick={step(-1)}>
                {"‹"}
            </button>
            <button type="button" class="lightbox-next" onclick={step(1)}>
                {"›"}
            </button>
            <button type="button" class="lightbox-close" onclick={close}>
                {"×"}
            </button>
        </div>
    }
}

/// Photo gallery: category tabs over a static set of shots, plus a
/// lightbox with wrap-around navigation over the visible subset.
#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let view = use_state(|| GalleryView::new(GALLERY_ITEMS.to_vec()));

    // Arrow keys and Escape work only while the lightbox is open; the
    // listener is re-bound on every state change so it never acts on a
    // stale index.
    {
        let handle = view.clone();
        use_effect_with_deps(
            move |current: &GalleryView| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window()
                    .and_then(|window| window.document())
                {
                    Some(document) if current.is_open() => {
                        let snapshot = current.clone();
                        let keydown =
                            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                                let mut next = snapshot.clone();
                                match event.key().as_str() {
                                    "Escape" => next.close(),
                                    "ArrowRight" => next.step(1),
                                    "ArrowLeft" => next.step(-1),
                                    _ => return,
                                }
                                handle.set(next);
                            });
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            (*view).clone(),
        );
    }

    // The page behind the overlay stops scrolling while it is open.
    {
        use_effect_with_deps(
            move |open| {
                let body = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body());
                if let Some(body) = &body {
                    let class_list = body.class_list();
                    let _ = if *open {
                        class_list.add_1(BODY_OPEN_CLASS)
                    } else {
                        class_list.remove_1(BODY_OPEN_CLASS)
                    };
                }
                move || {
                    if let Some(body) = body {
                        let _ = body.class_list().remove_1(BODY_OPEN_CLASS);
                    }
                }
            },
            view.is_open(),
        );
    }

    let tabs = FILTERS.iter().map(|(value, label)| {
        let onclick = {
            let view = view.clone();
            Callback::from(move |_| {
                let mut next = (*view).clone();
                next.set_filter(value);
                view.set(next);
            })
        };
        html! {
            <button
                type="button"
                class={classes!(
                    "gallery-tab",
                    (view.filter() == *value).then_some("is-active")
                )}
                onclick={onclick}
            >
                { *label }
            </button>
        }
    });

    let visible = view.visible();
    let cards = if visible.is_empty() {
        html! { <p class="gallery-empty">{"New photos are coming soon."}</p> }
    } else {
        html! {
            { for visible.iter().enumerate().map(|(index, item)| {
                let item = **item;
                let onclick = {
                    let view = view.clone();
                    Callback::from(move |_| {
                        let mut next = (*view).clone();
                        next.open(index);
                        view.set(next);
                    })
                };
                html! {
                    <button type="button" class="gallery-card" onclick={onclick}>
                        <div class="gallery-card-image-wrapper">
                            <img
                                class="gallery-card-image"
                                src={item.thumb}
                                alt={item.alt}
                                loading="lazy"
                            />
                        </div>
                        <div class="gallery-card-meta">
                            <div class="gallery-card-title">{ item.caption }</div>
                            <div class="gallery-card-tag">
                                <span class="gallery-card-tag-dot"></span>
                                <span class="gallery-card-tag-label">{ item.category_label }</span>
                            </div>
                        </div>
                    </button>
                }
            }) }
        }
    };

    html! {
        <section id="gallery" class="gallery">
            <h2 class="section-heading">{"Gallery"}</h2>
            <div class="gallery-tabs">
                { for tabs }
            </div>
            <div class="gallery-grid">
                { cards }
            </div>
            { lightbox(&view) }
            <style>
                {r#"
                .gallery {
                    padding: 5rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .gallery-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }

                .gallery-tab {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 158, 44, 0.25);
                    background: none;
                    color: #bbb;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .gallery-tab:hover {
                    color: #fff;
                }

                .gallery-tab.is-active {
                    background: rgba(255, 158, 44, 0.15);
                    border-color: #FF9E2C;
                    color: #FFB95E;
                }

                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.25rem;
                }

                .gallery-empty {
                    color: #777;
                    font-style: italic;
                }

                .gallery-card {
                    padding: 0;
                    border: 1px solid rgba(255, 158, 44, 0.15);
                    border-radius: 12px;
                    background: rgba(26, 26, 26, 0.85);
                    overflow: hidden;
                    cursor: pointer;
                    text-align: left;
                    transition: all 0.3s ease;
                }

                .gallery-card:hover {
                    border-color: rgba(255, 158, 44, 0.4);
                    transform: translateY(-2px);
                }

                .gallery-card-image {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    display: block;
                }

                .gallery-card-meta {
                    padding: 0.8rem 1rem 1rem;
                }

                .gallery-card-title {
                    color: #ddd;
                    font-size: 0.95rem;
                }

                .gallery-card-tag {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    margin-top: 0.4rem;
                }

                .gallery-card-tag-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #FF9E2C;
                }

                .gallery-card-tag-label {
                    color: #999;
                    font-size: 0.8rem;
                }

                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .lightbox-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.85);
                }

                .lightbox-figure {
                    position: relative;
                    margin: 0;
                    max-width: min(85vw, 960px);
                }

                .lightbox-image {
                    width: 100%;
                    max-height: 80vh;
                    object-fit: contain;
                    border-radius: 8px;
                }

                .lightbox-caption {
                    margin-top: 0.75rem;
                    text-align: center;
                    color: #bbb;
                }

                .lightbox-prev,
                .lightbox-next,
                .lightbox-close {
                    position: absolute;
                    background: rgba(26, 26, 26, 0.8);
                    border: 1px solid rgba(255, 158, 44, 0.3);
                    border-radius: 50%;
                    width: 3rem;
                    height: 3rem;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .lightbox-prev:hover,
                .lightbox-next:hover,
                .lightbox-close:hover {
                    border-color: #FF9E2C;
                }

                .lightbox-prev {
                    left: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                }

                .lightbox-next {
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                }

                .lightbox-close {
                    top: 2rem;
                    right: 2rem;
                }

                body.is-lightbox-open {
                    overflow: hidden;
                }
                "#}
            </style>
        </section>
    }
}
