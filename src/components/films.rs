use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::state::films::{FilmRecord, FilmShelf};

#[derive(Clone, PartialEq)]
enum FilmsPhase {
    Loading,
    Ready(FilmShelf),
    /// The archive could not be loaded; the section stays inert.
    Failed,
}

fn film_card(film: &FilmRecord, shelf: &FilmShelf, on_select: &Callback<String>) -> Html {
    let (awards, extra) = film.card_awards();
    let onclick = {
        let on_select = on_select.clone();
        let id = film.id.clone();
        Callback::from(move |_| on_select.emit(id.clone()))
    };

    html! {
        <button
            type="button"
            class={classes!(
                "films-card",
                shelf.is_active(&film.id).then_some("films-card--active")
            )}
            onclick={onclick}
        >
            <div class="films-card-poster">
                <div class="films-card-poster-inner">{ film.poster_initial() }</div>
            </div>
            <div class="films-card-main">
                <h4 class="films-card-title">{ &film.title }</h4>
                <p class="films-card-meta">{ film.meta_line() }</p>
                <p class="films-card-logline">{ film.logline.clone().unwrap_or_default() }</p>
                <div class="films-card-awards">
                    { for awards.iter().map(|award| html! {
                        <span class="films-card-award-pill">{ award.pill() }</span>
                    }) }
                    if extra > 0 {
                        <span class="films-card-award-pill films-card-award-pill--more">
                            { format!("+{extra} festivals") }
                        </span>
                    }
                </div>
            </div>
        </button>
    }
}

fn film_detail(film: &FilmRecord) -> Html {
    html! {
        <div class="films-detail">
            <h3 class="films-detail-title">{ &film.title }</h3>
            <p class="films-detail-meta">{ film.meta_line() }</p>
            <div class="films-detail-authors">
                { for film.credit_lines().into_iter().map(|line| html! {
                    <span class="films-detail-author">{ line }</span>
                }) }
            </div>
            <p class="films-detail-synopsis">{ film.synopsis.clone().unwrap_or_default() }</p>
            <ul class="films-detail-awards">
                {
                    if film.awards.is_empty() {
                        html! {
                            <li class="films-detail-award films-detail-award--empty">
                                {"Awards will be added later."}
                            </li>
                        }
                    } else {
                        html! {
                            { for film.awards.iter().map(|award| html! {
                                <li class="films-detail-award">{ award.line() }</li>
                            }) }
                        }
                    }
                }
            </ul>
            <div class="films-video">
                {
                    if let Some(embed) = &film.video_embed_url {
                        html! {
                            <iframe
                                src={embed.clone()}
                                frameborder="0"
                                allowfullscreen={true}
                                loading="lazy"
                            />
                        }
                    } else {
                        html! {
                            <div class="films-video-placeholder">{"Video coming soon"}</div>
                        }
                    }
                }
            </div>
            if let Some(url) = film.watch_url() {
                <a
                    class="films-detail-link"
                    href={url.to_string()}
                    target="_blank"
                    rel="noopener"
                >
                    {"Watch on the film page"}
                </a>
            }
        </div>
    }
}

/// "Films and awards" block. Loads the film archive once; a failed load
/// is logged and leaves the section inert, with no retry and no
/// user-facing error state.
#[function_component(FilmsSection)]
pub fn films_section() -> Html {
    let phase = use_state(|| FilmsPhase::Loading);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let films = match Request::get(config::films_data_url()).send().await {
                        Ok(response) if response.ok() => {
                            match response.json::<Vec<FilmRecord>>().await {
                                Ok(films) => Some(films),
                                Err(err) => {
                                    log::error!("failed to decode film data: {err}");
                                    None
                                }
                            }
                        }
                        Ok(response) => {
                            log::error!("failed to load film data: HTTP {}", response.status());
                            None
                        }
                        Err(err) => {
                            log::error!("failed to load film data: {err}");
                            None
                        }
                    };
                    match films.and_then(FilmShelf::new) {
                        Some(shelf) => phase.set(FilmsPhase::Ready(shelf)),
                        None => phase.set(FilmsPhase::Failed),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_select = {
        let phase = phase.clone();
        Callback::from(move |id: String| {
            if let FilmsPhase::Ready(shelf) = &*phase {
                let mut next = shelf.clone();
                // Clicking the active card changes nothing, so skip the write.
                if next.select(&id) {
                    phase.set(FilmsPhase::Ready(next));
                }
            }
        })
    };

    let body = match &*phase {
        FilmsPhase::Ready(shelf) => html! {
            <div class="films-layout">
                <div class="films-carousel">
                    { for shelf.films().iter().map(|film| film_card(film, shelf, &on_select)) }
                </div>
                { film_detail(shelf.active()) }
            </div>
        },
        FilmsPhase::Loading | FilmsPhase::Failed => html! {},
    };

    html! {
        <section id="films" class="films">
            <h2 class="section-heading">{"Films and awards"}</h2>
            <p class="films-intro">
                {"Short films written, acted and shot by the studio's film lab, \
                  and the festivals that noticed them."}
            </p>
            { body }
            <style>
                {r#"
                .films {
                    padding: 5rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .films-intro {
                    color: #999;
                    max-width: 640px;
                    margin: 0 0 2.5rem;
                }

                .films-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.3fr;
                    gap: 2rem;
                    align-items: start;
                }

                .films-carousel {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .films-card {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 158, 44, 0.15);
                    border-radius: 12px;
                    color: #ddd;
                    text-align: left;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .films-card:hover {
                    border-color: rgba(255, 158, 44, 0.4);
                }

                .films-card--active {
                    border-color: #FF9E2C;
                }

                .films-card-poster {
                    flex-shrink: 0;
                    width: 64px;
                    height: 88px;
                    border-radius: 8px;
                    background: linear-gradient(160deg, #2b2216, #1a1a1a);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .films-card-poster-inner {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #FFB95E;
                }

                .films-card-title {
                    margin: 0;
                    font-size: 1.15rem;
                    color: #fff;
                }

                .films-card-meta {
                    margin: 0.25rem 0;
                    color: #999;
                    font-size: 0.9rem;
                }

                .films-card-logline {
                    margin: 0.25rem 0;
                    color: #bbb;
                    font-size: 0.95rem;
                }

                .films-card-awards {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                    margin-top: 0.5rem;
                }

                .films-card-award-pill {
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    background: rgba(255, 158, 44, 0.12);
                    color: #FFB95E;
                    font-size: 0.8rem;
                }

                .films-card-award-pill--more {
                    background: none;
                    border: 1px dashed rgba(255, 158, 44, 0.4);
                }

                .films-detail {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 158, 44, 0.15);
                    border-radius: 12px;
                    padding: 2rem;
                }

                .films-detail-title {
                    margin: 0;
                    font-size: 1.8rem;
                    color: #fff;
                }

                .films-detail-meta {
                    margin: 0.5rem 0 1rem;
                    color: #999;
                }

                .films-detail-authors {
                    display: flex;
                    flex-direction: column;
                    gap: 0.3rem;
                    margin-bottom: 1rem;
                }

                .films-detail-author {
                    color: #bbb;
                    font-size: 0.95rem;
                }

                .films-detail-synopsis {
                    color: #ddd;
                    line-height: 1.7;
                }

                .films-detail-awards {
                    list-style: none;
                    margin: 1rem 0;
                    padding: 0;
                }

                .films-detail-award {
                    color: #FFB95E;
                    padding: 0.35rem 0;
                    border-bottom: 1px solid rgba(255, 158, 44, 0.1);
                    font-size: 0.95rem;
                }

                .films-detail-award--empty {
                    color: #777;
                    border-bottom: none;
                }

                .films-video iframe,
                .films-video-placeholder {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border: none;
                    border-radius: 8px;
                }

                .films-video-placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.3);
                    color: #777;
                }

                .films-detail-link {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #FF9E2C;
                    text-decoration: none;
                }

                .films-detail-link:hover {
                    color: #FFB95E;
                }

                @media (max-width: 768px) {
                    .films-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
