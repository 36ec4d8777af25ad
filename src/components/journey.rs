use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::state::journey::{initial_index, JourneyStep};

const STEPS: &[JourneyStep] = &[
    JourneyStep {
        title: "First visit",
        text: "A free trial class: games, a tour of the stage and a chat with \
               the teachers. No audition, no pressure - we watch how a child \
               plays, not how they perform.",
        start_active: true,
    },
    JourneyStep {
        title: "Foundation year",
        text: "Weekly classes in stage speech, movement and improvisation. \
               Small groups sorted by age, so nobody hides in the back row.",
        start_active: false,
    },
    JourneyStep {
        title: "Rehearsal room",
        text: "Work on a real production: read-throughs, blocking, costume \
               fittings and the slow magic of a show taking shape.",
        start_active: false,
    },
    JourneyStep {
        title: "Opening night",
        text: "A full performance on our main stage in front of family and a \
               paying audience. Stage fright included, free of charge.",
        start_active: false,
    },
    JourneyStep {
        title: "Film lab",
        text: "Older students join the studio's short-film crew - writing, \
               acting and shooting the films you can see in our filmography.",
        start_active: false,
    },
];

/// Single-selection list of studio milestones; choosing a step fills the
/// detail panel beside it. Exactly one step is active at any time.
#[function_component(StudioJourney)]
pub fn studio_journey() -> Html {
    let active = use_state(|| initial_index(STEPS));
    let detail = STEPS[*active];

    let steps = STEPS.iter().enumerate().map(|(index, step)| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_| active.set(index))
        };
        let onkeydown = {
            let active = active.clone();
            Callback::from(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Enter" || key == " " || key == "Spacebar" {
                    event.prevent_default();
                    active.set(index);
                }
            })
        };
        html! {
            <li>
                <button
                    type="button"
                    class={classes!(
                        "journey-step",
                        (index == *active).then_some("is-active")
                    )}
                    onclick={onclick}
                    onkeydown={onkeydown}
                >
                    <span class="journey-step-index">{ index + 1 }</span>
                    <span class="journey-step-title">{ step.title }</span>
                </button>
            </li>
        }
    });

    html! {
        <section id="journey" class="journey">
            <h2 class="section-heading">{"A student's journey"}</h2>
            <div class="journey-layout">
                <ul class="journey-steps">
                    { for steps }
                </ul>
                <div class="journey-detail">
                    <h3 class="journey-detail-title">{ detail.title }</h3>
                    <p class="journey-detail-text">{ detail.text }</p>
                </div>
            </div>
            <style>
                {r#"
                .journey {
                    padding: 5rem 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .journey-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 2rem;
                    align-items: start;
                }

                .journey-steps {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .journey-step {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 158, 44, 0.15);
                    border-radius: 12px;
                    color: #ddd;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .journey-step:hover {
                    border-color: rgba(255, 158, 44, 0.4);
                }

                .journey-step.is-active {
                    border-color: #FF9E2C;
                    color: #fff;
                }

                .journey-step-index {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: rgba(255, 158, 44, 0.15);
                    color: #FFB95E;
                    font-weight: 600;
                    flex-shrink: 0;
                }

                .journey-detail {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 158, 44, 0.15);
                    border-radius: 12px;
                    padding: 2rem;
                    min-height: 14rem;
                }

                .journey-detail-title {
                    margin: 0 0 1rem;
                    font-size: 1.6rem;
                    color: #FFB95E;
                }

                .journey-detail-text {
                    margin: 0;
                    color: #bbb;
                    line-height: 1.7;
                }

                @media (max-width: 768px) {
                    .journey-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
