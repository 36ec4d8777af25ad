use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

/// One question/answer pair. Every item toggles on its own; several can
/// be open at the same time.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={if *is_open { "true" } else { "false" }}
                onclick={toggle}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-heading">{"Frequently asked questions"}</h2>

            <FaqItem question="From what age do you take students?">
                <p>
                    {"Our youngest group starts at six. What matters is not age but \
                      whether a child enjoys playing together - the trial class is \
                      exactly for finding that out."}
                </p>
            </FaqItem>

            <FaqItem question="Does my child need acting experience?">
                <p>
                    {"No. Every group starts from theatre games and exercises; the \
                      craft grows out of play. Children who join mid-year catch up \
                      within a few weeks."}
                </p>
            </FaqItem>

            <FaqItem question="How often are classes and how long do they run?">
                <p>
                    {"Twice a week, 90 minutes each. In the months before a premiere \
                      the production group adds one weekend rehearsal."}
                </p>
            </FaqItem>

            <FaqItem question="Do all students get on stage?">
                <p>
                    {"Yes. Every production is cast so that each student has a named \
                      part - we split shows into two casts rather than leave anyone \
                      in the wings."}
                </p>
            </FaqItem>

            <FaqItem question="What is the film lab?">
                <p>
                    {"Older students write and shoot short films with our teachers \
                      and a camera crew. Several of those films have travelled to \
                      festivals - you can watch them in the filmography above."}
                </p>
            </FaqItem>

            <FaqItem question="How do we join?">
                <p>
                    {"Book a free trial class by phone or just come by the studio \
                      before the evening groups start. After the trial we suggest a \
                      group that fits your child's age."}
                </p>
            </FaqItem>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 158, 44, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(255, 158, 44, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: all 0.3s ease;
                }

                .faq-question:hover {
                    color: #FFB95E;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #FFB95E;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 2000px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 3rem 1rem;
                    }

                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
