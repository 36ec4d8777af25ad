use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::films::FilmsSection;
use crate::components::gallery::GallerySection;
use crate::components::journey::StudioJourney;
use crate::components::reveal::Reveal;
use crate::components::scroll_link::ScrollLink;
use crate::components::stats::StatsSection;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="home-page">
            <section class="hero">
                <h1>{"Limelight"}</h1>
                <p class="hero-subtitle">
                    {"A theatre studio where children rehearse, perform and shoot \
                      their own films."}
                </p>
                <div class="hero-actions">
                    <ScrollLink target="journey" class="hero-button hero-button--primary">
                        {"Start the journey"}
                    </ScrollLink>
                    <ScrollLink target="films" class="hero-button">
                        {"Watch our films"}
                    </ScrollLink>
                </div>
            </section>

            <Reveal>
                <section id="about" class="about">
                    <h2 class="section-heading">{"About the studio"}</h2>
                    <p>
                        {"Limelight has been teaching children theatre for over a \
                          decade: stage speech, movement, improvisation and, above \
                          all, the nerve to stand in front of an audience. Groups \
                          are small and sorted by age, and every season ends with a \
                          full production on our own stage."}
                    </p>
                    <p>
                        {"The studio's film lab takes the same craft to the camera - \
                          students write and shoot short films that have been shown \
                          and awarded at youth film festivals."}
                    </p>
                </section>
            </Reveal>

            <Reveal>
                <StatsSection />
            </Reveal>

            <Reveal>
                <StudioJourney />
            </Reveal>

            <Reveal>
                <FilmsSection />
            </Reveal>

            <Reveal>
                <GallerySection />
            </Reveal>

            <Reveal>
                <Faq />
            </Reveal>

            <footer class="footer">
                <p>{"Limelight youth theatre studio"}</p>
                <p class="footer-note">{"Classes on weekdays from 4 pm · Main stage at 14 Garrick Lane"}</p>
            </footer>

            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #1a1a1a;
                }

                .section-heading {
                    font-size: 2.5rem;
                    margin: 0 0 2rem;
                    background: linear-gradient(45deg, #fff, #FFB95E);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .reveal-on-scroll {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .reveal-on-scroll.is-visible {
                    opacity: 1;
                    transform: none;
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal-on-scroll {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }

                .hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    background: radial-gradient(
                        ellipse at top,
                        rgba(255, 158, 44, 0.12),
                        transparent 60%
                    );
                }

                .hero h1 {
                    font-size: 4rem;
                    margin: 0 0 1rem;
                    background: linear-gradient(45deg, #fff, #FFB95E);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #999;
                    max-width: 560px;
                    margin: 0 auto 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .hero-button {
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 158, 44, 0.4);
                    color: #fff;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-button:hover {
                    border-color: #FF9E2C;
                }

                .hero-button--primary {
                    background: #FF9E2C;
                    border-color: #FF9E2C;
                    color: #1a1a1a;
                    font-weight: 600;
                }

                .hero-button--primary:hover {
                    background: #FFB95E;
                }

                .about {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .about p {
                    color: #bbb;
                    line-height: 1.8;
                    margin-bottom: 1.2rem;
                }

                .footer {
                    padding: 3rem 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(255, 158, 44, 0.15);
                    color: #ddd;
                }

                .footer-note {
                    color: #777;
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 5rem 1rem 4rem;
                    }

                    .hero h1 {
                        font-size: 2.8rem;
                    }

                    .section-heading {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
