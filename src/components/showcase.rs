use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::ShowcaseContent;
use crate::showcase::preload::Preloader;
use crate::showcase::state::{advance_period, LoadOutcome, ShowcaseAction, ShowcaseState};

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub content: ShowcaseContent,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let content = &props.content;
    let state = {
        let len = content.images.len();
        use_reducer_eq(move || ShowcaseState::new(len))
    };
    let generation = use_mut_ref(|| 0u64);

    // Preload every image; a new list starts a new generation
    {
        let state = state.clone();
        use_effect_with_deps(
            move |images: &Vec<String>| {
                let current = {
                    let mut generation = generation.borrow_mut();
                    *generation += 1;
                    *generation
                };
                state.dispatch(ShowcaseAction::Reset {
                    generation: current,
                    len: images.len(),
                });

                let on_settled = {
                    let state = state.clone();
                    Callback::from(move |(index, outcome): (usize, LoadOutcome)| {
                        state.dispatch(ShowcaseAction::Settled {
                            generation: current,
                            index,
                            outcome,
                        });
                    })
                };

                let preloader = match Preloader::start(images, on_settled) {
                    Ok(preloader) => Some(preloader),
                    Err(err) => {
                        gloo_console::error!("Failed to start image preload:", err.to_string());
                        None
                    }
                };

                move || drop(preloader)
            },
            content.images.clone(),
        );
    }

    // Auto-advance only while every image is in
    {
        let deps = state.timer_key();
        let state = state.clone();
        use_effect_with_deps(
            move |&(armed, len): &(bool, usize)| {
                let interval = advance_period(armed, len).map(|period| {
                    Interval::new(period, move || {
                        state.dispatch(ShowcaseAction::Tick);
                    })
                });

                move || drop(interval)
            },
            deps,
        );
    }

    let displayed = state
        .displayed_index()
        .and_then(|index| content.images.get(index).map(|src| (index, src.clone())));

    html! {
        <section id="projects" class="showcase">
            <div class="showcase-inner">
                <div class="showcase-heading">
                    <div class="showcase-brand">
                        <img src={content.logo.clone()} alt={format!("{} Logo", content.title)} class="showcase-logo" />
                        <h2>{content.title.clone()}</h2>
                    </div>
                    <p class="showcase-tagline">{content.tagline.clone()}</p>
                    <div class="showcase-actions">
                        <a href={content.app_store_url.clone()} class="store-button">
                            {"Download on the App Store"}
                        </a>
                        <a href={content.learn_more_url.clone()} class="learn-more-button">
                            {"Learn More"}
                            <span class="learn-more-arrow">{"↗"}</span>
                        </a>
                    </div>
                </div>

                <div class="showcase-grid">
                    <div class="feature-list">
                        { for content.features.iter().map(|feature| html! {
                            <div class="feature-card">
                                <h3>{feature.title.clone()}</h3>
                                <p>{feature.body.clone()}</p>
                            </div>
                        }) }
                    </div>

                    <div class="showcase-frame">
                        {
                            if state.shows_indicator() {
                                html! {
                                    <div class="showcase-loading">
                                        <div class="spinner"></div>
                                        <span>{state.loading_label()}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        {
                            match displayed {
                                Some((index, src)) => html! {
                                    <img
                                        key={format!("{}-{}", src, index)}
                                        class="showcase-image"
                                        src={src}
                                        alt={format!("{} demo {}", content.title, index + 1)}
                                        loading="eager"
                                        decoding="async"
                                    />
                                },
                                None => html! {},
                            }
                        }
                        {
                            if state.shows_dots() {
                                html! {
                                    <div class="carousel-dots">
                                        { for state.dots().map(|(index, is_current)| html! {
                                            <div
                                                key={index}
                                                class={classes!("carousel-dot", is_current.then(|| "active"))}
                                            />
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .showcase {
                    padding: 6rem 0;
                    background: #000;
                    color: #fff;
                }
                .showcase-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .showcase-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .showcase-brand {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .showcase-logo {
                    width: 3rem;
                    height: 3rem;
                }
                .showcase-brand h2 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin: 0;
                }
                .showcase-tagline {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    line-height: 1.6;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .showcase-actions {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                }
                .store-button, .learn-more-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: all 0.5s ease-out;
                }
                .store-button {
                    background: #fff;
                    color: #000;
                    font-weight: 600;
                }
                .store-button:hover {
                    background: #e2e8f0;
                    transform: scale(1.05);
                }
                .learn-more-button {
                    border: 1px solid #334155;
                    color: #cbd5e1;
                }
                .learn-more-button:hover {
                    color: #fff;
                    border-color: #64748b;
                    transform: scale(1.05);
                }
                .showcase-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }
                .feature-list {
                    display: grid;
                    gap: 1.5rem;
                }
                .feature-card {
                    background: rgba(30, 41, 59, 0.3);
                    border: 1px solid rgba(51, 65, 85, 0.3);
                    border-radius: 16px;
                    padding: 1.5rem;
                    transition: border-color 0.3s ease;
                }
                .feature-card:hover {
                    border-color: rgba(71, 85, 105, 0.5);
                }
                .feature-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }
                .feature-card p {
                    color: #cbd5e1;
                    margin: 0;
                }
                .showcase-frame {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    height: 650px;
                    margin: 0 auto;
                    overflow: hidden;
                }
                .showcase-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    color: #94a3b8;
                    background: rgba(30, 41, 59, 0.3);
                    border-radius: 16px;
                }
                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid #475569;
                    border-top-color: #94a3b8;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                @keyframes showcaseIn {
                    from { opacity: 0; transform: translateY(30px) scale(0.98); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                .showcase-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    animation: showcaseIn 0.4s ease-in-out;
                    transform: translateZ(0);
                    backface-visibility: hidden;
                }
                .carousel-dots {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                    transition: all 0.3s ease;
                }
                .carousel-dot.active {
                    background: #fff;
                    transform: scale(1.25);
                }
                @media (min-width: 1024px) {
                    .showcase-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .showcase-frame {
                        margin: 0;
                    }
                }
                @media (max-width: 768px) {
                    .showcase-brand h2 {
                        font-size: 3rem;
                    }
                    .showcase-tagline {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
