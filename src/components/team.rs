use yew::prelude::*;

use crate::content::Person;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub people: Vec<Person>,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    html! {
        <section id="team" class="team-section">
            <div class="team-inner">
                <h2 class="team-title">{"Meet the Team"}</h2>
                <div class="team-grid">
                    { for props.people.iter().map(|person| html! {
                        <div class="team-card">
                            <div class="team-card-body">
                                <h3>{person.name.clone()}</h3>
                                <p class="team-role">{person.role.clone()}</p>
                                <p class="team-bio">{person.bio.clone()}</p>
                            </div>
                            <div class="team-links">
                                { for person.links.iter().map(|link| html! {
                                    <a
                                        href={link.url.clone()}
                                        class="team-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label={format!("{} on {}", person.name, link.platform.label())}
                                    >
                                        {link.platform.label()}
                                    </a>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .team-section {
                    position: relative;
                    padding: 6rem 0;
                    background-color: #020617;
                    background-image: radial-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                    background-size: 60px 60px;
                }
                .team-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .team-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #fff;
                    text-align: center;
                    letter-spacing: -0.025em;
                    margin: 0 0 4rem;
                }
                .team-grid {
                    display: grid;
                    gap: 2rem;
                }
                .team-card {
                    display: flex;
                    flex-direction: column;
                    background: rgba(30, 41, 59, 0.3);
                    border: 1px solid rgba(51, 65, 85, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    transition: all 0.3s ease;
                }
                .team-card:hover {
                    border-color: rgba(71, 85, 105, 0.5);
                    transform: scale(1.05);
                }
                .team-card-body {
                    flex-grow: 1;
                }
                .team-card h3 {
                    font-size: 1.25rem;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .team-role {
                    font-weight: 500;
                    margin: 0 0 1rem;
                    background: linear-gradient(to right, #60a5fa, #c084fc);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .team-bio {
                    color: #d1d5db;
                    line-height: 1.6;
                }
                .team-links {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .team-link {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .team-link:hover {
                    color: #fff;
                }
                @media (min-width: 768px) {
                    .team-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
