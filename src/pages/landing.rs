use log::info;
use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::showcase::Showcase;
use crate::components::team::Team;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: SiteContent,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    info!("Rendering Landing page");

    html! {
        <>
            <Navbar brand={content.brand.clone()} links={content.nav.clone()} />
            <main class="landing-main">
                <Showcase content={content.showcase.clone()} />
                <Team people={content.team.clone()} />
            </main>
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #000;
                }
                .landing-main {
                    padding-top: 4rem;
                }
                section[id] {
                    scroll-margin-top: 4rem;
                }
                "#}
            </style>
        </>
    }
}
