use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod navigation;
mod showcase {
    pub mod preload;
    pub mod state;
}
mod components {
    pub mod navbar;
    pub mod showcase;
    pub mod team;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| content::load(), ());

    match &*content {
        Ok(content) => html! {
            <Landing content={content.clone()} />
        },
        Err(err) => {
            error!("Could not load site content: {}", err);
            html! {
                <div class="content-error">
                    {"This page could not be loaded. Please try again later."}
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
