use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NavLink;
use crate::navigation::{activate_link, MenuAction, MenuState, NavigatorHandle};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: String,
    pub links: Vec<NavLink>,
    #[prop_or_default]
    pub navigator: NavigatorHandle,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu = use_reducer_eq(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Close);
        })
    };

    let nav_link = |link: &NavLink, class: &'static str| {
        let onclick = {
            let menu = menu.clone();
            let navigator = props.navigator.clone();
            let anchor = link.anchor.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu.dispatch(activate_link(&*navigator.0, &anchor));
            })
        };
        html! {
            <a href={format!("/#{}", link.anchor)} class={class} {onclick}>
                {link.label.clone()}
            </a>
        }
    };

    html! {
        <header class="site-header">
            <div class="site-header-content">
                <a href="/" class="nav-logo">{props.brand.clone()}</a>

                <nav class="nav-links">
                    { for props.links.iter().map(|link| nav_link(link, "nav-link")) }
                </nav>

                <button class="burger-menu" aria-label="Open menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if menu.open {
                    html! {
                        <>
                            <div class="nav-backdrop" onclick={close_menu}></div>
                            <nav class="nav-dropdown">
                                { for props.links.iter().map(|link| html! {
                                    <div class="nav-dropdown-item">
                                        { nav_link(link, "nav-link nav-link-block") }
                                    </div>
                                }) }
                            </nav>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(250, 248, 242, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(100, 116, 139, 0.2);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .site-header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #0f172a;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    position: relative;
                    color: #64748b;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .nav-link:hover {
                    color: #0f172a;
                    transform: translateY(-1px);
                }
                .nav-link::after {
                    content: '';
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 2px;
                    width: 0;
                    background: #3b82f6;
                    transition: width 0.2s ease;
                }
                .nav-link:hover::after {
                    width: 100%;
                }
                .nav-link-block {
                    display: block;
                    font-size: 1rem;
                    font-weight: 500;
                    padding: 0.25rem 0;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #0f172a;
                }
                .nav-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                }
                .nav-dropdown {
                    position: absolute;
                    right: 1rem;
                    width: calc(100vw - 2rem);
                    margin-top: 0.5rem;
                    display: flex;
                    flex-direction: column;
                    background: rgba(250, 248, 242, 0.95);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(100, 116, 139, 0.2);
                    border-radius: 8px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .nav-dropdown-item {
                    padding: 0.75rem 1rem;
                    border-bottom: 1px solid rgba(100, 116, 139, 0.1);
                }
                .nav-dropdown-item:last-child {
                    border-bottom: none;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                @media (min-width: 769px) {
                    .nav-dropdown, .nav-backdrop {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
