use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};
use log::debug;
use crate::Route;
use crate::components::footer::Footer;
use crate::state::sidebar::SidebarState;

#[derive(Properties, PartialEq)]
pub struct SiteChromeProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SiteChrome)]
pub fn site_chrome(props: &SiteChromeProps) -> Html {
    let sidebar = use_state(SidebarState::default);

    {
        let sidebar = sidebar.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                sidebar.set((*sidebar).closed());
            }
        });
    }

    let toggle_menu = {
        let sidebar = sidebar.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = sidebar.toggled();
            debug!("Sidebar {:?} -> {:?}", *sidebar, next);
            sidebar.set(next);
        })
    };

    let close_menu = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| {
            sidebar.set((*sidebar).closed());
        })
    };

    let view = sidebar.view();

    html! {
        <>
            <style>{CHROME_CSS}</style>
            <header class="site-header">
                <button
                    id="menu-toggle"
                    class={view.toggle_class}
                    aria-label="Open menu"
                    aria-controls="sidebar"
                    aria-expanded={view.aria_expanded}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <Link<Route> to={Route::Home} classes="site-logo">
                    {"Promposal Studio"}
                </Link<Route>>
            </header>

            <aside id="sidebar" class={view.sidebar_class} aria-hidden={view.aria_hidden}>
                <button id="menu-close" class="menu-close" aria-label="Close menu" onclick={close_menu.clone()}>
                    {"×"}
                </button>
                <nav class="sidebar-links">
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="sidebar-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Promposal} classes="sidebar-link">{"Promposal"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Booking} classes="sidebar-link">{"Book a custom page"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="sidebar-link">{"Contact"}</Link<Route>>
                    </div>
                </nav>
            </aside>
            <div id="backdrop" class={view.backdrop_class} onclick={close_menu}></div>

            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
        </>
    }
}

const CHROME_CSS: &str = r#"
    body {
        margin: 0;
        background: #fff5f8;
        color: #3a2a33;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .site-header {
        position: sticky;
        top: 0;
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1rem 1.5rem;
        background: rgba(255, 245, 248, 0.9);
        backdrop-filter: blur(8px);
        z-index: 20;
    }
    .site-logo {
        color: #d6336c;
        font-weight: bold;
        font-size: 1.3rem;
        text-decoration: none;
    }
    .menu-toggle {
        display: flex;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.25rem;
    }
    .menu-toggle span {
        width: 24px;
        height: 3px;
        background: #d6336c;
        border-radius: 2px;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .menu-toggle.active span:nth-child(1) {
        transform: translateY(8px) rotate(45deg);
    }
    .menu-toggle.active span:nth-child(2) {
        opacity: 0;
    }
    .menu-toggle.active span:nth-child(3) {
        transform: translateY(-8px) rotate(-45deg);
    }
    .sidebar {
        position: fixed;
        top: 0;
        left: 0;
        height: 100vh;
        width: 260px;
        background: #fff;
        box-shadow: 4px 0 24px rgba(0, 0, 0, 0.15);
        transform: translateX(-100%);
        transition: transform 0.3s ease;
        z-index: 40;
        padding: 1.5rem;
        box-sizing: border-box;
    }
    .sidebar.open {
        transform: translateX(0);
    }
    .menu-close {
        background: none;
        border: none;
        font-size: 2rem;
        cursor: pointer;
        color: #d6336c;
        float: right;
    }
    .sidebar-links {
        clear: both;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding-top: 1rem;
    }
    .sidebar-link {
        color: #3a2a33;
        text-decoration: none;
        font-size: 1.1rem;
    }
    .sidebar-link:hover {
        color: #d6336c;
    }
    .backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        z-index: 30;
    }
    .backdrop.show {
        opacity: 1;
        pointer-events: auto;
    }
    .site-main {
        min-height: 70vh;
        padding: 2rem 1.5rem;
        max-width: 1100px;
        margin: 0 auto;
    }
"#;
