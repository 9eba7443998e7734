use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod state {
    pub mod preview;
    pub mod promposal;
    pub mod sidebar;
    pub mod year;
}
mod components {
    pub mod footer;
    pub mod request_slot;
    pub mod site_chrome;
    pub mod video_card;
}
mod pages {
    pub mod booking;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod promposal;
}

use components::site_chrome::SiteChrome;
use pages::{
    booking::Booking,
    contact::{Contact, NotFound},
    home::Home,
    legal::{PrivacyPage, TermsPage},
    promposal::PromposalPage,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/promposal")]
    Promposal,
    #[at("/booking")]
    Booking,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Promposal => {
            info!("Rendering Promposal page");
            // Standalone page, no menu or footer
            return html! { <PromposalPage /> };
        },
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsPage /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    };

    html! {
        <SiteChrome>
            {page}
        </SiteChrome>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
