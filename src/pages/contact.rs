use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component]
pub fn Contact() -> Html {
    html! {
        <div class="contact" style="max-width: 640px; margin: 0 auto; text-align: center;">
            <h1 style="color: #d6336c;">{"Contact"}</h1>
            <p style="color: #5b4450;">
                {"Questions, ideas, or a story you want turned into a page? Write to "}
                <a href="mailto:hello@promposal.studio" style="color: #d6336c;">{"hello@promposal.studio"}</a>
                {"."}
            </p>
            <p style="color: #8a6f7c;">
                {"Ready to go? "}
                <Link<Route> to={Route::Booking}>{"Request a slot"}</Link<Route>>
            </p>
        </div>
    }
}

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found" style="text-align: center; padding: 4rem 1rem;">
            <h1 style="color: #d6336c;">{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
        </div>
    }
}
