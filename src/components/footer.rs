use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::state::year::current_year;

#[function_component(Footer)]
pub fn footer() -> Html {
    // Stamped once on mount
    let year = use_state(current_year);

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        text-align: center;
                        padding: 2rem 1rem;
                        color: #8a6f7c;
                        font-size: 0.9rem;
                    }
                    .site-footer nav {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 0.5rem;
                    }
                    .site-footer a {
                        color: #d6336c;
                        text-decoration: none;
                    }
                "#}
            </style>
            <p>{"© "}<span id="year">{*year}</span>{" Promposal Studio"}</p>
            <nav>
                <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
            </nav>
        </footer>
    }
}
