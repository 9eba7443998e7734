use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config::{self, CARDS};
use crate::components::video_card::VideoCard;

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class="home">
            <style>
                {r#"
                    .hero {
                        text-align: center;
                        padding: 3rem 1rem;
                    }
                    .hero h1 {
                        color: #d6336c;
                        font-size: 2.6rem;
                        margin-bottom: 0.5rem;
                    }
                    .hero p {
                        color: #8a6f7c;
                        font-size: 1.15rem;
                    }
                    .hero-actions {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .hero-actions a {
                        padding: 0.7rem 1.6rem;
                        border-radius: 999px;
                        text-decoration: none;
                        background: #d6336c;
                        color: #fff;
                    }
                    .hero-actions a.secondary {
                        background: #fff;
                        color: #d6336c;
                        border: 2px solid #d6336c;
                    }
                    .cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .card {
                        background: #fff;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 8px 24px rgba(214, 51, 108, 0.12);
                    }
                    .thumb {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        background: #ffe3ec;
                    }
                    .thumb img,
                    .thumb .card-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .card-body {
                        padding: 1rem 1.2rem;
                    }
                    .card-body h3 {
                        margin: 0 0 0.4rem 0;
                        color: #3a2a33;
                    }
                    .card-body p {
                        margin: 0;
                        color: #8a6f7c;
                    }
                "#}
            </style>
            <section class="hero">
                <h1>{"Ask them the fun way"}</h1>
                <p>{"Tiny interactive pages for big questions."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Promposal}>{"Try the promposal"}</Link<Route>>
                    <Link<Route> to={Route::Booking} classes="secondary">{"Book a custom page"}</Link<Route>>
                </div>
            </section>
            <section class="cards">
                {
                    CARDS.iter().map(|card| {
                        html! {
                            <VideoCard
                                key={card.video}
                                title={card.title}
                                caption={card.caption}
                                poster={config::asset_url(card.poster)}
                                video={config::asset_url(card.video)}
                            />
                        }
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}
