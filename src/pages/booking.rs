use yew::prelude::*;
use crate::components::request_slot::RequestSlot;

#[function_component]
pub fn Booking() -> Html {
    html! {
        <div class="booking">
            <style>
                {r#"
                    .booking {
                        max-width: 640px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .booking h1 {
                        color: #d6336c;
                    }
                    .booking ol {
                        text-align: left;
                        color: #5b4450;
                        line-height: 1.7;
                    }
                    .request-slot {
                        margin-top: 1.5rem;
                        padding: 0.8rem 2rem;
                        font-size: 1.1rem;
                        border: none;
                        border-radius: 999px;
                        background: #d6336c;
                        color: #fff;
                        cursor: pointer;
                    }
                "#}
            </style>
            <h1>{"Book a custom page"}</h1>
            <p>{"Want something made just for your person? Grab a short call with us."}</p>
            <ol>
                <li>{"Calls happen on weekdays between 09:00 and 17:00."}</li>
                <li>{"Bring a few details: names, inside jokes, the big date."}</li>
                <li>{"We email you a preview link once the page is ready."}</li>
            </ol>
            <RequestSlot />
        </div>
    }
}
