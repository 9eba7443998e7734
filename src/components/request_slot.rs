use yew::prelude::*;
use web_sys::MouseEvent;
use log::{info, warn};
use crate::config::REQUEST_CONFIRMATION;
use crate::dom;

// Placeholder, nothing is sent
#[function_component(RequestSlot)]
pub fn request_slot() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        info!("Booking requested");
        if let Err(e) = dom::alert(REQUEST_CONFIRMATION) {
            warn!("Could not show booking confirmation: {}", e);
        }
    });

    html! {
        <button id="request-slot" class="request-slot" {onclick}>
            {"Request a slot"}
        </button>
    }
}
