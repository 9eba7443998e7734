use yew::prelude::*;
use web_sys::js_sys::Math;
use web_sys::MouseEvent;
use log::{debug, info};
use crate::state::promposal::PromposalState;

#[function_component]
pub fn PromposalPage() -> Html {
    let state = use_state(PromposalState::default);

    let on_yes = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.accept();
            info!("Promposal answered: {:?}", next.answer());
            state.set(next);
        })
    };

    let on_no_hover = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.evade(Math::random(), Math::random());
            debug!("No button moved to {:?}", next.offset());
            state.set(next);
        })
    };

    let on_no = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.decline();
            info!("Promposal answered: {:?}", next.answer());
            state.set(next);
        })
    };

    let hidden = if state.buttons_visible() { "" } else { " display: none;" };
    let yes_style = hidden.trim_start().to_string();
    let no_style = format!("transform: {};{}", state.offset().transform(), hidden);

    html! {
        <div class="promposal">
            <style>
                {r#"
                    .promposal {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #ffe3ec, #ffd6e8);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow: hidden;
                    }
                    .promposal .message {
                        color: #d6336c;
                        font-size: 2.2rem;
                        text-align: center;
                        margin-bottom: 2rem;
                        padding: 0 1rem;
                    }
                    .promposal .buttons {
                        display: flex;
                        gap: 2rem;
                    }
                    .promposal button {
                        font-size: 1.2rem;
                        padding: 0.8rem 2.2rem;
                        border: none;
                        border-radius: 999px;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    #yesBtn {
                        background: #d6336c;
                        color: #fff;
                    }
                    #noBtn {
                        background: #fff;
                        color: #d6336c;
                        border: 2px solid #d6336c;
                    }
                "#}
            </style>
            <h1 class="message">{state.message()}</h1>
            <div class="buttons">
                <button id="yesBtn" style={yes_style} onclick={on_yes}>{"Yes 💖"}</button>
                <button id="noBtn" style={no_style} onmouseover={on_no_hover} onclick={on_no}>{"No 🙈"}</button>
            </div>
        </div>
    }
}
