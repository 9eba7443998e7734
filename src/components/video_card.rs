use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use log::{debug, warn};
use crate::dom::{self, DomError};
use crate::state::preview::{HoverPreview, PreviewAction};

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub title: AttrValue,
    pub caption: AttrValue,
    pub poster: AttrValue,
    pub video: AttrValue,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video_ref = use_node_ref();
    let preview = use_mut_ref(HoverPreview::default);
    let redraw = use_force_update();

    // The muted attribute alone does not mute an element created by script
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(move |_| {
            match dom::video(&video_ref, "card-video") {
                Ok(video) => video.set_muted(true),
                Err(e) => warn!("Preview setup skipped: {}", e),
            }
            || ()
        }, ());
    }

    let on_enter = {
        let video_ref = video_ref.clone();
        let preview = preview.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let ticket = preview.borrow_mut().enter();
            redraw.force_update();

            let video = match dom::video(&video_ref, "card-video") {
                Ok(video) => video,
                Err(e) => {
                    warn!("Cannot start preview: {}", e);
                    return;
                }
            };
            let promise = match video.play() {
                Ok(promise) => promise,
                Err(e) => {
                    debug!("Preview play() threw: {}", DomError::from(e));
                    return;
                }
            };

            let preview = preview.clone();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    debug!("Preview playback did not start: {}", DomError::from(e));
                    return;
                }
                // Pointer left before playback began
                if preview.borrow().should_stop(ticket) {
                    if let Err(e) = dom::rewind(&video) {
                        warn!("Could not stop stale preview: {}", e);
                    }
                }
            });
        })
    };

    let on_leave = {
        let video_ref = video_ref.clone();
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| {
            let action = preview.borrow_mut().leave();
            redraw.force_update();

            match action {
                PreviewAction::PauseAndRewind => {
                    if let Err(e) = dom::video(&video_ref, "card-video").and_then(|video| dom::rewind(&video)) {
                        warn!("Could not stop preview: {}", e);
                    }
                }
            }
        })
    };

    let video_style = preview.borrow().style();

    html! {
        <div class="card" data-video={props.video.clone()} onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="thumb">
                <img src={props.poster.clone()} alt={props.title.clone()} loading="lazy" />
                <video
                    ref={video_ref}
                    class="card-video"
                    src={props.video.clone()}
                    muted=true
                    loop=true
                    playsinline=true
                    preload="metadata"
                    style={video_style}
                ></video>
            </div>
            <div class="card-body">
                <h3>{props.title.clone()}</h3>
                <p>{props.caption.clone()}</p>
            </div>
        </div>
    }
}
