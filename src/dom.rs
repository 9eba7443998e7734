use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{HtmlVideoElement, Window};
use yew::NodeRef;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("element `{0}` is not mounted")]
    ElementMissing(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn alert(message: &str) -> Result<(), DomError> {
    window()?.alert_with_message(message)?;
    Ok(())
}

pub fn video(node: &NodeRef, name: &'static str) -> Result<HtmlVideoElement, DomError> {
    node.cast::<HtmlVideoElement>()
        .ok_or(DomError::ElementMissing(name))
}

// Pause and seek back to the first frame
pub fn rewind(video: &HtmlVideoElement) -> Result<(), DomError> {
    video.pause()?;
    video.set_current_time(0.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        assert_eq!(
            DomError::ElementMissing("card-video").to_string(),
            "element `card-video` is not mounted"
        );
        assert_eq!(
            DomError::Js("NotAllowedError".to_string()).to_string(),
            "browser call failed: NotAllowedError"
        );
    }
}
