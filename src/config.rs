use log::Level;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by trunk when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/static"  // Production layout
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", get_asset_base(), path.trim_start_matches('/'))
}

pub const PROMPT_MESSAGE: &str = "Will you go to prom with me? 🌹";
pub const ACCEPT_MESSAGE: &str = "YAY! 🥳 Can’t wait for prom with you! 💖";
pub const DECLINE_MESSAGE: &str = "Oh no! 😭 Please reconsider!";
pub const REQUEST_CONFIRMATION: &str = "Request sent! We'll email you shortly.";

pub const EVASION_SPAN: i32 = 200;

pub struct Card {
    pub title: &'static str,
    pub caption: &'static str,
    pub poster: &'static str,
    pub video: &'static str,
}

pub const CARDS: &[Card] = &[
    Card {
        title: "The Promposal",
        caption: "Two buttons. Only one of them sits still.",
        poster: "img/promposal.jpg",
        video: "video/promposal.mp4",
    },
    Card {
        title: "Date Invite",
        caption: "Ask for a date without the awkward pause.",
        poster: "img/dateinvite.jpg",
        video: "video/dateinvite.mp4",
    },
    Card {
        title: "Custom Page",
        caption: "Book a slot and we build one around your story.",
        poster: "img/custom.jpg",
        video: "video/custom.mp4",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_single_slash() {
        let base = get_asset_base();
        assert_eq!(asset_url("video/a.mp4"), format!("{}/video/a.mp4", base));
        assert_eq!(asset_url("/video/a.mp4"), format!("{}/video/a.mp4", base));
    }

    #[test]
    fn test_cards_have_media() {
        assert!(!CARDS.is_empty());
        for card in CARDS {
            assert!(card.video.ends_with(".mp4"), "{} has no clip", card.title);
            assert!(!card.poster.is_empty());
        }
    }
}
