//! Navigation intents and the events that carry them.

use super::host::NavControl;

/// Scroll direction of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Previous => -1.0,
            Direction::Next => 1.0,
        }
    }
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value. `"Spacebar"` is what older
    /// browsers report for the space bar.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => NavKey::Enter,
            " " | "Spacebar" => NavKey::Space,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            other => NavKey::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Click,
    KeyDown(NavKey),
}

/// Which bound element received the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Control(NavControl),
    Track,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventOutcome {
    /// Step taken, if any.
    pub moved: Option<Direction>,
    /// Target offset the track is now heading to.
    pub target: Option<f64>,
    /// The host must suppress the key's default scrolling.
    pub prevent_default: bool,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_nav_keys() {
        assert_eq!(NavKey::from_dom_key("Enter"), NavKey::Enter);
        assert_eq!(NavKey::from_dom_key(" "), NavKey::Space);
        assert_eq!(NavKey::from_dom_key("Spacebar"), NavKey::Space);
        assert_eq!(NavKey::from_dom_key("ArrowLeft"), NavKey::ArrowLeft);
        assert_eq!(NavKey::from_dom_key("ArrowRight"), NavKey::ArrowRight);
        assert_eq!(
            NavKey::from_dom_key("Tab"),
            NavKey::Other("Tab".to_string())
        );
    }
}
