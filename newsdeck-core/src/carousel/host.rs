//! DOM-facing traits the carousel runs against.

use std::rc::Rc;

use super::events::{Direction, EventOutcome, NavEvent};

/// Computed `column-gap` and `gap` style values of a track, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapStyle {
    pub column_gap: String,
    pub gap: String,
}

/// The scrollable row holding the carousel items.
///
/// All measurements are read live on every step; nothing is cached.
pub trait TrackElement {
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&self, value: f64);
    fn scroll_width(&self) -> f64;
    fn client_width(&self) -> f64;
    /// Rendered width of the first item, `None` when the track is empty.
    fn first_item_width(&self) -> Option<f64>;
    fn gap_style(&self) -> GapStyle;
    /// Start the environment's native smooth scroll towards `left`.
    fn smooth_scroll_to(&self, left: f64);
}

/// Animation-frame clock.
pub trait FrameScheduler {
    /// Run `callback` on the next frame with the frame timestamp in ms.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

/// Previous/next buttons of a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavControl {
    Previous,
    Next,
}

impl NavControl {
    pub fn direction(self) -> Direction {
        match self {
            NavControl::Previous => Direction::Previous,
            NavControl::Next => Direction::Next,
        }
    }

    /// Structural class marking the control inside a wrapper.
    pub fn class_name(self) -> &'static str {
        match self {
            NavControl::Previous => "nlp-nav--prev",
            NavControl::Next => "nlp-nav--next",
        }
    }
}

/// Element an event handler is attached to. Controls take clicks and
/// Enter/Space; the track takes arrow keys.
#[derive(Debug, Clone)]
pub enum ListenTarget<N, T> {
    Control(N, NavControl),
    Track(T),
}

pub type NavHandler = Rc<dyn Fn(&NavEvent) -> EventOutcome>;

/// Document environment hosting rendered listings.
pub trait CarouselHost {
    type Node: Clone;
    type Track: TrackElement + Clone + 'static;
    type Frames: FrameScheduler + Clone + 'static;

    /// Wrapper elements (`.nlp-wrapper`) under `root`.
    fn wrappers(&self, root: &Self::Node) -> Vec<Self::Node>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    /// The wrapper's `.nlp-carousel` track.
    fn track(&self, wrapper: &Self::Node) -> Option<Self::Track>;
    fn control(&self, wrapper: &Self::Node, control: NavControl) -> Option<Self::Node>;
    fn listen(&self, target: ListenTarget<Self::Node, Self::Track>, handler: NavHandler);
    /// Capability probe for native smooth scrolling.
    fn supports_smooth_scroll(&self) -> bool;
    fn frames(&self) -> Self::Frames;
}
