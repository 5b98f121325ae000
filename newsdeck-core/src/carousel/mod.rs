//! Carousel step navigation.
//!
//! Client-side half of a listing: given a scrollable track and a step size
//! read from the wrapper's `data-count`, move the track by whole steps in
//! response to button presses and arrow keys, clamped to the scrollable range.
//!
//! The DOM is reached only through the traits in [`host`], so the controller
//! runs the same against a browser (`web` feature) and against test doubles.

pub mod animator;
pub mod controller;
pub mod events;
pub mod host;
pub mod init;
pub mod metrics;
#[cfg(feature = "web")]
pub mod web;

pub use animator::{
    AnimateToOffset, FrameInterpolation, MotionState, NativeSmoothScroll,
    ScrollAnimator, ScrollTween,
};
pub use controller::CarouselController;
pub use events::{Direction, EventOutcome, EventSource, NavEvent, NavKey};
pub use host::{
    CarouselHost, FrameScheduler, GapStyle, ListenTarget, NavControl,
    NavHandler, TrackElement,
};
pub use init::{HostController, READY_ATTRIBUTE, init_carousels};
pub use metrics::{
    StepMetrics, clamp_offset, parse_css_length, parse_step_count,
    resolve_gap, step_distance, target_offset,
};
