//! Animate-to-offset strategies.
//!
//! Environments with native smooth scrolling get [`NativeSmoothScroll`];
//! the rest get [`FrameInterpolation`], a linear tween stepped on the
//! animation-frame clock. [`ScrollAnimator::select`] picks one from a single
//! capability probe.

use std::cell::Cell;
use std::rc::Rc;

use super::host::{FrameScheduler, TrackElement};

/// Coarse motion state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Animating,
}

/// One offset sample of a running tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub offset: f64,
    pub finished: bool,
}

/// Time-based linear interpolation from a start offset to a target.
///
/// The clock starts at the first sampled timestamp, so the first frame always
/// lands on the start offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTween {
    start: f64,
    delta: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollTween {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            delta: target - start,
            duration_ms,
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.delta
    }

    pub fn sample(&mut self, timestamp: f64) -> TweenSample {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let t = if self.duration_ms > 0.0 {
            ((timestamp - started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        TweenSample {
            offset: self.start + self.delta * t,
            finished: t >= 1.0,
        }
    }
}

/// Capability to move a track to an absolute offset.
pub trait AnimateToOffset<T: TrackElement> {
    fn animate_to(&self, track: &T, target: f64);

    fn motion(&self) -> MotionState {
        MotionState::Idle
    }
}

/// Delegates to the environment's own smooth scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSmoothScroll;

impl<T: TrackElement> AnimateToOffset<T> for NativeSmoothScroll {
    fn animate_to(&self, track: &T, target: f64) {
        track.smooth_scroll_to(target);
    }
}

/// Shared between a strategy and its in-flight frame callbacks.
#[derive(Debug, Default)]
struct FrameTicket {
    generation: Cell<u64>,
    running: Cell<bool>,
}

/// Frame-stepped linear tween.
///
/// Each call to `animate_to` supersedes the previous animation: its pending
/// frames see a newer generation and stop without touching the track.
#[derive(Debug, Clone)]
pub struct FrameInterpolation<F> {
    frames: F,
    duration_ms: f64,
    ticket: Rc<FrameTicket>,
}

impl<F> FrameInterpolation<F> {
    pub fn new(frames: F, duration_ms: f64) -> Self {
        Self {
            frames,
            duration_ms,
            ticket: Rc::new(FrameTicket::default()),
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

fn schedule_frame<T, F>(
    track: T,
    frames: F,
    mut tween: ScrollTween,
    ticket: Rc<FrameTicket>,
    generation: u64,
) where
    T: TrackElement + 'static,
    F: FrameScheduler + Clone + 'static,
{
    let next = frames.clone();
    frames.request_frame(Box::new(move |timestamp| {
        if ticket.generation.get() != generation {
            tracing::trace!(generation, "superseded carousel animation stopped");
            return;
        }
        let sample = tween.sample(timestamp);
        track.set_scroll_left(sample.offset);
        if sample.finished {
            ticket.running.set(false);
        } else {
            schedule_frame(track, next, tween, ticket, generation);
        }
    }));
}

impl<T, F> AnimateToOffset<T> for FrameInterpolation<F>
where
    T: TrackElement + Clone + 'static,
    F: FrameScheduler + Clone + 'static,
{
    fn animate_to(&self, track: &T, target: f64) {
        let generation = self.ticket.generation.get().wrapping_add(1);
        self.ticket.generation.set(generation);
        self.ticket.running.set(true);

        let tween = ScrollTween::new(track.scroll_left(), target, self.duration_ms);
        schedule_frame(
            track.clone(),
            self.frames.clone(),
            tween,
            Rc::clone(&self.ticket),
            generation,
        );
    }

    fn motion(&self) -> MotionState {
        if self.ticket.running.get() {
            MotionState::Animating
        } else {
            MotionState::Idle
        }
    }
}

/// The strategy chosen for one environment.
#[derive(Debug, Clone)]
pub enum ScrollAnimator<F> {
    Native(NativeSmoothScroll),
    Frames(FrameInterpolation<F>),
}

impl<F> ScrollAnimator<F> {
    /// Pick native smooth scrolling when the probe says it exists, the frame
    /// tween otherwise.
    pub fn select(supports_smooth_scroll: bool, frames: F, duration_ms: f64) -> Self {
        if supports_smooth_scroll {
            ScrollAnimator::Native(NativeSmoothScroll)
        } else {
            ScrollAnimator::Frames(FrameInterpolation::new(frames, duration_ms))
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, ScrollAnimator::Native(_))
    }
}

impl<T, F> AnimateToOffset<T> for ScrollAnimator<F>
where
    T: TrackElement + Clone + 'static,
    F: FrameScheduler + Clone + 'static,
{
    fn animate_to(&self, track: &T, target: f64) {
        match self {
            ScrollAnimator::Native(native) => native.animate_to(track, target),
            ScrollAnimator::Frames(frames) => frames.animate_to(track, target),
        }
    }

    fn motion(&self) -> MotionState {
        match self {
            ScrollAnimator::Native(native) => {
                AnimateToOffset::<T>::motion(native)
            }
            ScrollAnimator::Frames(frames) => {
                AnimateToOffset::<T>::motion(frames)
            }
        }
    }
}
