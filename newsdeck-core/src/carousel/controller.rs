//! Per-carousel step navigation.

use super::animator::{AnimateToOffset, MotionState};
use super::events::{Direction, EventOutcome, EventSource, NavEvent, NavKey};
use super::host::TrackElement;
use super::metrics::{StepMetrics, target_offset};
use crate::settings::CarouselSettings;

/// Moves one track by whole steps of `step_count` items.
///
/// Item width, gap and scroll extents are re-read from the track on every
/// step so responsive resizes are always honored.
#[derive(Debug)]
pub struct CarouselController<T, A> {
    track: T,
    step_count: u32,
    animator: A,
    settings: CarouselSettings,
}

impl<T, A> CarouselController<T, A>
where
    T: TrackElement,
    A: AnimateToOffset<T>,
{
    pub fn new(
        track: T,
        step_count: u32,
        animator: A,
        settings: CarouselSettings,
    ) -> Self {
        Self {
            track,
            step_count: step_count.max(1),
            animator,
            settings,
        }
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Current distance of one step.
    pub fn step_distance(&self) -> f64 {
        StepMetrics::measure(&self.track, &self.settings)
            .step_distance(self.step_count)
    }

    /// Clamped offset one step in `direction` from where the track is now.
    pub fn target_for(&self, direction: Direction) -> f64 {
        target_offset(
            self.track.scroll_left(),
            direction,
            self.step_distance(),
            self.track.scroll_width(),
            self.track.client_width(),
        )
    }

    /// Animate one step in `direction` and return the target offset.
    pub fn step(&self, direction: Direction) -> f64 {
        let target = self.target_for(direction);
        tracing::trace!(?direction, target, "carousel step");
        self.animator.animate_to(&self.track, target);
        target
    }

    pub fn motion(&self) -> MotionState {
        self.animator.motion()
    }

    /// React to an event on one of the carousel's bound elements.
    pub fn handle(&self, source: EventSource, event: &NavEvent) -> EventOutcome {
        let (direction, prevent_default) = match (source, event) {
            (EventSource::Control(control), NavEvent::Click) => {
                (control.direction(), false)
            }
            (
                EventSource::Control(control),
                NavEvent::KeyDown(NavKey::Enter | NavKey::Space),
            ) => (control.direction(), true),
            (EventSource::Track, NavEvent::KeyDown(NavKey::ArrowLeft)) => {
                (Direction::Previous, true)
            }
            (EventSource::Track, NavEvent::KeyDown(NavKey::ArrowRight)) => {
                (Direction::Next, true)
            }
            _ => return EventOutcome::ignored(),
        };

        let target = self.step(direction);
        EventOutcome {
            moved: Some(direction),
            target: Some(target),
            prevent_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::animator::NativeSmoothScroll;
    use crate::carousel::host::{GapStyle, NavControl};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    struct Track {
        left: Rc<Cell<f64>>,
        scroll_width: f64,
        client_width: f64,
        item_width: Option<f64>,
        gap: GapStyle,
        smooth_targets: Rc<RefCell<Vec<f64>>>,
    }

    impl Track {
        /// `items` cards of `item_width` separated by a 16px gap.
        fn with_items(items: u32, item_width: f64, client_width: f64) -> Self {
            let gap = 16.0;
            let scroll_width =
                f64::from(items) * item_width + f64::from(items.saturating_sub(1)) * gap;
            Self {
                left: Rc::new(Cell::new(0.0)),
                scroll_width,
                client_width,
                item_width: Some(item_width),
                gap: GapStyle {
                    column_gap: "16px".into(),
                    gap: "16px".into(),
                },
                smooth_targets: Rc::default(),
            }
        }

        fn last_target(&self) -> Option<f64> {
            self.smooth_targets.borrow().last().copied()
        }
    }

    impl TrackElement for Track {
        fn scroll_left(&self) -> f64 {
            self.left.get()
        }
        fn set_scroll_left(&self, value: f64) {
            self.left.set(value);
        }
        fn scroll_width(&self) -> f64 {
            self.scroll_width
        }
        fn client_width(&self) -> f64 {
            self.client_width
        }
        fn first_item_width(&self) -> Option<f64> {
            self.item_width
        }
        fn gap_style(&self) -> GapStyle {
            self.gap.clone()
        }
        fn smooth_scroll_to(&self, left: f64) {
            self.smooth_targets.borrow_mut().push(left);
            self.left.set(left);
        }
    }

    fn controller(track: &Track, step_count: u32) -> CarouselController<Track, NativeSmoothScroll> {
        CarouselController::new(
            track.clone(),
            step_count,
            NativeSmoothScroll,
            CarouselSettings::default(),
        )
    }

    #[test]
    fn next_moves_two_items_and_the_gaps() {
        // 8 cards leave plenty of room past 632.
        let track = Track::with_items(8, 300.0, 700.0);
        let carousel = controller(&track, 2);

        assert_eq!(carousel.step(Direction::Next), 632.0);
        assert_eq!(track.last_target(), Some(632.0));
    }

    #[test]
    fn next_is_clamped_to_the_scrollable_range() {
        // 4 cards: 1248 wide, 700 visible, so at most 548.
        let track = Track::with_items(4, 300.0, 700.0);
        let carousel = controller(&track, 2);

        assert_eq!(carousel.step(Direction::Next), 548.0);
        assert_eq!(carousel.step(Direction::Next), 548.0);
    }

    #[test]
    fn previous_at_the_start_stays_at_zero() {
        let track = Track::with_items(4, 300.0, 700.0);
        let carousel = controller(&track, 1);

        assert_eq!(carousel.step(Direction::Previous), 0.0);
    }

    #[test]
    fn steps_follow_live_measurements() {
        let mut track = Track::with_items(12, 300.0, 700.0);
        let carousel = controller(&track, 1);
        assert_eq!(carousel.step_distance(), 316.0);

        track.item_width = None;
        track.gap = GapStyle::default();
        let resized = controller(&track, 1);
        assert_eq!(resized.step_distance(), 336.0);
    }

    #[test]
    fn step_count_is_at_least_one() {
        let track = Track::with_items(4, 300.0, 700.0);
        assert_eq!(controller(&track, 0).step_count(), 1);
    }

    #[test]
    fn controls_step_on_click_without_preventing_default() {
        let track = Track::with_items(8, 300.0, 700.0);
        let carousel = controller(&track, 1);

        let outcome = carousel.handle(
            EventSource::Control(NavControl::Next),
            &NavEvent::Click,
        );
        assert_eq!(outcome.moved, Some(Direction::Next));
        assert_eq!(outcome.target, Some(316.0));
        assert!(!outcome.prevent_default);
    }

    #[test]
    fn controls_step_on_enter_and_space() {
        let track = Track::with_items(8, 300.0, 700.0);
        let carousel = controller(&track, 1);

        for key in [NavKey::Enter, NavKey::Space] {
            let outcome = carousel.handle(
                EventSource::Control(NavControl::Next),
                &NavEvent::KeyDown(key),
            );
            assert_eq!(outcome.moved, Some(Direction::Next));
            assert!(outcome.prevent_default);
        }
        assert_eq!(track.scroll_left(), 632.0);

        let outcome = carousel.handle(
            EventSource::Control(NavControl::Previous),
            &NavEvent::KeyDown(NavKey::Enter),
        );
        assert_eq!(outcome.target, Some(316.0));
    }

    #[test]
    fn track_reacts_to_arrow_keys_only() {
        let track = Track::with_items(8, 300.0, 700.0);
        let carousel = controller(&track, 1);

        let right = carousel
            .handle(EventSource::Track, &NavEvent::KeyDown(NavKey::ArrowRight));
        assert_eq!(right.moved, Some(Direction::Next));
        assert!(right.prevent_default);

        let left = carousel
            .handle(EventSource::Track, &NavEvent::KeyDown(NavKey::ArrowLeft));
        assert_eq!(left.moved, Some(Direction::Previous));
        assert_eq!(track.scroll_left(), 0.0);

        let enter =
            carousel.handle(EventSource::Track, &NavEvent::KeyDown(NavKey::Enter));
        assert_eq!(enter, EventOutcome::ignored());

        let click = carousel.handle(EventSource::Track, &NavEvent::Click);
        assert_eq!(click, EventOutcome::ignored());
    }

    #[test]
    fn other_keys_on_controls_are_ignored() {
        let track = Track::with_items(8, 300.0, 700.0);
        let carousel = controller(&track, 1);

        let outcome = carousel.handle(
            EventSource::Control(NavControl::Next),
            &NavEvent::KeyDown(NavKey::ArrowRight),
        );
        assert_eq!(outcome, EventOutcome::ignored());
        assert_eq!(track.last_target(), None);
    }
}
