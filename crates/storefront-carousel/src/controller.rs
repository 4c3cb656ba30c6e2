//! Carousel navigation state machine.
//!
//! ```text
//!           navigate (valid step)
//!   Idle ───────────────────────────► Animating
//!    ▲      commits Transform::slide        │
//!    │                                      │
//!    └──────────────────────────────────────┘
//!        on_transition_settled
//!        marks the current index active
//! ```
//!
//! Everything else is a self-loop.

use std::time::Duration;

use serde::Serialize;
use storefront_core::config::CarouselSettings;
use tracing::{debug, trace};

use crate::error::CarouselError;
use crate::input::{Direction, WheelInput};
use crate::slides::SlideSet;
use crate::transform::{Axis, CarouselView, Transform};

/// Phase of the animation lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselPhase {
    #[default]
    Idle,
    Animating,
}

/// Index and lock, as observed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub index: usize,
    pub is_animating: bool,
}

/// Why an input did not move the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Already on the first slide.
    AtFirst,
    /// Already on the last slide.
    AtLast,
    /// A transition is running.
    Animating,
    /// Viewport narrower than the breakpoint; native scrolling applies.
    BelowBreakpoint,
    /// Wheel event with no vertical movement.
    NoMovement,
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The index changed and the transform was committed.
    Moved {
        from: usize,
        to: usize,
        transform: Transform,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl NavigateOutcome {
    /// Check if the carousel moved.
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Landing carousel controller.
#[derive(Debug)]
pub struct CarouselController<V> {
    slides: SlideSet,
    view: V,
    axis: Axis,
    index: usize,
    active: usize,
    phase: CarouselPhase,
    breakpoint_px: u32,
    transition: Duration,
    lock_all_inputs: bool,
}

impl<V: CarouselView> CarouselController<V> {
    /// Create a controller resting on slide 0, which starts out active.
    pub fn new(
        slides: SlideSet,
        view: V,
        settings: &CarouselSettings,
    ) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }

        Ok(Self {
            slides,
            view,
            axis: Axis::Vertical,
            index: 0,
            active: 0,
            phase: CarouselPhase::Idle,
            breakpoint_px: settings.breakpoint_px,
            transition: settings.transition(),
            lock_all_inputs: settings.lock_all_inputs,
        })
    }

    /// Move along a different axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Step one slide in `direction`.
    ///
    /// Clamped to the slide range with no wraparound. This entry point does
    /// not consult the animation lock unless `lock_all_inputs` is set.
    pub fn navigate(&mut self, direction: Direction) -> NavigateOutcome {
        if self.lock_all_inputs && self.is_animating() {
            trace!(?direction, "navigation refused while animating");
            return NavigateOutcome::Ignored(IgnoreReason::Animating);
        }
        self.step(direction)
    }

    fn step(&mut self, direction: Direction) -> NavigateOutcome {
        let from = self.index;
        let to = match direction {
            Direction::Next if from + 1 < self.slides.len() => from + 1,
            Direction::Next => return NavigateOutcome::Ignored(IgnoreReason::AtLast),
            Direction::Prev if from > 0 => from - 1,
            Direction::Prev => return NavigateOutcome::Ignored(IgnoreReason::AtFirst),
        };

        self.index = to;
        self.phase = CarouselPhase::Animating;

        let transform = Transform::slide(self.axis, to);
        self.view.translate(transform);
        debug!(from, to, %transform, "carousel moving");

        NavigateOutcome::Moved {
            from,
            to,
            transform,
        }
    }

    /// Handle a wheel event.
    ///
    /// Below the breakpoint the page scrolls natively and the event is left
    /// alone. Wheel input always respects the animation lock.
    pub fn on_wheel(&mut self, input: WheelInput) -> NavigateOutcome {
        if input.viewport_width < self.breakpoint_px {
            return NavigateOutcome::Ignored(IgnoreReason::BelowBreakpoint);
        }
        if self.is_animating() {
            trace!("wheel ignored while animating");
            return NavigateOutcome::Ignored(IgnoreReason::Animating);
        }
        match input.direction() {
            Some(direction) => self.step(direction),
            None => NavigateOutcome::Ignored(IgnoreReason::NoMovement),
        }
    }

    /// Handle a viewport resize.
    ///
    /// Puts the slider back at the zero position. The index and the lock are
    /// left as they are, so after a resize the logical index may no longer
    /// match the slide on screen until the next navigation.
    pub fn on_viewport_resize(&mut self) {
        debug!(index = self.index, "viewport resized, resetting slider transform");
        self.view.translate(Transform::origin(self.axis));
    }

    /// Handle the end of a slider transition.
    ///
    /// Releases the lock and marks the current index active. Returns the
    /// newly active index, or `None` if no transition was running.
    pub fn on_transition_settled(&mut self) -> Option<usize> {
        if self.phase != CarouselPhase::Animating {
            return None;
        }

        self.phase = CarouselPhase::Idle;
        self.active = self.index;
        self.view.mark_active(self.active);
        debug!(active = self.active, "carousel settled");
        Some(self.active)
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if a transition is running.
    pub fn is_animating(&self) -> bool {
        self.phase == CarouselPhase::Animating
    }

    /// Current phase.
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Index and lock.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            is_animating: self.is_animating(),
        }
    }

    /// The slide currently marked active.
    pub fn active_slide(&self) -> usize {
        self.active
    }

    /// Check if slide `index` is marked active.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Slides in display order.
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    /// Configured transition duration, for hosts that need a fallback timer.
    pub fn transition_duration(&self) -> Duration {
        self.transition
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consume the controller and return the view.
    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::landing::Slide;

    #[derive(Debug, Default)]
    struct RecordingView {
        transforms: Vec<Transform>,
        active: Vec<usize>,
    }

    impl CarouselView for RecordingView {
        fn translate(&mut self, transform: Transform) {
            self.transforms.push(transform);
        }

        fn mark_active(&mut self, index: usize) {
            self.active.push(index);
        }
    }

    fn carousel(settings: CarouselSettings) -> CarouselController<RecordingView> {
        CarouselController::new(SlideSet::featured(), RecordingView::default(), &settings).unwrap()
    }

    fn wide(delta_y: f64) -> WheelInput {
        WheelInput::new(delta_y, 1440)
    }

    #[test]
    fn test_initial_state() {
        let c = carousel(CarouselSettings::default());
        assert_eq!(c.state(), CarouselState { index: 0, is_animating: false });
        assert!(c.is_active(0));
        assert!(c.view().transforms.is_empty());
        assert_eq!(c.transition_duration(), Duration::from_millis(800));
    }

    #[test]
    fn test_rejects_empty_slides() {
        let settings = CarouselSettings::default();
        let err = CarouselController::new(SlideSet::new(&[]), RecordingView::default(), &settings)
            .err();
        assert_eq!(err, Some(CarouselError::NoSlides));
    }

    #[test]
    fn test_prev_at_first_slide_is_noop() {
        let mut c = carousel(CarouselSettings::default());
        assert_eq!(c.navigate(Direction::Prev), NavigateOutcome::Ignored(IgnoreReason::AtFirst));
        assert_eq!(c.index(), 0);
        assert!(!c.is_animating());
        assert!(c.view().transforms.is_empty());
    }

    #[test]
    fn test_next_commits_absolute_transform() {
        let mut c = carousel(CarouselSettings::default());
        for i in 0..4 {
            let outcome = c.navigate(Direction::Next);
            assert_eq!(
                outcome,
                NavigateOutcome::Moved {
                    from: i,
                    to: i + 1,
                    transform: Transform::slide(Axis::Vertical, i + 1),
                }
            );
            assert_eq!(c.view().transforms.last().unwrap().offset_percent, -((i as i64 + 1) * 100));
            assert!(c.is_animating());
            // Active mark only moves on settle.
            assert!(c.is_active(i));

            assert_eq!(c.on_transition_settled(), Some(i + 1));
            assert!(!c.is_animating());
            for slide in 0..c.slides().len() {
                assert_eq!(c.is_active(slide), slide == i + 1);
            }
        }
        assert_eq!(c.view().active, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_next_at_last_slide_is_noop() {
        let mut c = carousel(CarouselSettings::default());
        for _ in 0..4 {
            c.navigate(Direction::Next);
            c.on_transition_settled();
        }
        assert_eq!(c.index(), 4);
        assert_eq!(c.navigate(Direction::Next), NavigateOutcome::Ignored(IgnoreReason::AtLast));
        assert_eq!(c.index(), 4);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_single_slide() {
        let slides = SlideSet::new(&[Slide::new("Beer", "beer.jpg", "beercover.jpg", 9.5)]);
        let settings = CarouselSettings::default();
        let mut c = CarouselController::new(slides, RecordingView::default(), &settings).unwrap();
        assert!(!c.navigate(Direction::Next).moved());
        assert!(!c.navigate(Direction::Prev).moved());
    }

    #[test]
    fn test_wheel_respects_lock() {
        let mut c = carousel(CarouselSettings::default());
        assert!(c.on_wheel(wide(100.0)).moved());
        assert_eq!(c.on_wheel(wide(100.0)), NavigateOutcome::Ignored(IgnoreReason::Animating));
        assert_eq!(c.on_wheel(wide(-100.0)), NavigateOutcome::Ignored(IgnoreReason::Animating));
        assert_eq!(c.state(), CarouselState { index: 1, is_animating: true });
        assert_eq!(c.view().transforms.len(), 1);

        c.on_transition_settled();
        assert!(c.on_wheel(wide(-100.0)).moved());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_wheel_below_breakpoint_is_ignored() {
        let mut c = carousel(CarouselSettings::default());
        assert_eq!(
            c.on_wheel(WheelInput::new(100.0, 1023)),
            NavigateOutcome::Ignored(IgnoreReason::BelowBreakpoint)
        );
        assert!(c.on_wheel(WheelInput::new(100.0, 1024)).moved());
    }

    #[test]
    fn test_wheel_without_delta() {
        let mut c = carousel(CarouselSettings::default());
        assert_eq!(c.on_wheel(wide(0.0)), NavigateOutcome::Ignored(IgnoreReason::NoMovement));
    }

    #[test]
    fn test_click_navigation_ignores_lock_by_default() {
        let mut c = carousel(CarouselSettings::default());
        c.navigate(Direction::Next);
        assert!(c.navigate(Direction::Next).moved());
        assert_eq!(c.index(), 2);
        assert_eq!(c.view().transforms.last().unwrap().to_string(), "translateY(-200%)");

        c.on_transition_settled();
        assert!(c.is_active(2));
        // A second settle signal for the same move is a self-loop.
        assert_eq!(c.on_transition_settled(), None);
        assert_eq!(c.view().active, vec![2]);
    }

    #[test]
    fn test_lock_all_inputs() {
        let settings = CarouselSettings {
            lock_all_inputs: true,
            ..Default::default()
        };
        let mut c = carousel(settings);
        c.navigate(Direction::Next);
        assert_eq!(c.navigate(Direction::Next), NavigateOutcome::Ignored(IgnoreReason::Animating));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_settle_while_idle_is_noop() {
        let mut c = carousel(CarouselSettings::default());
        assert_eq!(c.on_transition_settled(), None);
        assert!(c.view().active.is_empty());
        assert!(c.is_active(0));
    }

    #[test]
    fn test_resize_resets_transform_only() {
        let mut c = carousel(CarouselSettings::default());
        c.navigate(Direction::Next);
        c.on_transition_settled();
        c.navigate(Direction::Next);

        c.on_viewport_resize();
        assert!(c.view().transforms.last().unwrap().is_origin());
        assert_eq!(c.state(), CarouselState { index: 2, is_animating: true });
        assert!(c.is_active(1));
    }

    #[test]
    fn test_horizontal_axis() {
        let mut c = carousel(CarouselSettings::default()).with_axis(Axis::Horizontal);
        c.navigate(Direction::Next);
        assert_eq!(c.view().transforms[0].to_string(), "translateX(-100%)");
        c.on_viewport_resize();
        assert_eq!(c.into_view().transforms[1].to_string(), "translateX(0)");
    }

    #[test]
    fn test_custom_breakpoint() {
        let settings = CarouselSettings {
            breakpoint_px: 1200,
            ..Default::default()
        };
        let mut c = carousel(settings);
        assert!(!c.on_wheel(WheelInput::new(10.0, 1100)).moved());
        assert!(c.on_wheel(WheelInput::new(10.0, 1200)).moved());
    }
}
