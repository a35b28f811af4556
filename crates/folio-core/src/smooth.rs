//! Exponential ease-out toward a scroll target.
//!
//! Each tick covers a fixed fraction of the remaining distance, so motion
//! starts fast and decelerates, the way browsers animate smooth scrolling.

use crate::consts::{MIN_SMOOTH_SCROLL_SPEED, SMOOTH_SCROLL_MAX_TICKS, SMOOTH_SCROLL_SETTLE_PX};

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    position: f32,
    target: f32,
    /// `remaining *= 1 - speed` each tick.
    speed: f32,
    ticks: usize,
    animating: bool,
}

impl SmoothScroll {
    /// `speed` is expected to come from a validated
    /// [`NavConfig`](crate::config::NavConfig); out-of-range values are clamped.
    pub fn new(speed: f32) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            speed: speed.clamp(MIN_SMOOTH_SCROLL_SPEED, 1.0),
            ticks: 0,
            animating: false,
        }
    }

    pub fn start(&mut self, from: f32, to: f32) {
        self.position = from;
        self.target = to;
        self.ticks = 0;
        self.animating = (to - from).abs() >= SMOOTH_SCROLL_SETTLE_PX;
        if !self.animating {
            self.position = to;
        }
    }

    /// Advance one frame. Returns the new offset, or `None` once settled.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.animating {
            return None;
        }
        self.ticks += 1;
        self.position += (self.target - self.position) * self.speed;

        if (self.target - self.position).abs() < SMOOTH_SCROLL_SETTLE_PX
            || self.ticks >= SMOOTH_SCROLL_MAX_TICKS
        {
            self.position = self.target;
            self.animating = false;
        }
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn drain(smooth: &mut SmoothScroll) -> Vec<f32> {
        std::iter::from_fn(|| smooth.tick()).collect()
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut smooth = SmoothScroll::new(0.35);
        smooth.start(0.0, 2400.0);
        let frames = drain(&mut smooth);
        assert!(frames.len() > 1);
        assert_eq!(*frames.last().unwrap(), 2400.0);
        assert_eq!(smooth.tick(), None);
    }

    #[test]
    fn motion_decelerates() {
        let mut smooth = SmoothScroll::new(0.5);
        smooth.start(0.0, 1000.0);
        let first = smooth.tick().unwrap();
        let second = smooth.tick().unwrap();
        assert_relative_eq!(first, 500.0);
        assert_relative_eq!(second - first, 250.0);
    }

    #[test]
    fn scrolling_up_is_monotonic() {
        let mut smooth = SmoothScroll::new(0.35);
        smooth.start(3000.0, 800.0);
        let frames = drain(&mut smooth);
        assert!(frames.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn no_motion_when_already_there() {
        let mut smooth = SmoothScroll::new(0.35);
        smooth.start(800.0, 800.2);
        assert_eq!(smooth.tick(), None);
    }

    #[test]
    fn full_speed_jumps_in_one_tick() {
        let mut smooth = SmoothScroll::new(1.0);
        smooth.start(0.0, 640.0);
        assert_eq!(smooth.tick(), Some(640.0));
        assert_eq!(smooth.tick(), None);
    }
}
