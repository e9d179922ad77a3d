//! Oscillating cursor used by the trial HUD precision bar.
//!
//! The cursor value runs back and forth between `min` and `max` at a constant
//! speed, like a triangle wave sampled once per tick. Every reversal bumps the
//! semicycle counter, which trials use to limit how long the player may wait.
//! A tick longer than [`MAX_STEP`] is dropped entirely so a frame hitch (or a
//! resumed pause) cannot teleport the cursor.

use bevy_ecs::prelude::Component;

pub const CURSOR_MIN_VALUE: f32 = 0.0;
pub const CURSOR_MAX_VALUE: f32 = 200.0;

/// Ticks at or above this length (seconds) do not move the cursor.
pub const MAX_STEP: f32 = 0.2;

/// Horizontal distance from the bar anchor to the cursor at `value == 0`.
const CURSOR_X_OFFSET: f32 = 100.0;
/// Vertical distance from the bar anchor to the cursor.
pub const CURSOR_Y_OFFSET: f32 = 60.0;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct PrecisionBar {
    min: f32,
    max: f32,
    value: f32,
    /// Units per second.
    speed: f32,
    /// +1.0 towards `max`, -1.0 towards `min`.
    direction: f32,
    semicycle: u32,
    running: bool,
}

impl PrecisionBar {
    /// Bar over the default range whose cursor completes a whole cycle
    /// (min → max → min) in `time_round` seconds. The bar starts stopped.
    pub fn new(time_round: f32) -> Self {
        let range = CURSOR_MAX_VALUE - CURSOR_MIN_VALUE;
        let speed = if time_round > 0.0 {
            2.0 * range / time_round
        } else {
            0.0
        };
        Self::with_bounds(CURSOR_MIN_VALUE, CURSOR_MAX_VALUE, speed)
    }

    /// Bar over `[min, max]` moving at `speed` units per second.
    pub fn with_bounds(min: f32, max: f32, speed: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            value: min,
            speed: speed.abs(),
            direction: 1.0,
            semicycle: 0,
            running: false,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.abs();
        self
    }

    /// Resume moving the cursor.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the cursor where it is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set the cursor value; values outside the bounds are ignored.
    pub fn set_cursor_value(&mut self, value: f32) {
        if value >= self.min && value <= self.max {
            self.value = value;
        }
    }

    /// Advance the cursor by one tick of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.running || dt < 0.0 || dt >= MAX_STEP {
            return;
        }
        self.value += dt * self.speed * self.direction;
        if self.value >= self.max {
            self.value = self.max;
            if self.direction > 0.0 {
                self.direction = -1.0;
                self.semicycle += 1;
            }
        } else if self.value <= self.min {
            self.value = self.min;
            if self.direction < 0.0 {
                self.direction = 1.0;
                self.semicycle += 1;
            }
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn direction(&self) -> i8 {
        if self.direction > 0.0 { 1 } else { -1 }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Number of reversals since the bar was built. The first half cycle is 0.
    pub fn semicycle(&self) -> u32 {
        self.semicycle
    }

    /// Rounded signed distance from the centre of the range: -100 (left) to
    /// 100 (right) for the default bounds. The cursor value is rounded half
    /// up before the centre is subtracted, so 50.5 gives -49.
    pub fn power_value(&self) -> i32 {
        let centre = (self.min + self.max) * 0.5;
        ((self.value + 0.5).floor() - centre) as i32
    }

    /// Horizontal draw position of the cursor for a bar anchored at `anchor_x`.
    pub fn cursor_x(&self, anchor_x: f32) -> f32 {
        anchor_x - CURSOR_X_OFFSET + (self.value - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(min: f32, max: f32, speed: f32) -> PrecisionBar {
        let mut bar = PrecisionBar::with_bounds(min, max, speed);
        bar.start();
        bar
    }

    #[test]
    fn test_new_derives_speed_from_time_round() {
        let bar = PrecisionBar::new(2.0);
        assert_eq!(bar.speed(), 200.0);
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.direction(), 1);
        assert!(!bar.is_running());
    }

    #[test]
    fn test_reaches_max_after_half_period() {
        // (max - min) / s = 200 / 200 = 1.0 s, eight ticks of 0.125 s
        let mut bar = running(0.0, 200.0, 200.0);
        for _ in 0..8 {
            bar.update(0.125);
        }
        assert_eq!(bar.value(), 200.0);
        assert_eq!(bar.direction(), -1);
        assert_eq!(bar.semicycle(), 1);
    }

    #[test]
    fn test_second_reversal_at_full_period() {
        let mut bar = running(0.0, 200.0, 200.0);
        for _ in 0..16 {
            bar.update(0.125);
        }
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.direction(), 1);
        assert_eq!(bar.semicycle(), 2);
    }

    #[test]
    fn test_hitch_guard_skips_update() {
        let mut bar = running(0.0, 200.0, 200.0);
        bar.update(0.125);
        let before = bar.value();
        bar.update(0.2);
        assert_eq!(bar.value(), before);
        bar.update(1.5);
        assert_eq!(bar.value(), before);
        assert_eq!(bar.semicycle(), 0);
    }

    #[test]
    fn test_hitch_at_min_does_not_count_reversal() {
        let mut bar = running(0.0, 200.0, 200.0);
        bar.update(0.5);
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.semicycle(), 0);
    }

    #[test]
    fn test_stopped_bar_does_not_move() {
        let mut bar = running(0.0, 200.0, 200.0);
        bar.update(0.125);
        bar.stop();
        bar.update(0.125);
        assert_eq!(bar.value(), 25.0);
        bar.start();
        bar.update(0.125);
        assert_eq!(bar.value(), 50.0);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let mut bar = running(0.0, 10.0, 100.0);
        bar.update(0.125); // would reach 12.5
        assert_eq!(bar.value(), 10.0);
        assert_eq!(bar.semicycle(), 1);
        bar.update(0.0625);
        assert_eq!(bar.value(), 3.75);
        assert_eq!(bar.semicycle(), 1);
    }

    #[test]
    fn test_set_cursor_value_ignores_out_of_range() {
        let mut bar = PrecisionBar::new(2.0);
        bar.set_cursor_value(150.0);
        assert_eq!(bar.value(), 150.0);
        bar.set_cursor_value(250.0);
        assert_eq!(bar.value(), 150.0);
        bar.set_cursor_value(-1.0);
        assert_eq!(bar.value(), 150.0);
    }

    #[test]
    fn test_power_value_is_centred() {
        let mut bar = PrecisionBar::new(2.0);
        assert_eq!(bar.power_value(), -100);
        bar.set_cursor_value(100.0);
        assert_eq!(bar.power_value(), 0);
        bar.set_cursor_value(200.0);
        assert_eq!(bar.power_value(), 100);
        bar.set_cursor_value(149.6);
        assert_eq!(bar.power_value(), 50);
    }

    #[test]
    fn test_power_value_rounds_half_up() {
        let mut bar = PrecisionBar::new(2.0);
        bar.set_cursor_value(50.5);
        assert_eq!(bar.power_value(), -49);
        bar.set_cursor_value(149.5);
        assert_eq!(bar.power_value(), 50);
        bar.set_cursor_value(0.5);
        assert_eq!(bar.power_value(), -99);
        bar.set_cursor_value(99.5);
        assert_eq!(bar.power_value(), 0);
    }

    #[test]
    fn test_cursor_x() {
        let mut bar = PrecisionBar::new(2.0);
        assert_eq!(bar.cursor_x(500.0), 400.0);
        bar.set_cursor_value(200.0);
        assert_eq!(bar.cursor_x(500.0), 600.0);
    }

    #[test]
    fn test_with_speed_overrides_time_round() {
        let mut bar = PrecisionBar::new(2.0).with_speed(-400.0);
        assert_eq!(bar.speed(), 400.0);
        bar.start();
        bar.update(0.125);
        assert_eq!(bar.value(), 50.0);
    }

    #[test]
    fn test_swapped_bounds_are_normalised() {
        let bar = PrecisionBar::with_bounds(10.0, -10.0, 5.0);
        assert_eq!(bar.bounds(), (-10.0, 10.0));
        assert_eq!(bar.value(), -10.0);
    }
}
