//! Scroll fraction and the spring that smooths it.

/// Raw vertical progress through the document, in `[0, 1]`.
///
/// A document that fits in the viewport reports 0.
pub fn scroll_fraction(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_offset = document_height - viewport_height;
    if !(max_offset > 0.0) || !scroll_offset.is_finite() {
        return 0.0;
    }

    (scroll_offset / max_offset).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

/// Progress bar tuning: overdamped, so it never overshoots.
pub const PROGRESS_SPRING: SpringConfig = SpringConfig {
    stiffness: 100.0,
    damping: 30.0,
    mass: 1.0,
    rest_delta: 0.001,
    rest_speed: 0.01,
};

/// Integration step ceiling in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Frames longer than this (a backgrounded tab) are treated as this long.
const MAX_FRAME: f64 = 0.064;
/// Step used for the first frame after rest, when there is no previous
/// timestamp to measure from.
const NOMINAL_FRAME: f64 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advances by `elapsed_seconds` and returns the new value. Once within
    /// the rest thresholds the value snaps onto the target.
    pub fn step(&mut self, elapsed_seconds: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = elapsed_seconds.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let spring_force = -self.config.stiffness * displacement;
            let damping_force = -self.config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / self.config.mass;

            self.velocity += acceleration * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }

        self.value
    }
}

/// The spring that trails the raw scroll fraction.
///
/// Frames are timed from their own timestamps. Scroll observations only move
/// the spring's target and never touch the frame clock, so a burst of scroll
/// events cannot hold the spring still.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    spring: Spring,
    last_frame_ms: Option<f64>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            spring: Spring::new(PROGRESS_SPRING, 0.0),
            last_frame_ms: None,
        }
    }
}

impl ScrollState {
    pub fn observe(&mut self, scroll_offset: f64, document_height: f64, viewport_height: f64) {
        self.spring
            .set_target(scroll_fraction(scroll_offset, document_height, viewport_height));
    }

    /// Steps the spring by the time since the previous frame. The clock is
    /// cleared once the spring rests so the next burst starts fresh.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let elapsed = match self.last_frame_ms {
            Some(last) if now_ms.is_finite() => (now_ms - last) / 1_000.0,
            _ => NOMINAL_FRAME,
        };
        let value = self.spring.step(elapsed);

        self.last_frame_ms = if self.spring.is_at_rest() {
            None
        } else {
            Some(now_ms)
        };
        value
    }

    /// Whether the page should keep a frame timer running.
    pub fn needs_frames(&self) -> bool {
        !self.spring.is_at_rest()
    }

    pub fn smoothed_fraction(&self) -> f64 {
        self.spring.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn fraction_is_zero_when_nothing_scrolls() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(120.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn fraction_is_clamped_to_unit_range() {
        assert_eq!(scroll_fraction(-40.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 2_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_fraction(1_400.0, 2_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_fraction(f64::NAN, 2_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn spring_follows_without_overshoot_and_settles_on_target() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.0);
        spring.set_target(1.0);

        let mut previous = spring.value();
        for _ in 0..600 {
            let value = spring.step(FRAME);
            assert!(value >= previous, "spring moved backwards: {previous} -> {value}");
            assert!(value <= 1.0, "spring overshot: {value}");
            previous = value;
        }

        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn spring_lags_behind_a_jump() {
        let mut state = ScrollState::default();
        state.observe(1_000.0, 2_000.0, 1_000.0);
        let first = state.frame(0.0);

        assert!(first > 0.0 && first < 0.5, "{first}");
        assert!(state.needs_frames());
    }

    #[test]
    fn rapid_scroll_events_do_not_starve_the_spring() {
        let mut state = ScrollState::default();
        let mut smoothed_max: f64 = 0.0;

        // Scroll events every 8 ms over 600 ms reach the end of the page,
        // while the frame timer keeps its own 16 ms cadence.
        for tick in 0..=75u32 {
            let now_ms = f64::from(tick * 8);
            state.observe(now_ms / 600.0 * 1_000.0, 2_000.0, 1_000.0);
            if tick % 2 == 0 && state.needs_frames() {
                smoothed_max = smoothed_max.max(state.frame(now_ms));
            }
        }

        assert!(smoothed_max > 0.25, "bar barely moved while scrolling: {smoothed_max}");

        let mut now_ms = 600.0;
        while state.needs_frames() {
            now_ms += 16.0;
            state.frame(now_ms);
            assert!(now_ms < 10_000.0, "spring never settled");
        }
        assert_eq!(state.smoothed_fraction(), 1.0);
    }

    #[test]
    fn frames_are_stepped_by_measured_time() {
        let mut steady = ScrollState::default();
        let mut throttled = ScrollState::default();
        steady.observe(1_000.0, 2_000.0, 1_000.0);
        throttled.observe(1_000.0, 2_000.0, 1_000.0);

        steady.frame(0.0);
        throttled.frame(0.0);
        let after_short_gap = steady.frame(16.0);
        let after_long_gap = throttled.frame(48.0);

        assert!(after_long_gap > after_short_gap);
    }

    #[test]
    fn settled_state_stops_requesting_frames() {
        let mut state = ScrollState::default();
        assert!(!state.needs_frames());

        state.observe(0.0, 800.0, 800.0);
        assert!(!state.needs_frames());
    }

    #[test]
    fn resting_spring_does_not_move() {
        let mut spring = Spring::new(PROGRESS_SPRING, 0.25);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(FRAME), 0.25);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = Spring::new(PROGRESS_SPRING, 0.0);
        capped.set_target(1.0);
        let mut reference = capped;

        capped.step(5.0);
        reference.step(MAX_FRAME);
        assert_eq!(capped, reference);
    }
}
