//! Meteor shower particle simulation.
//!
//! Meteors are short streaks that enter from the top or left edge of the
//! drawing surface and travel diagonally (45°, down and to the right) until
//! they leave through the right or bottom edge. How often new meteors appear is
//! controlled by a single rate in `[0, 100]`; the loading page feeds it the
//! current progress percentage so the shower intensifies as the build nears
//! completion.
//!
//! The simulation is renderer-agnostic: [`MeteorShower::step`] advances every
//! meteor and returns the trail segments to draw for the frame.
//!
//! ```rust
//! use vidjalsa_core::meteor::{Bounds, MeteorConfig, MeteorShower};
//!
//! let mut shower = MeteorShower::new(MeteorConfig::default());
//! let mut rng = fastrand::Rng::with_seed(1);
//! let bounds = Bounds::new(1280.0, 720.0);
//!
//! for _ in 0..60 {
//!     for trail in shower.step(bounds, 16.0, 75.0, &mut rng) {
//!         assert!(trail.head_x >= trail.tail_x);
//!     }
//! }
//! ```

use std::f64::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

/// Direction of travel for every meteor (down-right).
pub const METEOR_ANGLE: f64 = FRAC_PI_4;

/// Frame time at which a rate of 100 spawns one meteor on average, in milliseconds.
pub const SPAWN_WINDOW_MS: f64 = 50.0;

/// Source of uniformly distributed numbers in `[0, 1)`.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// Meteor shower tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeteorConfig {
    /// Frame time at which a rate of 100 spawns one meteor on average.
    pub spawn_window_ms: f64,
    /// Shortest trail length.
    pub min_length: f64,
    /// Longest trail length.
    pub max_length: f64,
    /// Slowest speed, in pixels per frame.
    pub min_speed: f64,
    /// Fastest speed, in pixels per frame.
    pub max_speed: f64,
    /// Radius of the glowing head.
    pub head_radius: f64,
    /// Shadow blur around the head.
    pub glow_blur: f64,
    /// Stroke width of the trail.
    pub trail_width: f64,
    /// Opacity of the trail where it meets the head.
    pub trail_opacity: f64,
}

impl Default for MeteorConfig {
    fn default() -> Self {
        Self {
            spawn_window_ms: SPAWN_WINDOW_MS,
            min_length: 30.0,
            max_length: 80.0,
            min_speed: 5.0,
            max_speed: 10.0,
            head_radius: 3.0,
            glow_blur: 10.0,
            trail_width: 2.0,
            trail_opacity: 0.3,
        }
    }
}

impl MeteorConfig {
    /// Chance of spawning a meteor on a frame that lasted `delta_ms`.
    #[must_use]
    pub fn spawn_probability(&self, rate: f64, delta_ms: f64) -> f64 {
        (rate / 100.0) * (delta_ms / self.spawn_window_ms)
    }
}

/// Chance of spawning a meteor on a frame that lasted `delta_ms`, at `rate` in `[0, 100]`.
///
/// Values above 1 are possible for long frames and simply mean a spawn is certain.
#[must_use]
pub fn spawn_probability(rate: f64, delta_ms: f64) -> f64 {
    (rate / 100.0) * (delta_ms / SPAWN_WINDOW_MS)
}

/// Size of the drawing surface in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Bounds {
    /// Bounds of a `width` x `height` surface.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Line from the faded end of a trail to the meteor's head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    /// Transparent end of the trail.
    pub tail_x: f64,
    /// Transparent end of the trail.
    pub tail_y: f64,
    /// Position of the glowing head.
    pub head_x: f64,
    /// Position of the glowing head.
    pub head_y: f64,
}

/// A single streak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meteor {
    /// Head position.
    pub x: f64,
    /// Head position.
    pub y: f64,
    /// Trail length.
    pub length: f64,
    /// Distance travelled per frame.
    pub speed: f64,
    /// Direction of travel in radians.
    pub angle: f64,
}

impl Meteor {
    /// Move one frame forward and return the trail to draw.
    pub fn advance(&mut self) -> TrailSegment {
        let (sin, cos) = self.angle.sin_cos();
        self.x += cos * self.speed;
        self.y += sin * self.speed;

        TrailSegment {
            tail_x: self.x - cos * self.length,
            tail_y: self.y - sin * self.length,
            head_x: self.x,
            head_y: self.y,
        }
    }

    /// Whether the head has not yet passed the right or bottom edge.
    #[must_use]
    pub fn is_within(&self, bounds: Bounds) -> bool {
        self.x <= bounds.width && self.y <= bounds.height
    }
}

/// All live meteors plus the spawning policy.
#[derive(Debug, Clone, Default)]
pub struct MeteorShower {
    meteors: Vec<Meteor>,
    config: MeteorConfig,
}

impl MeteorShower {
    /// Create an empty shower.
    #[must_use]
    pub const fn new(config: MeteorConfig) -> Self {
        Self {
            meteors: Vec::new(),
            config,
        }
    }

    /// Advance one frame.
    ///
    /// Every live meteor moves and contributes a trail segment, including the
    /// ones leaving the surface on this frame; those are dropped afterwards.
    /// Then at most one new meteor is spawned, which is first drawn on the
    /// next frame.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        bounds: Bounds,
        delta_ms: f64,
        rate: f64,
        rng: &mut R,
    ) -> Vec<TrailSegment> {
        let trails = self.meteors.iter_mut().map(Meteor::advance).collect();
        self.meteors.retain(|m| m.is_within(bounds));

        if rng.next_f64() < self.config.spawn_probability(rate, delta_ms) {
            self.spawn(bounds, rng);
        }

        trails
    }

    /// Add a meteor on the top or left edge.
    pub fn spawn<R: RandomSource + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) -> Meteor {
        let from_top = rng.next_f64() < 0.5;
        let (x, y) = if from_top {
            (rng.next_f64() * bounds.width, 0.0)
        } else {
            (0.0, rng.next_f64() * bounds.height)
        };

        let config = &self.config;
        let length = config.min_length + rng.next_f64() * (config.max_length - config.min_length);
        let speed = config.min_speed + rng.next_f64() * (config.max_speed - config.min_speed);

        let meteor = Meteor {
            x,
            y,
            length,
            speed,
            angle: METEOR_ANGLE,
        };
        self.meteors.push(meteor);
        meteor
    }

    /// Live meteors.
    #[must_use]
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// Number of live meteors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    /// Whether no meteor is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }

    /// Tunables in use.
    #[must_use]
    pub const fn config(&self) -> &MeteorConfig {
        &self.config
    }
}

/// Backing-store and CSS size of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Canvas `width` attribute.
    pub pixel_width: u32,
    /// Canvas `height` attribute.
    pub pixel_height: u32,
    /// CSS size to apply, or `None` to leave the element's style untouched.
    pub css_size: Option<(f64, f64)>,
    /// Scale to apply to the 2D context after sizing.
    pub scale: f64,
}

impl SurfaceSize {
    /// Initial sizing: backing store in device pixels, drawn in CSS pixels.
    #[must_use]
    pub fn for_viewport(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };

        Self {
            pixel_width: (width * ratio) as u32,
            pixel_height: (height * ratio) as u32,
            css_size: Some((width, height)),
            scale: ratio,
        }
    }

    /// Sizing applied on window resize.
    ///
    /// Only the backing store follows the window; the device pixel ratio is not
    /// reapplied and the context keeps its reset (unit) transform.
    #[must_use]
    pub fn after_resize(width: f64, height: f64) -> Self {
        Self {
            pixel_width: width as u32,
            pixel_height: height as u32,
            css_size: None,
            scale: 1.0,
        }
    }

    /// Meteor bounds for this surface.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(f64::from(self.pixel_width), f64::from(self.pixel_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(1000.0, 500.0);

    fn scripted(values: Vec<f64>) -> MockRandomSource {
        let mut values = values.into_iter();
        let mut rng = MockRandomSource::new();
        rng.expect_next_f64()
            .returning(move || values.next().unwrap_or(0.99));
        rng
    }

    #[test]
    fn test_spawn_probability_formula() {
        assert_eq!(spawn_probability(100.0, 50.0), 1.0);
        assert_eq!(spawn_probability(50.0, 50.0), 0.5);
        assert_eq!(spawn_probability(100.0, 25.0), 0.5);
        assert_eq!(spawn_probability(0.0, 1000.0), 0.0);
        assert_eq!(spawn_probability(80.0, 0.0), 0.0);
    }

    #[test]
    fn test_spawn_probability_is_monotonic() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..500 {
            let rate = rng.f64() * 100.0;
            let delta = rng.f64() * 100.0;
            let base = spawn_probability(rate, delta);
            assert!(spawn_probability(rate + 1.0, delta) > base || delta == 0.0);
            assert!(spawn_probability(rate, delta + 1.0) > base || rate == 0.0);
        }
    }

    #[test]
    fn test_config_probability_matches_free_function() {
        let config = MeteorConfig::default();
        assert_eq!(
            config.spawn_probability(42.0, 16.0),
            spawn_probability(42.0, 16.0)
        );
    }

    #[test]
    fn test_spawn_from_top_edge() {
        let mut shower = MeteorShower::default();
        // side (top), x, length, speed
        let mut rng = scripted(vec![0.2, 0.5, 0.0, 1.0]);

        let meteor = shower.spawn(BOUNDS, &mut rng);
        assert_eq!(meteor.x, 500.0);
        assert_eq!(meteor.y, 0.0);
        assert_eq!(meteor.length, 30.0);
        assert_eq!(meteor.speed, 10.0);
        assert_eq!(meteor.angle, METEOR_ANGLE);
        assert_eq!(shower.len(), 1);
    }

    #[test]
    fn test_spawn_from_left_edge() {
        let mut shower = MeteorShower::default();
        // side (left), y, length, speed
        let mut rng = scripted(vec![0.7, 0.25, 0.5, 0.5]);

        let meteor = shower.spawn(BOUNDS, &mut rng);
        assert_eq!(meteor.x, 0.0);
        assert_eq!(meteor.y, 125.0);
        assert_eq!(meteor.length, 55.0);
        assert_eq!(meteor.speed, 7.5);
    }

    #[test]
    fn test_spawned_ranges() {
        let mut shower = MeteorShower::default();
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..1000 {
            let m = shower.spawn(BOUNDS, &mut rng);
            assert!((30.0..=80.0).contains(&m.length));
            assert!((5.0..=10.0).contains(&m.speed));
            assert!(m.x == 0.0 || m.y == 0.0);
            assert!(m.is_within(BOUNDS));
        }
    }

    #[test]
    fn test_advance_moves_along_diagonal() {
        let mut meteor = Meteor {
            x: 0.0,
            y: 0.0,
            length: 50.0,
            speed: 10.0,
            angle: METEOR_ANGLE,
        };
        let trail = meteor.advance();
        let step = 10.0 * METEOR_ANGLE.cos();

        assert!((meteor.x - step).abs() < 1e-9);
        assert!((meteor.y - step).abs() < 1e-9);
        assert_eq!(trail.head_x, meteor.x);
        assert_eq!(trail.head_y, meteor.y);
        let trail_len = (trail.head_x - trail.tail_x).hypot(trail.head_y - trail.tail_y);
        assert!((trail_len - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_draws_then_removes_exiting_meteor() {
        let mut shower = MeteorShower::default();
        let mut rng = scripted(vec![0.9, 0.9, 0.0, 1.0]);
        // Spawn from the left at y = 450 with speed 10.
        shower.spawn(BOUNDS, &mut rng);

        let mut no_spawn = scripted(vec![]);
        let mut frames = 0;
        while !shower.is_empty() {
            let trails = shower.step(BOUNDS, 16.0, 0.0, &mut no_spawn);
            assert_eq!(trails.len(), 1, "exiting meteor is still drawn");
            frames += 1;
            assert!(frames < 100);
        }
        // y grows by ~7.07 per frame from 450: the head passes 500 on frame 8.
        assert_eq!(frames, 8);
    }

    #[test]
    fn test_heads_are_monotonic_and_removed_past_bounds() {
        let mut shower = MeteorShower::default();
        let mut rng = fastrand::Rng::with_seed(5);

        for _ in 0..2000 {
            let before = shower.meteors().to_vec();
            let trails = shower.step(BOUNDS, 16.0, 100.0, &mut rng);
            assert_eq!(trails.len(), before.len());

            for (old, trail) in before.iter().zip(&trails) {
                assert!(trail.head_x >= old.x);
                assert!(trail.head_y >= old.y);
            }
            for m in shower.meteors() {
                assert!(m.is_within(BOUNDS));
            }
        }
        assert!(shower.len() < 200);
    }

    #[test]
    fn test_step_spawns_when_draw_below_probability() {
        let mut shower = MeteorShower::default();
        // spawn draw 0.3 < 0.32 (rate 100, 16ms), then side/pos/length/speed
        let mut rng = scripted(vec![0.3, 0.1, 0.1, 0.1, 0.1]);
        let trails = shower.step(BOUNDS, 16.0, 100.0, &mut rng);

        assert!(trails.is_empty(), "new meteor is drawn on the next frame");
        assert_eq!(shower.len(), 1);
    }

    #[test]
    fn test_step_does_not_spawn_above_probability() {
        let mut shower = MeteorShower::default();
        let mut rng = scripted(vec![0.5]);
        shower.step(BOUNDS, 16.0, 100.0, &mut rng);
        assert!(shower.is_empty());
    }

    #[test]
    fn test_zero_rate_never_spawns() {
        let mut shower = MeteorShower::default();
        let mut rng = scripted(vec![0.0; 10]);
        for _ in 0..10 {
            shower.step(BOUNDS, 1000.0, 0.0, &mut rng);
        }
        assert!(shower.is_empty());
    }

    #[test]
    fn test_higher_rate_spawns_more() {
        // Nothing ever leaves these bounds, so the live count is the spawn count.
        let spawned = |rate: f64| {
            let mut shower = MeteorShower::default();
            let mut rng = fastrand::Rng::with_seed(9);
            for _ in 0..2000 {
                shower.step(Bounds::new(1.0e9, 1.0e9), 16.0, rate, &mut rng);
            }
            shower.len()
        };
        assert!(spawned(90.0) > spawned(10.0));
    }

    #[test]
    fn test_surface_size_for_viewport() {
        let size = SurfaceSize::for_viewport(1280.0, 720.0, 2.0);
        assert_eq!(size.pixel_width, 2560);
        assert_eq!(size.pixel_height, 1440);
        assert_eq!(size.css_size, Some((1280.0, 720.0)));
        assert_eq!(size.scale, 2.0);
        assert_eq!(size.bounds(), Bounds::new(2560.0, 1440.0));
    }

    #[test]
    fn test_surface_size_truncates_fractional_pixels() {
        let size = SurfaceSize::for_viewport(1001.0, 501.0, 1.5);
        assert_eq!(size.pixel_width, 1501);
        assert_eq!(size.pixel_height, 751);
    }

    #[test]
    fn test_surface_size_invalid_ratio_falls_back_to_one() {
        let size = SurfaceSize::for_viewport(800.0, 600.0, 0.0);
        assert_eq!(size.pixel_width, 800);
        assert_eq!(size.scale, 1.0);
    }

    #[test]
    fn test_resize_ignores_device_pixel_ratio() {
        let size = SurfaceSize::after_resize(1024.0, 768.0);
        assert_eq!(size.pixel_width, 1024);
        assert_eq!(size.pixel_height, 768);
        assert_eq!(size.css_size, None);
        assert_eq!(size.scale, 1.0);
    }
}
