use serde::{Deserialize, Serialize};

const STEP_SECS: f64 = 1.0 / 240.0;
const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

/// Damped spring that follows a moving target; used to smooth the scroll
/// progress for the side indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_resting(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advances by `dt_secs`, integrating in fixed sub-steps. Long frames
    /// (background tabs) are capped so the spring never explodes.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if self.is_resting() {
            return self.position;
        }
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;
        let mass = mass.max(f64::EPSILON);

        let mut remaining = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(STEP_SECS);
            let force = -stiffness * (self.position - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.position - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, secs: f64) {
        let frames = (secs * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_converges_and_rests() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        assert!(!spring.is_resting());

        run(&mut spring, 0.25);
        let midway = spring.position();
        assert!(midway > 0.0 && midway < 1.0);

        run(&mut spring, 3.0);
        assert_eq!(spring.position(), 1.0);
        assert!(spring.is_resting());
    }

    #[test]
    fn test_overdamped_default_does_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        for _ in 0..300 {
            let p = spring.step(1.0 / 60.0);
            assert!((0.0..=1.0).contains(&p), "overshot to {p}");
        }
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let p = spring.step(30.0);
        // a single capped frame cannot finish the motion
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn test_follows_retargeting() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        run(&mut spring, 0.5);
        spring.set_target(0.25);
        run(&mut spring, 4.0);
        assert_eq!(spring.position(), 0.25);
    }
}
