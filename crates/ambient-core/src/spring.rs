//! Damped-oscillator smoothing for a single scalar.
//!
//! Each axis of the cursor halo, and each animated halo property, is driven
//! by its own [`Spring`]. Integration is semi-implicit Euler over fixed
//! sub-steps, so the result does not depend on the display refresh rate.

use crate::config::positive;
use crate::constants::*;
use crate::error::{AmbientError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Halo position: short, smooth catch-up without overshoot.
    pub const POSITION: SpringConfig = SpringConfig {
        stiffness: POSITION_SPRING_STIFFNESS,
        damping: POSITION_SPRING_DAMPING,
        mass: SPRING_MASS,
    };

    /// Halo size/opacity/fill: softer, with a little give.
    pub const APPEARANCE: SpringConfig = SpringConfig {
        stiffness: APPEARANCE_SPRING_STIFFNESS,
        damping: APPEARANCE_SPRING_DAMPING,
        mass: SPRING_MASS,
    };

    /// Critically damped profile for the given stiffness and mass.
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    /// ζ = c / (2·sqrt(k·m)); 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> Result<()> {
        positive("spring.stiffness", self.stiffness)?;
        positive("spring.mass", self.mass)?;
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(AmbientError::InvalidTuning {
                field: "spring.damping",
                reason: "must be finite and >= 0",
            });
        }
        // semi-implicit Euler over a fixed sub-step h is stable while
        // (k/m)·h² + 2·(c/m)·h < 4; keep ω·h below 1 for accuracy as well
        let h = SPRING_SUBSTEP_SEC;
        let omega_sq = self.stiffness / self.mass;
        if omega_sq.sqrt() * h >= 1.0 {
            return Err(AmbientError::InvalidTuning {
                field: "spring.stiffness",
                reason: "too stiff for the integration sub-step",
            });
        }
        if omega_sq * h * h + 2.0 * (self.damping / self.mass) * h >= 4.0 {
            return Err(AmbientError::InvalidTuning {
                field: "spring.damping",
                reason: "too heavily damped for the integration sub-step",
            });
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig::POSITION
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Move value and target to `value` with no motion.
    pub fn jump_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance by `dt_sec` and return the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
        } = self.config;
        let mut remaining = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, SPRING_MAX_DT_SEC)
        } else {
            0.0
        };
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let displacement = self.value - self.target;
            let accel = (-k * displacement - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
