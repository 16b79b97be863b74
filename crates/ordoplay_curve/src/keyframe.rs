// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe definitions for curves.

use serde::{Deserialize, Serialize};

/// Interpolation mode between keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum InterpolationMode {
    /// Constant (step)
    Constant,
    /// Linear interpolation
    #[default]
    Linear,
    /// Cubic Hermite using the keys' tangents
    Hermite,
}

/// A keyframe in a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Time in seconds
    pub time: f32,
    /// Value at this keyframe
    pub value: f32,
    /// Interpolation mode to next keyframe
    pub interpolation: InterpolationMode,
    /// Incoming slope (value per second)
    pub in_tangent: f32,
    /// Outgoing slope (value per second)
    pub out_tangent: f32,
}

impl Keyframe {
    /// Create a new keyframe
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            interpolation: InterpolationMode::Linear,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    /// Set interpolation mode
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    /// Set tangents for Hermite interpolation
    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }

    /// Value between this key and `next` at normalized position `t`
    pub fn interpolate(&self, next: &Keyframe, t: f32) -> f32 {
        match self.interpolation {
            InterpolationMode::Constant => self.value,
            InterpolationMode::Linear => Interpolation::lerp(self.value, next.value, t),
            InterpolationMode::Hermite => {
                let dt = next.time - self.time;
                Interpolation::hermite(
                    self.value,
                    self.out_tangent * dt,
                    next.value,
                    next.in_tangent * dt,
                    t,
                )
            }
        }
    }
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two floats
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Hermite spline interpolation
    pub fn hermite(p0: f32, m0: f32, p1: f32, m1: f32, t: f32) -> f32 {
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
    }
}
