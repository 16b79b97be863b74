// SPDX-License-Identifier: MIT OR Apache-2.0
//! Vector curves built from one scalar curve per axis.
//!
//! Axes are independent; a key index refers to the same position in each
//! axis curve by convention. Edits check every axis before writing any.

use crate::curve::AnimationCurve;
use crate::error::CurveError;
use crate::keyframe::Keyframe;
use serde::{Deserialize, Serialize};

/// Fail unless `index` addresses a key in every curve
fn check_axes(axes: &[&AnimationCurve], index: usize) -> Result<(), CurveError> {
    match axes.iter().find(|axis| index >= axis.len()) {
        Some(axis) => Err(CurveError::IndexOutOfRange {
            index,
            len: axis.len(),
        }),
        None => Ok(()),
    }
}

/// Two-axis curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2Curve {
    /// X axis
    pub x: AnimationCurve,
    /// Y axis
    pub y: AnimationCurve,
}

impl Vector2Curve {
    /// Create from per-axis curves
    pub fn new(x: AnimationCurve, y: AnimationCurve) -> Self {
        Self { x, y }
    }

    /// Add a key at `time` on every axis
    pub fn add_key(&mut self, time: f32, value: [f32; 2]) {
        self.x.add_key(Keyframe::new(time, value[0]));
        self.y.add_key(Keyframe::new(time, value[1]));
    }

    /// Overwrite the values of key `index` on each axis
    pub fn edit_keyframe_value(&mut self, index: usize, value: [f32; 2]) -> Result<(), CurveError> {
        check_axes(&[&self.x, &self.y], index)?;
        self.x.edit_keyframe_value(index, value[0])?;
        self.y.edit_keyframe_value(index, value[1])
    }

    /// Evaluate each axis at `time`
    pub fn evaluate(&self, time: f32) -> Option<[f32; 2]> {
        Some([self.x.evaluate(time)?, self.y.evaluate(time)?])
    }

    /// Latest key time over all axes
    pub fn max_time(&self) -> f32 {
        self.x.max_time().max(self.y.max_time())
    }

    /// Whether every axis loops
    pub fn is_looping(&self) -> bool {
        self.x.is_looping() && self.y.is_looping()
    }
}

/// Three-axis curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3Curve {
    /// X axis
    pub x: AnimationCurve,
    /// Y axis
    pub y: AnimationCurve,
    /// Z axis
    pub z: AnimationCurve,
}

impl Vector3Curve {
    /// Create from per-axis curves
    pub fn new(x: AnimationCurve, y: AnimationCurve, z: AnimationCurve) -> Self {
        Self { x, y, z }
    }

    /// Add a key at `time` on every axis
    pub fn add_key(&mut self, time: f32, value: [f32; 3]) {
        self.x.add_key(Keyframe::new(time, value[0]));
        self.y.add_key(Keyframe::new(time, value[1]));
        self.z.add_key(Keyframe::new(time, value[2]));
    }

    /// Overwrite the values of key `index` on each axis
    pub fn edit_keyframe_value(&mut self, index: usize, value: [f32; 3]) -> Result<(), CurveError> {
        check_axes(&[&self.x, &self.y, &self.z], index)?;
        self.x.edit_keyframe_value(index, value[0])?;
        self.y.edit_keyframe_value(index, value[1])?;
        self.z.edit_keyframe_value(index, value[2])
    }

    /// Evaluate each axis at `time`
    pub fn evaluate(&self, time: f32) -> Option<[f32; 3]> {
        Some([
            self.x.evaluate(time)?,
            self.y.evaluate(time)?,
            self.z.evaluate(time)?,
        ])
    }

    /// Latest key time over all axes
    pub fn max_time(&self) -> f32 {
        self.x.max_time().max(self.y.max_time()).max(self.z.max_time())
    }

    /// Whether every axis loops
    pub fn is_looping(&self) -> bool {
        self.x.is_looping() && self.y.is_looping() && self.z.is_looping()
    }
}
