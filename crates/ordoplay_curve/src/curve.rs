// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scalar animation curves.

use crate::error::CurveError;
use crate::keyframe::{InterpolationMode, Keyframe};
use serde::{Deserialize, Serialize};

/// How a curve behaves outside its key range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WrapMode {
    /// Hold the boundary value
    #[default]
    Once,
    /// Repeat from the start
    Loop,
    /// Play back and forth
    PingPong,
    /// Hold the boundary value forever
    ClampForever,
}

impl WrapMode {
    /// Whether the mode repeats the curve
    pub fn is_looping(self) -> bool {
        matches!(self, Self::Loop | Self::PingPong)
    }

    /// Map `time` into `[start, end]`
    fn apply(self, time: f32, start: f32, end: f32) -> f32 {
        let span = end - start;
        if span <= 0.0 {
            return start;
        }

        match self {
            Self::Loop => start + (time - start).rem_euclid(span),
            Self::PingPong => {
                let cycle = (time - start).rem_euclid(span * 2.0);
                if cycle > span {
                    start + 2.0 * span - cycle
                } else {
                    start + cycle
                }
            }
            Self::Once | Self::ClampForever => time.clamp(start, end),
        }
    }
}

/// A curve of keyframes sorted by time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CurveData")]
pub struct AnimationCurve {
    /// Keyframes, ascending by time
    keys: Vec<Keyframe>,
    /// Behavior before the first key
    pub pre_wrap_mode: WrapMode,
    /// Behavior after the last key
    pub post_wrap_mode: WrapMode,
}

/// Deserialized form; keys are re-sorted on load
#[derive(Deserialize)]
struct CurveData {
    keys: Vec<Keyframe>,
    #[serde(default)]
    pre_wrap_mode: WrapMode,
    #[serde(default)]
    post_wrap_mode: WrapMode,
}

impl From<CurveData> for AnimationCurve {
    fn from(data: CurveData) -> Self {
        let mut curve = Self::from_keys(data.keys);
        curve.pre_wrap_mode = data.pre_wrap_mode;
        curve.post_wrap_mode = data.post_wrap_mode;
        curve
    }
}

impl AnimationCurve {
    /// Create an empty curve
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curve from keys in any order
    pub fn from_keys(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Straight line from `(time_start, value_start)` to `(time_end, value_end)`
    pub fn linear(time_start: f32, value_start: f32, time_end: f32, value_end: f32) -> Self {
        let duration = time_end - time_start;
        let slope = if duration == 0.0 {
            0.0
        } else {
            (value_end - value_start) / duration
        };

        Self::from_keys(vec![
            Keyframe::new(time_start, value_start).with_tangents(0.0, slope),
            Keyframe::new(time_end, value_end).with_tangents(slope, 0.0),
        ])
    }

    /// Flat curve holding `value` between the two times
    pub fn constant(time_start: f32, time_end: f32, value: f32) -> Self {
        Self::from_keys(vec![
            Keyframe::new(time_start, value).with_interpolation(InterpolationMode::Constant),
            Keyframe::new(time_end, value).with_interpolation(InterpolationMode::Constant),
        ])
    }

    /// Set both wrap modes
    pub fn with_wrap_mode(mut self, mode: WrapMode) -> Self {
        self.pre_wrap_mode = mode;
        self.post_wrap_mode = mode;
        self
    }

    /// Insert a key, keeping time order; returns its index
    pub fn add_key(&mut self, key: Keyframe) -> usize {
        let index = self.keys.partition_point(|k| k.time <= key.time);
        self.keys.insert(index, key);
        index
    }

    /// Remove and return the key at `index`
    pub fn remove_key(&mut self, index: usize) -> Result<Keyframe, CurveError> {
        self.check_index(index)?;
        Ok(self.keys.remove(index))
    }

    /// Overwrite the value of the key at `index`.
    ///
    /// Time, tangents and interpolation mode are left as they are.
    pub fn edit_keyframe_value(&mut self, index: usize, value: f32) -> Result<(), CurveError> {
        self.check_index(index)?;
        tracing::trace!("Keyframe {} value {} -> {}", index, self.keys[index].value, value);
        self.keys[index].value = value;
        Ok(())
    }

    /// Key at `index`
    pub fn key(&self, index: usize) -> Option<&Keyframe> {
        self.keys.get(index)
    }

    /// All keys in time order
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether playback repeats after the last key
    pub fn is_looping(&self) -> bool {
        self.post_wrap_mode.is_looping()
    }

    /// Time of the last key, or zero for an empty curve
    pub fn max_time(&self) -> f32 {
        self.keys.last().map(|k| k.time).unwrap_or(0.0)
    }

    /// Evaluate the curve at `time`, applying the wrap modes
    pub fn evaluate(&self, time: f32) -> Option<f32> {
        let first = self.keys.first()?;
        let last = self.keys.last()?;

        let time = if time < first.time {
            self.pre_wrap_mode.apply(time, first.time, last.time)
        } else if time > last.time {
            self.post_wrap_mode.apply(time, first.time, last.time)
        } else {
            time
        };

        Some(self.sample(time))
    }

    /// Sample inside the key range
    fn sample(&self, time: f32) -> f32 {
        let next = self.keys.partition_point(|k| k.time <= time);

        match next {
            0 => self.keys[0].value,
            n if n == self.keys.len() => self.keys[n - 1].value,
            n => {
                let a = &self.keys[n - 1];
                let b = &self.keys[n];
                let t = (time - a.time) / (b.time - a.time);
                a.interpolate(b, t)
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), CurveError> {
        if index < self.keys.len() {
            Ok(())
        } else {
            tracing::debug!("Keyframe index {} out of range ({} keys)", index, self.keys.len());
            Err(CurveError::IndexOutOfRange {
                index,
                len: self.keys.len(),
            })
        }
    }
}
