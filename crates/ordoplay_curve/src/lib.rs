// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframed animation curves for `OrdoPlay`.
//!
//! This crate provides the curve model shared by the sequencer and runtime:
//! - Scalar curves with per-key interpolation
//! - Pre/post wrap modes (clamp, loop, ping-pong)
//! - 2D and 3D vector curves edited axis by axis
//!
//! ## Architecture
//!
//! A curve is an ordered list of keyframes:
//! - Keys stay sorted by time
//! - Editing a key's value never touches its time or tangents
//! - Vector curves are independent per-axis curves sharing key indices

pub mod curve;
pub mod error;
pub mod keyframe;
pub mod vector;

pub use curve::{AnimationCurve, WrapMode};
pub use error::CurveError;
pub use keyframe::{Interpolation, InterpolationMode, Keyframe};
pub use vector::{Vector2Curve, Vector3Curve};
