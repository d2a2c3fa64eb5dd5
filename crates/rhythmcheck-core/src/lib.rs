//! # Rhythmcheck Core Library
//!
//! This library provides the evaluation engine for Rhythmcheck, a
//! self-assessment tool that scores a household's daily routine (sleep,
//! study, exercise, screen time, reading) against age-appropriate
//! reference ranges. All decision logic lives here; the CLI binary is a
//! thin presentation layer over the same core library.
//!
//! The core is a purely functional, synchronous computation: reference
//! tables are built once and passed by read-only reference into
//! [`evaluate`], every request is independent, and nothing is persisted.
//! Feedback is qualitative and softly worded, not clinical advice.
//!
//! ## Key Components
//!
//! - [`ReferenceModel`]: grade bands with per-dimension acceptable ranges
//! - [`evaluate`]: raw measurements in, per-item ratings and an overall
//!   grade out
//! - [`ItemResult`] / [`OverallResult`]: structured results for display
//! - [`EvaluationError`]: typed, user-correctable input failures

pub mod engine;
pub mod error;
pub mod model;
pub mod rating;
pub mod scoring;
pub mod sleep;

pub use engine::{evaluate, Evaluation, EvaluationInput};
pub use error::{EvaluationError, TimeField};
pub use model::{Dimension, GradeBand, HourRange, InputKind, ReferenceModel};
pub use rating::{evaluate_item, ItemResult};
pub use scoring::{calculate_overall, GradeCutoffs, LetterGrade, OverallResult};
