//! Infrastructure Layer: Debugging
//!
//! Provides debugging utilities for the large integer codec.
//!
//! This crate provides infrastructure for debugging:
//! - Debug output utilities (similar to printf debugging)
//! - Word group formatting for tracing encode and decode steps
//! - Debug state management, including initialisation from the environment

pub mod debug_utils;

pub use debug_utils::{DebugError, DebugLevel, DebugUtils, DEBUG_ENV_VAR};
