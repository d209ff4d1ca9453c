//! Common test utilities for evap-plots.
//!
//! This module provides shared fixtures and image checks for the figure tests.

pub mod assertions;
pub mod image_utils;
pub mod test_data;
