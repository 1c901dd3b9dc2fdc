// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared plumbing used by the library and the `oklch-convert` binary.

pub mod common_result;
pub mod log_support;

pub use common_result::*;
pub use log_support::*;
