// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod convert;
pub mod failure_report;

// Re-export.
pub use convert::*;
pub use failure_report::*;
