// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything behind the `oklch-convert` binary. The binary itself only parses
//! [`CLIArg`], sets up logging, and calls [`run`].

// Attach.
pub mod cli_arg;
pub mod run;
pub mod settings;
pub mod ui_str;

// Re-export.
pub use cli_arg::*;
pub use run::*;
pub use settings::*;
