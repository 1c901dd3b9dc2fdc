// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod color_space_transforms;
pub mod convert_error;
pub mod convert_literal;
pub mod format_oklch;
pub mod types;

// Re-export.
pub use color_space_transforms::*;
pub use convert_error::*;
pub use convert_literal::*;
pub use format_oklch::*;
pub use types::*;
