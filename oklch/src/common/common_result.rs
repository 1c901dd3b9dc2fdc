// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Used at the application edges (reading input, loading settings, writing output).
///   Per color literal failures never show up here, see
///   [`crate::ConvertError`] and [`crate::FailureReport`].
pub type CommonResult<T> = miette::Result<T>;
