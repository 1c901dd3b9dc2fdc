// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The optional JSON settings file. Sample:
//!
//! ```json
//! { "always_show_alpha": false }
//! ```
//!
//! `useOpacity` is accepted as another name for `always_show_alpha`. Missing keys get
//! their default values.

use std::{fs,
          path::{Path, PathBuf}};

use dirs::config_dir;
use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{CommonResult, ConvertOptions};

pub const SETTINGS_FOLDER_NAME: &str = "r3bl-oklch";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// See [`ConvertOptions::always_show_alpha`].
    #[serde(alias = "useOpacity")]
    pub always_show_alpha: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let ConvertOptions { always_show_alpha } = ConvertOptions::default();
        Self { always_show_alpha }
    }
}

impl From<Settings> for ConvertOptions {
    fn from(settings: Settings) -> Self {
        Self {
            always_show_alpha: settings.always_show_alpha,
        }
    }
}

impl Settings {
    /// Pick the settings file in this order:
    /// 1. `explicit_path` (eg: from `--config`). It must exist.
    /// 2. [`try_get_settings_file_path`], if that file exists.
    /// 3. Otherwise [`Settings::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file can't be read or is not valid JSON.
    pub fn try_load(explicit_path: Option<&Path>) -> CommonResult<Self> {
        Self::try_load_with_fallback(explicit_path, try_get_settings_file_path())
    }

    /// Same as [`Settings::try_load`], with the fallback path passed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file can't be read or is not valid JSON.
    pub fn try_load_with_fallback(
        explicit_path: Option<&Path>,
        fallback_path: Option<PathBuf>,
    ) -> CommonResult<Self> {
        if let Some(path) = explicit_path {
            return Self::try_load_from_file(path);
        }

        match fallback_path {
            Some(path) if path.exists() => Self::try_load_from_file(&path),
            _ => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file can't be read or is not valid JSON.
    pub fn try_load_from_file(path: &Path) -> CommonResult<Self> {
        let content = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not read settings file: {}", path.display()))?;

        let settings: Self = serde_json::from_str(&content)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid settings file: {}", path.display()))?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Loaded settings file",
            path = ?path,
            settings = ?settings
        );

        Ok(settings)
    }
}

/// Eg: `~/.config/r3bl-oklch/settings.json` on Linux. [None] if the platform has no
/// config folder.
#[must_use]
pub fn try_get_settings_file_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(
        home_config_folder_path
            .join(SETTINGS_FOLDER_NAME)
            .join(SETTINGS_FILE_NAME),
    )
}
