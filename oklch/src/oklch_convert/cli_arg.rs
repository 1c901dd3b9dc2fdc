// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for oklch-convert.

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing_core::LevelFilter;

use crate::{ConvertOptions, TracingConfig, WriterConfig, oklch_convert::Settings};

/// Rewrite CSS color literals as `oklch()` literals.
#[derive(Debug, Parser)]
#[command(
    name = "oklch-convert",
    about = "Rewrite CSS color literals as oklch() literals",
    long_about = "Finds named, hex, rgb(a), hsl(a), hwb, lab, and lch color literals in the \
                  input and replaces each one with an equivalent oklch() literal. \
                  Everything else in the input is left untouched.\n\n\
                  By default reads stdin and writes the result to stdout. Provide a PATH \
                  to read a file instead, and --in-place to write the result back to it.",
    version
)]
#[command(next_line_help = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct CLIArg {
    /// File to convert. Reads stdin when not provided.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write the result back to PATH instead of stdout
    #[arg(long, short = 'i', requires = "path")]
    pub in_place: bool,

    /// Settings file to use instead of the one in the user's config folder
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Always add the alpha segment, eg: `oklch(0.63 0.26 29.23 / 1)`
    #[arg(long, conflicts_with = "hide_opaque_alpha")]
    pub always_show_alpha: bool,

    /// Only add the alpha segment for colors that are not fully opaque
    #[arg(long)]
    pub hide_opaque_alpha: bool,

    /// Write every literal that could not be converted to FILE, one per line
    #[arg(long, value_name = "FILE")]
    pub failures_file: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    /// Log debug output to stderr
    #[arg(long, short = 'l')]
    pub enable_logging: bool,

    /// Log debug output to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl CLIArg {
    /// Settings file values, with the alpha flags (if any) taking precedence.
    #[must_use]
    pub fn to_convert_options(&self, settings: &Settings) -> ConvertOptions {
        let mut convert_options = ConvertOptions::from(*settings);
        if self.always_show_alpha {
            convert_options.always_show_alpha = true;
        }
        if self.hide_opaque_alpha {
            convert_options.always_show_alpha = false;
        }
        convert_options
    }

    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let GlobalOption {
            enable_logging,
            log_file,
        } = &self.global_options;

        match (log_file, enable_logging) {
            (Some(log_file), _) => TracingConfig {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::File(log_file.clone()),
            },
            (None, true) => TracingConfig {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Stderr,
            },
            (None, false) => TracingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> CLIArg {
        CLIArg::try_parse_from(std::iter::once("oklch-convert").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let cli_arg = parse(&[]);
        assert_eq!(cli_arg.path, None);
        assert!(!cli_arg.in_place);
        assert_eq!(
            cli_arg.to_convert_options(&Settings::default()),
            ConvertOptions::default()
        );
        assert_eq!(cli_arg.tracing_config(), TracingConfig::default());
    }

    #[test]
    fn test_alpha_flags_override_settings() {
        let show = Settings {
            always_show_alpha: true,
        };
        let hide = Settings {
            always_show_alpha: false,
        };

        let cli_arg = parse(&["--hide-opaque-alpha"]);
        assert!(!cli_arg.to_convert_options(&show).always_show_alpha);

        let cli_arg = parse(&["--always-show-alpha"]);
        assert!(cli_arg.to_convert_options(&hide).always_show_alpha);

        let cli_arg = parse(&[]);
        assert!(!cli_arg.to_convert_options(&hide).always_show_alpha);
    }

    #[test]
    fn test_conflicting_alpha_flags() {
        let result = CLIArg::try_parse_from([
            "oklch-convert",
            "--always-show-alpha",
            "--hide-opaque-alpha",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_in_place_requires_path() {
        assert!(CLIArg::try_parse_from(["oklch-convert", "--in-place"]).is_err());
        assert!(parse(&["--in-place", "styles.css"]).in_place);
    }

    #[test]
    fn test_tracing_config() {
        assert_eq!(
            parse(&["--enable-logging"]).tracing_config(),
            TracingConfig {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Stderr,
            }
        );
        assert_eq!(
            parse(&["--log-file", "oklch.log"]).tracing_config(),
            TracingConfig {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::File(PathBuf::from("oklch.log")),
            }
        );
    }
}
