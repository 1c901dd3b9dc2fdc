// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glue between [`CLIArg`] and [`convert`]: read the input, convert it, write the
//! result, and tell the user about anything that could not be converted.

use std::{fs,
          io::{Read, Write},
          path::Path};

use miette::{IntoDiagnostic, WrapErr};

use crate::{CommonResult, ConvertReport, convert,
            oklch_convert::{CLIArg, Settings, ui_str}};

/// Runs the whole `oklch-convert` flow for `cli_arg`. Literals that can't be converted
/// are reported on stderr, they are not an error.
///
/// # Errors
///
/// Returns an error for I/O failures, and for a settings file that can't be loaded.
pub fn run(cli_arg: &CLIArg) -> CommonResult<()> {
    let settings = Settings::try_load(cli_arg.config.as_deref())?;
    let convert_options = cli_arg.to_convert_options(&settings);

    let text = read_input(cli_arg.path.as_deref())?;
    let report = convert(&text, &convert_options);

    let input_name = cli_arg.path.as_deref().map_or_else(
        || ui_str::STDIN_DISPLAY_NAME.to_string(),
        |it| it.display().to_string(),
    );
    // % is Display, ? is Debug.
    tracing::debug!(
        message = "run",
        input = %input_name,
        convert_options = ?convert_options,
        matched_token_count = report.matched_token_count
    );

    write_output(cli_arg, &text, &report)?;
    write_failures_file(cli_arg.failures_file.as_deref(), &report)?;
    report_outcome(&report, &mut std::io::stderr()).into_diagnostic()?;

    Ok(())
}

/// # Errors
///
/// Returns an error if the file or stdin can't be read as UTF-8 text.
pub fn read_input(maybe_path: Option<&Path>) -> CommonResult<String> {
    match maybe_path {
        Some(path) => fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .into_diagnostic()
                .wrap_err("Could not read stdin")?;
            Ok(text)
        }
    }
}

/// With `--in-place` the file is only written when something changed. Otherwise the
/// result (possibly identical to the input) goes to stdout.
///
/// # Errors
///
/// Returns an error if the output can't be written.
pub fn write_output(
    cli_arg: &CLIArg,
    text: &str,
    report: &ConvertReport,
) -> CommonResult<()> {
    if let (true, Some(path)) = (cli_arg.in_place, cli_arg.path.as_deref()) {
        if report.rewritten != text {
            fs::write(path, &report.rewritten)
                .into_diagnostic()
                .wrap_err_with(|| format!("Could not write file: {}", path.display()))?;
        }
        let converted = report.matched_token_count - report.failures.len();
        eprintln!(
            "{}",
            ui_str::format_in_place_summary(path, converted, report.matched_token_count)
        );
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.rewritten.as_bytes())
        .and_then(|()| stdout.flush())
        .into_diagnostic()
        .wrap_err("Could not write to stdout")
}

/// Write [`crate::FailureReport::full_listing`] to `maybe_path`, if there are any
/// failures.
///
/// # Errors
///
/// Returns an error if the file can't be written.
pub fn write_failures_file(
    maybe_path: Option<&Path>,
    report: &ConvertReport,
) -> CommonResult<()> {
    let Some(path) = maybe_path else {
        return Ok(());
    };
    if report.failures.is_empty() {
        return Ok(());
    }

    let mut content = report.failures.full_listing();
    content.push('\n');
    fs::write(path, content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not write failures file: {}", path.display()))?;

    eprintln!(
        "{}",
        ui_str::format_failures_file_written(path, report.failures.len())
    );
    Ok(())
}

/// The "nothing to do" message, or the failure summary (plus a hint when it was
/// truncated). Writes nothing when every literal was converted.
///
/// # Errors
///
/// Returns an error if `writer` fails.
pub fn report_outcome(
    report: &ConvertReport,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    if report.is_no_match() {
        writeln!(writer, "{}", ui_str::NO_COLOR_DEFINITIONS_FOUND)?;
        return Ok(());
    }

    if let Some(summary_message) = report.failures.summary_message() {
        writeln!(writer, "{summary_message}")?;
        if report.failures.is_truncated() {
            writeln!(
                writer,
                "{}",
                ui_str::format_truncation_hint(report.failures.len())
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertOptions;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    fn outcome(text: &str) -> String {
        let report = convert(text, &ConvertOptions::default());
        let mut buffer = Vec::new();
        report_outcome(&report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_no_match() {
        assert_eq!(
            outcome("margin: 0;"),
            "No color definitions found in the selected text.\n"
        );
    }

    #[test]
    fn test_report_all_converted() {
        assert_eq!(outcome("color: red;"), "");
    }

    #[test]
    fn test_report_failures() {
        let invalid = format!("lab({}, 0, 0)", "9".repeat(400));
        let text = format!("a: red;\nb: {invalid};");
        assert_eq!(outcome(&text), format!("Cannot convert colors: {invalid}.\n"));
    }

    #[test]
    fn test_report_truncated_failures() {
        let invalid = format!("lab({}, 0, 0)", "9".repeat(400));
        let text = format!("{invalid};\n").repeat(101);
        let message = outcome(&text);
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("first 100 of 101"));
    }

    #[test]
    fn test_in_place_and_failures_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let css_path = temp_dir.path().join("styles.css");
        let failures_path = temp_dir.path().join("failures.txt");
        let settings_path = temp_dir.path().join("settings.json");
        let invalid = format!("lab({}, 0, 0)", "9".repeat(400));
        fs::write(&css_path, format!("a {{ color: navy;\n  b: {invalid};\n}}")).unwrap();
        fs::write(&settings_path, r#"{ "useOpacity": false }"#).unwrap();

        let cli_arg = CLIArg::try_parse_from([
            OsStr::new("oklch-convert"),
            css_path.as_os_str(),
            OsStr::new("--in-place"),
            OsStr::new("--config"),
            settings_path.as_os_str(),
            OsStr::new("--failures-file"),
            failures_path.as_os_str(),
        ])
        .unwrap();
        run(&cli_arg).unwrap();

        assert_eq!(
            fs::read_to_string(&css_path).unwrap(),
            format!("a {{ color: oklch(0.27 0.19 264.05);\n  b: {invalid};\n}}")
        );
        assert_eq!(
            fs::read_to_string(&failures_path).unwrap(),
            format!("{invalid}\n")
        );
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_input(Some(temp_dir.path().join("missing.css").as_path()));
        assert!(result.is_err());
    }
}
