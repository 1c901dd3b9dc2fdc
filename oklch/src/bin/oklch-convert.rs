// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_oklch::{CommonResult,
                 oklch_convert::{CLIArg, run},
                 try_initialize_logging_global};

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(cli_arg.tracing_config())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    run(&cli_arg)?;

    tracing::debug!(message = "Stop logging...");
    Ok(())
}
