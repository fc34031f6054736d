// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use miette::IntoDiagnostic;
use std::io::Write;
use tabline::{CRLF, CommonResult, OutputDevice, ReadlineAsyncContext, ReadlineEvent,
              demo::{CLIArg, DemoCompleter, ReplAction, process_line},
              lock_output_device_as_mut, set_mimalloc_in_main, throws,
              try_initialize_logging_global};

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    set_mimalloc_in_main!();

    throws!({
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        run_repl(cli_arg).await?;

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}

async fn run_repl(cli_arg: CLIArg) -> CommonResult<()> {
    let options = cli_arg.global_options;

    let Some(mut rl_ctx) = ReadlineAsyncContext::try_new(Some(&options.prompt), DemoCompleter)?
    else {
        eprintln!("tabline needs an interactive terminal, stdin or stdout is piped");
        return Ok(());
    };
    rl_ctx
        .readline
        .show_completions_on_first_tab(options.list_on_first_tab);

    let output_device = rl_ctx.clone_output_device();
    print_raw(
        &output_device,
        &format!("Type `help` for the commands, press Tab to complete.{CRLF}"),
    )?;

    let mut history: Vec<String> = vec![];
    loop {
        match rl_ctx.read_line().await? {
            ReadlineEvent::Line(line) => {
                if !line.trim().is_empty() {
                    history.push(line.clone());
                }
                tracing::debug!(message = "line entered", line = ?line);
                match process_line(&line, &history) {
                    ReplAction::Print(text) => print_raw(&output_device, &text)?,
                    ReplAction::Exit => break,
                }
            }
            ReadlineEvent::Interrupted | ReadlineEvent::Resized => {}
            ReadlineEvent::Eof => break,
        }
    }

    Ok(())
}

/// Raw mode is on, so `text` has to carry its own `\r\n`.
fn print_raw(output_device: &OutputDevice, text: &str) -> CommonResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    let term = lock_output_device_as_mut!(output_device);
    term.write_all(text.as_bytes()).into_diagnostic()?;
    term.flush().into_diagnostic()
}
