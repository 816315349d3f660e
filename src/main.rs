// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! greenops-chat - chat with the Green-Ops assistant from your terminal
//!
//! Entry point for the greenops-chat CLI application.

use std::io;
use std::sync::Arc;

use clap::Parser;

use greenops_chat::cli::{Cli, Commands};
use greenops_chat::commands;
use greenops_chat::config::Settings;
use greenops_chat::endpoint::{AnsweringEndpoint, HttpEndpoint};
use greenops_chat::error::Result;
use greenops_chat::tui::run_chat_tui;

#[path = "main/logging.rs"]
mod logging;

use logging::{init_tracing, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal widget owns the screen, so its logs go to a file.
    let sink = match cli.command {
        None | Some(Commands::Chat(_)) => LogSink::File(Settings::log_path()),
        Some(_) => LogSink::Stderr,
    };
    init_tracing(cli.verbose, sink);

    if let Some(Commands::Config(action)) = &cli.command {
        return commands::config::execute(&cli, action, &mut io::stdout());
    }

    let settings = cli.load_settings()?;

    match &cli.command {
        None | Some(Commands::Chat(_)) => {
            let endpoint: Arc<dyn AnsweringEndpoint> =
                Arc::new(HttpEndpoint::from_config(&settings.endpoint)?);
            run_chat_tui(&settings, endpoint).await?;
        }
        Some(Commands::Ask(args)) => {
            let endpoint = HttpEndpoint::from_config(&settings.endpoint)?;
            let status = commands::ask::execute(
                &args.question(),
                &settings.widget,
                &endpoint,
                &mut io::stdout(),
            )
            .await?;
            if status.exit_code() != 0 {
                std::process::exit(status.exit_code());
            }
        }
        Some(Commands::Config(_)) => {}
    }

    Ok(())
}
