// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Settings, SubmissionPolicy};
use crate::error::Result;

/// greenops-chat - ask the Green-Ops assistant from your terminal
#[derive(Parser, Debug)]
#[command(name = "greenops-chat")]
#[command(version, about = "Chat with the Green-Ops inventory assistant")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the answering service (overrides settings and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Settings file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the chat widget (default when no command given)
    Chat(ChatArgs),

    /// Ask a single question and print the answer
    Ask(AskArgs),

    /// Inspect or create the settings file
    #[command(subcommand)]
    Config(ConfigAction),
}

/// Arguments for the chat command
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    /// Disable the send button while a question is outstanding
    #[arg(long)]
    pub serialized: bool,
}

/// Arguments for the ask command
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question; several words are joined with spaces
    #[arg(required = true, num_args = 1.., value_name = "QUESTION")]
    pub question: Vec<String>,
}

impl AskArgs {
    pub fn question(&self) -> String {
        self.question.join(" ")
    }
}

/// Settings file actions
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file location
    Path,
    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Settings file this invocation reads
    pub fn settings_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }

    /// Settings file, then environment, then command-line flags. Not validated.
    pub fn effective_settings(&self) -> Result<Settings> {
        let mut settings = Settings::load_from(&self.settings_path())?;
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    /// Effective settings, validated after every override is in place
    pub fn load_settings(&self) -> Result<Settings> {
        let settings = self.effective_settings()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint.base_url = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.endpoint.timeout_secs = Some(timeout);
        }
        if let Some(Commands::Chat(args)) = &self.command {
            if args.serialized {
                settings.widget.submission_policy = SubmissionPolicy::Serialized;
            }
        }
    }
}
