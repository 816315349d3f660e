// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings file command

use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction};
use crate::config::Settings;
use crate::error::{ChatError, Result};

/// Execute a config action for the settings file this invocation uses.
///
/// Only `show` reads the file, so `path` and `init --force` still work when
/// it is broken.
pub fn execute<W: Write>(cli: &Cli, action: &ConfigAction, out: &mut W) -> Result<()> {
    let path = cli.settings_path();
    match action {
        ConfigAction::Show => {
            let settings = cli.effective_settings()?;
            if let Err(e) = settings.validate() {
                tracing::warn!(error = %e, "settings are not valid");
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigAction::Init { force } => {
            write_defaults(&path, *force)?;
            writeln!(out, "Wrote {}", path.display())?;
        }
    }
    Ok(())
}

fn write_defaults(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ChatError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Settings::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default settings");
    Ok(())
}
