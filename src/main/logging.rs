// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log output goes
pub(crate) enum LogSink {
    Stderr,
    File(PathBuf),
}

/// Build the filter: WARN by default, `-v` turns on this crate's debug
/// targets. `RUST_LOG` directives are respected.
pub(crate) fn build_filter(verbose: u8) -> EnvFilter {
    let mut env_filter =
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    if verbose > 0 {
        let mut directives = vec![
            "greenops.widget=debug",
            "greenops.endpoint=debug",
            "greenops_chat=debug",
        ];
        if verbose > 1 {
            directives.push("reqwest=debug");
        }
        for directive in directives {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }
    env_filter
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub(crate) fn init_tracing(verbose: u8, sink: LogSink) {
    let env_filter = build_filter(verbose);

    match sink {
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogSink::File(path) => match open_log_file(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
            }
            // Writing to the terminal would corrupt the widget; drop logs instead.
            Err(_) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_writer(std::io::sink)
                    .init();
            }
        },
    }
}
