// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! greenops-chat - terminal chat widget for the Green-Ops assistant.
//!
//! This crate exposes the runtime used by the `greenops-chat` binary:
//! - `widget`: the chat widget, its message model and the surfaces it drives
//! - `endpoint`: answering endpoint abstraction, HTTP client and test double
//! - `tui`: ratatui frontend implementing the widget surfaces
//! - `commands`: one-shot `ask` and `config` subcommands
//! - `config`, `cli`, `error`: settings, argument parsing and error types

pub mod cli;
pub mod commands;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod tui;
pub mod widget;

pub use error::{ChatError, EndpointError, Result};
