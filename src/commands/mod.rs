// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Non-interactive subcommands
//!
//! Each command writes to a caller-supplied writer so it can be exercised
//! without a terminal.

pub mod ask;
pub mod config;
