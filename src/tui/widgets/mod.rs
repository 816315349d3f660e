// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI widgets for the chat terminal

pub mod input_area;
pub mod message;
pub mod status_bar;

pub use input_area::{split_input_row, InputArea, SendButtonWidget, SEND_LABEL};
pub use message::{render_messages, MessageWidget};
pub use status_bar::StatusBar;
