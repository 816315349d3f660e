// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use ratatui::prelude::*;

use super::super::widgets::split_input_row;

/// Layout regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Layout {
    pub(super) title_bar: Rect,
    pub(super) chat: Rect,
    pub(super) input: Rect,
    pub(super) send_button: Rect,
}

pub(super) fn calculate_layout(area: Rect) -> Layout {
    // Title bar: 1 line
    // Input row: 3 lines
    // Chat: remaining space
    let title_height = 1u16.min(area.height);
    let input_height = 3u16.min(area.height.saturating_sub(title_height));
    let chat_height = area
        .height
        .saturating_sub(title_height)
        .saturating_sub(input_height);

    let input_row = Rect {
        x: area.x,
        y: area.y + title_height + chat_height,
        width: area.width,
        height: input_height,
    };
    let (input, send_button) = split_input_row(input_row);

    Layout {
        title_bar: Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: title_height,
        },
        chat: Rect {
            x: area.x,
            y: area.y + title_height,
            width: area.width,
            height: chat_height,
        },
        input,
        send_button,
    }
}
