// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat widget
//!
//! Owns the conversation lifecycle: greeting, question submission,
//! placeholder, and answer or fallback. Rendering is left to whatever
//! implements the surface traits.

pub mod controller;
pub mod events;
pub mod message;
pub mod surface;
pub mod view;

pub use controller::{parse_question, ChatWidget, IgnoreReason, SubmitOutcome};
pub use events::{Completion, CompletionReceiver, CompletionSender};
pub use message::{Message, MessageId, Sender};
pub use surface::{InputField, SendButton, SendControl, TranscriptSurface};
pub use view::ConversationView;
