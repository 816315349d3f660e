// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Answering endpoint abstraction and implementations

pub mod client;
pub mod http;
pub mod mock;

pub use client::{AnsweringEndpoint, AskRequest, AskResponse};
pub use http::HttpEndpoint;
pub use mock::{MockEndpoint, MockReply};
