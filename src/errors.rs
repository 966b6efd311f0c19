// ABOUTME: Unified error types re-exported from formcoach-core
// ABOUTME: ErrorCode, AppError, AppResult, and the session-level SessionError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use formcoach_core::errors::*;
