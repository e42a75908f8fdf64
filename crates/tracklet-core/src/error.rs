// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for building vendor objects out of property bags.

use thiserror::Error;

use crate::keys::ValueKind;

/// Validation failure while generating an event from a property bag.
///
/// Every variant is attributable to a single missing or malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
	#[error("properties are required to generate an event")]
	MissingProperties,

	#[error("missing required property '{key}'")]
	MissingKey { key: &'static str },

	#[error("property '{key}' must be a valid {expected}")]
	InvalidValue {
		key: &'static str,
		expected: ValueKind,
	},

	#[error("event name must not be empty")]
	EmptyName,
}

/// Result type alias for event generation.
pub type Result<T> = std::result::Result<T, GenerationError>;
