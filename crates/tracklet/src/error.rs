// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the tracking adapter.

use thiserror::Error;
use tracing::warn;
use tracklet_core::GenerationError;

/// Outcome of a single tracking call.
pub type TrackingResult = std::result::Result<(), TrackingError>;

/// Failure reported back to the caller of a tracking method.
///
/// Raw failures never cross the adapter boundary: anything that is not a
/// [`GenerationError`] collapses into [`TrackingError::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackingError {
	/// The event could not be built from the supplied properties.
	#[error(transparent)]
	Generation(#[from] GenerationError),

	#[error("an unknown error occurred while tracking")]
	Unknown,
}

impl TrackingError {
	/// Classifies an arbitrary failure raised while preparing a tracking call.
	pub fn from_failure(err: anyhow::Error) -> Self {
		match err.downcast::<GenerationError>() {
			Ok(generation) => Self::Generation(generation),
			Err(other) => {
				warn!(error = %other, "unrecognised failure while preparing tracking call");
				Self::Unknown
			}
		}
	}

	/// Human-readable message for the caller.
	pub fn message(&self) -> String {
		self.to_string()
	}
}

/// Errors raised while constructing a tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
	#[error("vendor API key is required")]
	MissingApiKey,

	#[error("vendor API secret is required")]
	MissingApiSecret,
}
