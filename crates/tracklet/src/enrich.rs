// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hooks that add properties to named events before they are generated.
//!
//! Enrichers run, in registration order, on the property bag of every
//! [`track_event`](crate::EventTracking::track_event) and
//! [`track_location`](crate::LocationTracking::track_location) call. They
//! never run for structured commerce calls, which always succeed.
//!
//! An enricher failure aborts the call. If the failure wraps a
//! [`GenerationError`](tracklet_core::GenerationError) its message reaches the
//! caller; anything else is reported as an unknown error.
//!
//! # Example
//!
//! ```
//! use tracklet::{PropertyBag, PropertyEnricher, StaticProperties};
//!
//! let app_info = StaticProperties::new(
//!     PropertyBag::new().insert("app_version", "4.2.0"),
//! );
//!
//! let mut props = PropertyBag::new().insert("eventType", "navigation");
//! app_info.enrich(&mut props).unwrap();
//! assert_eq!(props.get_str("app_version"), Some("4.2.0"));
//! ```

use tracklet_core::PropertyBag;

pub trait PropertyEnricher: Send + Sync {
	fn enrich(&self, properties: &mut PropertyBag) -> anyhow::Result<()>;
}

impl<F> PropertyEnricher for F
where
	F: Fn(&mut PropertyBag) -> anyhow::Result<()> + Send + Sync,
{
	fn enrich(&self, properties: &mut PropertyBag) -> anyhow::Result<()> {
		self(properties)
	}
}

/// Adds a fixed set of properties without overwriting caller-supplied keys.
#[derive(Debug, Clone, Default)]
pub struct StaticProperties {
	properties: PropertyBag,
}

impl StaticProperties {
	pub fn new(properties: PropertyBag) -> Self {
		Self { properties }
	}
}

impl PropertyEnricher for StaticProperties {
	fn enrich(&self, properties: &mut PropertyBag) -> anyhow::Result<()> {
		properties.fill_missing(&self.properties);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_properties_do_not_overwrite() {
		let enricher = StaticProperties::new(
			PropertyBag::new()
				.insert("platform", "ios")
				.insert("screen", "default"),
		);
		let mut props = PropertyBag::new().insert("screen", "checkout");

		enricher.enrich(&mut props).unwrap();

		assert_eq!(props.get_str("platform"), Some("ios"));
		assert_eq!(props.get_str("screen"), Some("checkout"));
	}

	#[test]
	fn test_closure_enricher() {
		let enricher = |props: &mut PropertyBag| -> anyhow::Result<()> {
			props.set("session_id", "abc");
			Ok(())
		};
		let mut props = PropertyBag::new();

		enricher.enrich(&mut props).unwrap();

		assert_eq!(props.get_str("session_id"), Some("abc"));
	}
}
