// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Named events and the builder that validates them.
//!
//! A named event is described entirely by a property bag. The caller supplies
//! the event name separately; it is injected into the bag under `name` before
//! validation, so a `name` already present in the bag is overwritten.
//!
//! Required keys:
//!
//! | Key | Kind |
//! |-----|------|
//! | `eventType` | event type name or code |
//! | `name` | non-empty string (injected) |
//!
//! Every other key is carried through untouched as event metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::event_type::EventType;
use crate::keys::{EventKey, PropertyKey};
use crate::properties::PropertyBag;

/// A validated, named event ready to hand to the vendor SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	pub name: String,
	pub event_type: EventType,
	/// Free-form keys from the originating bag, minus `name` and `eventType`.
	pub metadata: PropertyBag,
	pub timestamp: DateTime<Utc>,
}

impl Event {
	/// Generates an event named `name` from `properties`.
	///
	/// Fails with a [`GenerationError`] naming the first required key that is
	/// missing or malformed. The event type is checked before the name.
	pub fn generate(name: &str, properties: Option<PropertyBag>) -> Result<Self> {
		let mut properties = properties.ok_or(GenerationError::MissingProperties)?;
		properties.set(EventKey::Name.as_str(), name);

		let event_type = match properties.get(EventKey::EventType.as_str()) {
			None => {
				return Err(GenerationError::MissingKey {
					key: EventKey::EventType.as_str(),
				})
			}
			Some(value) => {
				EventType::from_value(value).ok_or(GenerationError::InvalidValue {
					key: EventKey::EventType.as_str(),
					expected: EventKey::EventType.kind(),
				})?
			}
		};

		let name = match properties.get_str(EventKey::Name.as_str()) {
			Some(name) if !name.is_empty() => name.to_owned(),
			_ => return Err(GenerationError::EmptyName),
		};

		for key in EventKey::ALL {
			properties.remove(key.as_str());
		}

		Ok(Self {
			name,
			event_type,
			metadata: properties,
			timestamp: Utc::now(),
		})
	}

	/// Overrides the event timestamp (builder pattern).
	pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
		self.timestamp = timestamp;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn test_none_properties_rejected() {
		let err = Event::generate("Button Tapped", None).unwrap_err();
		assert_eq!(err, GenerationError::MissingProperties);
	}

	#[test]
	fn test_missing_event_type() {
		let props = PropertyBag::new().insert("screen", "home");
		let err = Event::generate("Button Tapped", Some(props)).unwrap_err();
		assert_eq!(err, GenerationError::MissingKey { key: "eventType" });
	}

	#[test]
	fn test_empty_bag_reports_event_type() {
		let err = Event::generate("Button Tapped", Some(PropertyBag::new())).unwrap_err();
		assert_eq!(err, GenerationError::MissingKey { key: "eventType" });
	}

	#[test]
	fn test_invalid_event_type_values() {
		for value in [json!(true), json!("teleport"), json!(0), json!(1.5), json!(null), json!({})] {
			let props = PropertyBag::new().insert("eventType", value.clone());
			let err = Event::generate("Button Tapped", Some(props)).unwrap_err();
			assert_eq!(
				err,
				GenerationError::InvalidValue {
					key: "eventType",
					expected: crate::keys::ValueKind::EventType,
				},
				"value {value} should be rejected"
			);
		}
	}

	#[test]
	fn test_empty_name_rejected() {
		let props = PropertyBag::new().insert("eventType", "navigation");
		assert_eq!(
			Event::generate("", Some(props)).unwrap_err(),
			GenerationError::EmptyName
		);
	}

	#[test]
	fn test_whitespace_name_kept_verbatim() {
		let props = PropertyBag::new().insert("eventType", "navigation");
		let event = Event::generate(" ", Some(props)).unwrap();
		assert_eq!(event.name, " ");
		assert_eq!(event.event_type, EventType::Navigation);
	}

	#[test]
	fn test_missing_event_type_wins_over_empty_name() {
		let err = Event::generate("", Some(PropertyBag::new())).unwrap_err();
		assert_eq!(err, GenerationError::MissingKey { key: "eventType" });
	}

	#[test]
	fn test_success_carries_name_and_metadata() {
		let props = PropertyBag::new()
			.insert("eventType", "userContent")
			.insert("button", "checkout")
			.insert("count", 3);

		let event = Event::generate("Button Tapped", Some(props)).unwrap();

		assert_eq!(event.name, "Button Tapped");
		assert_eq!(event.event_type, EventType::UserContent);
		assert_eq!(event.metadata.len(), 2);
		assert_eq!(event.metadata.get_str("button"), Some("checkout"));
		assert!(!event.metadata.contains_key("eventType"));
		assert!(!event.metadata.contains_key("name"));
	}

	#[test]
	fn test_injected_name_overrides_bag_name() {
		let props = PropertyBag::new()
			.insert("eventType", 8)
			.insert("name", "stale");

		let event = Event::generate("Fresh", Some(props)).unwrap();

		assert_eq!(event.name, "Fresh");
		assert_eq!(event.event_type, EventType::Other);
	}

	proptest! {
		#[test]
		fn generated_name_equals_injected_name(
			name in "[ \\t]{0,3}[A-Za-z0-9 ]{0,30}"
				.prop_filter("name must not be empty", |n| !n.is_empty()),
			event_type in proptest::sample::select(EventType::ALL.to_vec()),
		) {
			let props = PropertyBag::new().insert("eventType", event_type);
			let event = Event::generate(&name, Some(props)).unwrap();
			prop_assert_eq!(event.name, name);
			prop_assert_eq!(event.event_type, event_type);
		}

		#[test]
		fn bags_without_event_type_always_fail(
			keys in proptest::collection::vec("[a-z]{1,8}", 0..8),
		) {
			let mut props = PropertyBag::new();
			for key in keys.into_iter().filter(|k| k != "eventType") {
				props.set(key, "value");
			}
			let err = Event::generate("Anything", Some(props)).unwrap_err();
			prop_assert_eq!(err, GenerationError::MissingKey { key: "eventType" });
		}
	}
}
