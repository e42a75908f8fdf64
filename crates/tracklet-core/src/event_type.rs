// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category of a named event, as understood by the vendor SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
	Navigation,
	Location,
	Search,
	Transaction,
	UserContent,
	UserPreference,
	Social,
	Other,
	Media,
}

impl EventType {
	pub const ALL: [EventType; 9] = [
		Self::Navigation,
		Self::Location,
		Self::Search,
		Self::Transaction,
		Self::UserContent,
		Self::UserPreference,
		Self::Social,
		Self::Other,
		Self::Media,
	];

	/// Integer code used by the vendor SDK.
	pub fn code(&self) -> u8 {
		match self {
			Self::Navigation => 1,
			Self::Location => 2,
			Self::Search => 3,
			Self::Transaction => 4,
			Self::UserContent => 5,
			Self::UserPreference => 6,
			Self::Social => 7,
			Self::Other => 8,
			Self::Media => 9,
		}
	}

	pub fn from_code(code: i64) -> Option<Self> {
		Self::ALL.iter().copied().find(|t| i64::from(t.code()) == code)
	}

	/// Reads an event type out of a property value.
	///
	/// Accepts the camelCase name (`"userContent"`) or the integer code.
	pub fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::String(s) => s.parse().ok(),
			Value::Number(n) => n.as_i64().and_then(Self::from_code),
			_ => None,
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Self::Navigation => "navigation",
			Self::Location => "location",
			Self::Search => "search",
			Self::Transaction => "transaction",
			Self::UserContent => "userContent",
			Self::UserPreference => "userPreference",
			Self::Social => "social",
			Self::Other => "other",
			Self::Media => "media",
		};
		f.write_str(s)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
	type Err = UnknownEventType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|t| t.to_string() == s)
			.ok_or_else(|| UnknownEventType(s.to_string()))
	}
}

impl From<EventType> for Value {
	fn from(event_type: EventType) -> Self {
		Value::String(event_type.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn test_from_code_bounds() {
		assert_eq!(EventType::from_code(1), Some(EventType::Navigation));
		assert_eq!(EventType::from_code(9), Some(EventType::Media));
		assert_eq!(EventType::from_code(0), None);
		assert_eq!(EventType::from_code(10), None);
		assert_eq!(EventType::from_code(-1), None);
	}

	#[test]
	fn test_from_value() {
		assert_eq!(
			EventType::from_value(&json!("userPreference")),
			Some(EventType::UserPreference)
		);
		assert_eq!(EventType::from_value(&json!(2)), Some(EventType::Location));
		assert_eq!(EventType::from_value(&json!(2.5)), None);
		assert_eq!(EventType::from_value(&json!("Navigation")), None);
		assert_eq!(EventType::from_value(&json!(["navigation"])), None);
	}

	#[test]
	fn test_serde_matches_display() {
		let json = serde_json::to_string(&EventType::UserContent).unwrap();
		assert_eq!(json, "\"userContent\"");
	}

	#[test]
	fn test_unknown_name_is_error() {
		let err = "teleport".parse::<EventType>().unwrap_err();
		assert_eq!(err.to_string(), "unknown event type: teleport");
	}

	proptest! {
		#[test]
		fn name_and_code_agree(event_type in proptest::sample::select(EventType::ALL.to_vec())) {
			let by_name: EventType = event_type.to_string().parse().unwrap();
			let by_code = EventType::from_code(i64::from(event_type.code())).unwrap();
			prop_assert_eq!(by_name, event_type);
			prop_assert_eq!(by_code, event_type);
		}
	}
}
