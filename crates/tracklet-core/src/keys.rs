// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Recognised property keys and the value kind each one expects.
//!
//! Converters and the event builder never read a raw string key; they go
//! through one of the enums here so that the set of interpreted keys is
//! closed and known at compile time.

use std::fmt;

use serde_json::Value;

use crate::event_type::EventType;

/// The kind of value a recognised key expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	String,
	Number,
	Bool,
	/// A camelCase event type name or an integer event type code.
	EventType,
}

impl ValueKind {
	/// Returns true if `value` is acceptable for this kind.
	pub fn matches(&self, value: &Value) -> bool {
		match self {
			Self::String => value.is_string(),
			Self::Number => value.is_number(),
			Self::Bool => value.is_boolean(),
			Self::EventType => EventType::from_value(value).is_some(),
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String => write!(f, "string"),
			Self::Number => write!(f, "number"),
			Self::Bool => write!(f, "boolean"),
			Self::EventType => write!(f, "event type"),
		}
	}
}

/// A key from one of the closed key enumerations.
pub trait PropertyKey: Copy {
	/// The wire name of the key inside a property bag.
	fn as_str(&self) -> &'static str;

	/// The value kind the key expects.
	fn kind(&self) -> ValueKind;
}

/// Keys read when building transaction attributes for checkout and purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionAttributeKey {
	Affiliation,
	CouponCode,
	Revenue,
	Shipping,
	Tax,
	TransactionId,
}

impl TransactionAttributeKey {
	pub const ALL: [TransactionAttributeKey; 6] = [
		Self::Affiliation,
		Self::CouponCode,
		Self::Revenue,
		Self::Shipping,
		Self::Tax,
		Self::TransactionId,
	];
}

impl PropertyKey for TransactionAttributeKey {
	fn as_str(&self) -> &'static str {
		match self {
			Self::Affiliation => "affiliation",
			Self::CouponCode => "couponCode",
			Self::Revenue => "revenue",
			Self::Shipping => "shipping",
			Self::Tax => "tax",
			Self::TransactionId => "transactionId",
		}
	}

	fn kind(&self) -> ValueKind {
		match self {
			Self::Affiliation | Self::CouponCode | Self::TransactionId => ValueKind::String,
			Self::Revenue | Self::Shipping | Self::Tax => ValueKind::Number,
		}
	}
}

/// Keys required when generating a named event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKey {
	Name,
	EventType,
}

impl EventKey {
	pub const ALL: [EventKey; 2] = [Self::Name, Self::EventType];
}

impl PropertyKey for EventKey {
	fn as_str(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::EventType => "eventType",
		}
	}

	fn kind(&self) -> ValueKind {
		match self {
			Self::Name => ValueKind::String,
			Self::EventType => ValueKind::EventType,
		}
	}
}
