// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The property bag passed alongside every tracking call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::keys::PropertyKey;

/// A string-keyed bag of loosely typed values attached to a tracking call.
///
/// Values are JSON values, so every entry carries its own variant tag. Readers
/// that care about a specific key go through a [`PropertyKey`] and the typed
/// getters, which treat a value of the wrong kind as absent.
///
/// # Example
///
/// ```
/// use tracklet_core::PropertyBag;
///
/// let props = PropertyBag::new()
///     .insert("eventType", "navigation")
///     .insert("screen", "/cart")
///     .insert("revenue", 99.99)
///     .insert("is_premium", true);
/// assert_eq!(props.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
	inner: Map<String, Value>,
}

impl PropertyBag {
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a key-value pair, replacing any previous value for the key.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// In-place variant of [`PropertyBag::insert`].
	pub fn set<K, V>(&mut self, key: K, value: V) -> Option<Value>
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into())
	}

	/// Merges another bag into this one.
	///
	/// If both contain the same key, the value from `other` takes precedence.
	pub fn merge(mut self, other: PropertyBag) -> Self {
		for (k, v) in other.inner {
			self.inner.insert(k, v);
		}
		self
	}

	/// Copies entries from `other` whose keys are not already present.
	pub fn fill_missing(&mut self, other: &PropertyBag) {
		for (k, v) in &other.inner {
			if !self.inner.contains_key(k) {
				self.inner.insert(k.clone(), v.clone());
			}
		}
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.inner.remove(key)
	}

	/// Returns the value stored under `key` only if it has the kind the key expects.
	pub fn get_typed<K: PropertyKey>(&self, key: K) -> Option<&Value> {
		self
			.inner
			.get(key.as_str())
			.filter(|value| key.kind().matches(value))
	}

	/// Returns the string stored under `key`, if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.inner.get(key).and_then(Value::as_str)
	}

	/// Returns the number stored under `key`, if it is a number.
	pub fn get_f64(&self, key: &str) -> Option<f64> {
		self.inner.get(key).and_then(Value::as_f64)
	}

	/// Returns the boolean stored under `key`, if it is a boolean.
	pub fn get_bool(&self, key: &str) -> Option<bool> {
		self.inner.get(key).and_then(Value::as_bool)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.inner.iter()
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.inner)
	}
}

impl From<PropertyBag> for Value {
	fn from(props: PropertyBag) -> Self {
		props.into_value()
	}
}

impl From<Value> for PropertyBag {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self { inner: map },
			_ => Self::new(),
		}
	}
}

impl From<Map<String, Value>> for PropertyBag {
	fn from(map: Map<String, Value>) -> Self {
		Self { inner: map }
	}
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			inner: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl IntoIterator for PropertyBag {
	type Item = (String, Value);
	type IntoIter = serde_json::map::IntoIter;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}
