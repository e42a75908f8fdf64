// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Transaction attributes attached to checkout and purchase events.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::keys::{PropertyKey, TransactionAttributeKey};
use crate::properties::PropertyBag;

/// Monetary and identifying details of a commerce transaction.
///
/// Every field is optional; an unset field is simply not reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAttributes {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub affiliation: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coupon_code: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub revenue: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shipping: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tax: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_id: Option<String>,
}

impl TransactionAttributes {
	/// Builds attributes from the recognised keys of `properties`.
	pub fn from_properties(properties: &PropertyBag) -> Self {
		let mut attributes = Self::default();
		attributes.populate(properties);
		attributes
	}

	/// Copies every recognised, correctly typed key of `properties` onto `self`.
	///
	/// Absent keys leave the field untouched. A key holding a value of the
	/// wrong kind is treated as absent. This never fails.
	pub fn populate(&mut self, properties: &PropertyBag) {
		for key in TransactionAttributeKey::ALL {
			let Some(value) = properties.get_typed(key) else {
				if properties.contains_key(key.as_str()) {
					trace!(
						key = key.as_str(),
						expected = %key.kind(),
						"skipping transaction attribute with unexpected type"
					);
				}
				continue;
			};

			match key {
				TransactionAttributeKey::Affiliation => {
					self.affiliation = value.as_str().map(str::to_owned)
				}
				TransactionAttributeKey::CouponCode => {
					self.coupon_code = value.as_str().map(str::to_owned)
				}
				TransactionAttributeKey::TransactionId => {
					self.transaction_id = value.as_str().map(str::to_owned)
				}
				TransactionAttributeKey::Revenue => self.revenue = value.as_f64(),
				TransactionAttributeKey::Shipping => self.shipping = value.as_f64(),
				TransactionAttributeKey::Tax => self.tax = value.as_f64(),
			}
		}
	}

	/// Returns true when no field is set.
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}
