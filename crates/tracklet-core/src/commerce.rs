// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Commerce events: cart, checkout, purchase, detail views and wish lists.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::properties::PropertyBag;
use crate::transaction::TransactionAttributes;

/// A product as described by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	pub name: String,
	pub sku: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	pub quantity: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brand: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variant: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coupon_code: Option<String>,
	/// Position of the product in a list, starting at 1.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position: Option<u32>,
}

impl Product {
	/// Creates a product with a quantity of one and no optional details.
	pub fn new(name: impl Into<String>, sku: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			sku: sku.into(),
			price: None,
			quantity: 1,
			brand: None,
			category: None,
			variant: None,
			coupon_code: None,
			position: None,
		}
	}

	pub fn with_price(mut self, price: f64) -> Self {
		self.price = Some(price);
		self
	}

	pub fn with_quantity(mut self, quantity: u32) -> Self {
		self.quantity = quantity;
		self
	}

	pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
		self.brand = Some(brand.into());
		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
		self.variant = Some(variant.into());
		self
	}

	pub fn with_coupon_code(mut self, coupon_code: impl Into<String>) -> Self {
		self.coupon_code = Some(coupon_code.into());
		self
	}

	pub fn with_position(mut self, position: u32) -> Self {
		self.position = Some(position);
		self
	}

	/// Line total, when a price is known.
	pub fn total(&self) -> Option<f64> {
		self.price.map(|price| price * f64::from(self.quantity))
	}
}

/// What happened to the products of a commerce event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommerceAction {
	AddToCart,
	RemoveFromCart,
	Checkout,
	Purchase,
	ViewDetail,
	AddToWishList,
	RemoveFromWishList,
}

impl fmt::Display for CommerceAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::AddToCart => write!(f, "add_to_cart"),
			Self::RemoveFromCart => write!(f, "remove_from_cart"),
			Self::Checkout => write!(f, "checkout"),
			Self::Purchase => write!(f, "purchase"),
			Self::ViewDetail => write!(f, "view_detail"),
			Self::AddToWishList => write!(f, "add_to_wish_list"),
			Self::RemoveFromWishList => write!(f, "remove_from_wish_list"),
		}
	}
}

/// A commerce event handed to the vendor SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommerceEvent {
	pub action: CommerceAction,
	pub products: Vec<Product>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_attributes: Option<TransactionAttributes>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub checkout_step: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub checkout_options: Option<String>,
	pub custom_attributes: PropertyBag,
	pub timestamp: DateTime<Utc>,
}

impl CommerceEvent {
	pub fn new(action: CommerceAction, products: Vec<Product>) -> Self {
		Self {
			action,
			products,
			transaction_attributes: None,
			checkout_step: None,
			checkout_options: None,
			custom_attributes: PropertyBag::new(),
			timestamp: Utc::now(),
		}
	}

	pub fn with_transaction_attributes(mut self, attributes: TransactionAttributes) -> Self {
		self.transaction_attributes = Some(attributes);
		self
	}

	pub fn with_checkout_step(mut self, step: Option<u32>) -> Self {
		self.checkout_step = step;
		self
	}

	pub fn with_checkout_options(mut self, options: Option<String>) -> Self {
		self.checkout_options = options;
		self
	}

	/// Attaches caller-supplied attributes. `None` leaves the bag empty.
	pub fn with_custom_attributes(mut self, attributes: Option<PropertyBag>) -> Self {
		self.custom_attributes = attributes.unwrap_or_default();
		self
	}
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub latitude: f64,
	pub longitude: f64,
}

impl Location {
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}
}
