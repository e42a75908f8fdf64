// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One trait per tracking concern.
//!
//! Application code depends on the narrowest trait it needs, so a screen
//! that only reports page views takes a `&dyn PageViewTracking` rather than
//! the whole tracker.

use serde_json::Value;
use tracklet_core::{Location, Product, PropertyBag};

use crate::error::TrackingResult;

pub trait CartTracking {
	/// Reports `quantity` units of `product` added to the cart, at `price` when known.
	fn add_to_cart(
		&self,
		product: Product,
		quantity: u32,
		price: Option<f64>,
		properties: Option<PropertyBag>,
	) -> TrackingResult;

	fn remove_from_cart(
		&self,
		product: Product,
		quantity: u32,
		price: Option<f64>,
		properties: Option<PropertyBag>,
	) -> TrackingResult;
}

pub trait CheckoutTracking {
	/// Reports a checkout step. Transaction attributes are read from `properties`.
	fn checkout(
		&self,
		products: Vec<Product>,
		step: Option<u32>,
		options: Option<String>,
		properties: Option<PropertyBag>,
	) -> TrackingResult;
}

pub trait PurchaseTracking {
	/// Reports a completed purchase. Transaction attributes are read from `properties`.
	fn purchase(&self, products: Vec<Product>, properties: Option<PropertyBag>) -> TrackingResult;
}

pub trait ProductViewTracking {
	fn view_detail(&self, product: Product, properties: Option<PropertyBag>) -> TrackingResult;
}

pub trait ErrorLogging {
	fn log_error(&self, message: &str, properties: Option<PropertyBag>) -> TrackingResult;
}

pub trait EventTracking {
	/// Reports a named event described by `properties`.
	///
	/// `properties` must contain an `eventType`; `None` is an error.
	fn track_event(&self, name: &str, properties: Option<PropertyBag>) -> TrackingResult;
}

pub trait LocationTracking {
	fn track_location(&self, location: Location, properties: Option<PropertyBag>)
		-> TrackingResult;
}

pub trait PageViewTracking {
	fn track_page_view(&self, name: &str, properties: Option<PropertyBag>) -> TrackingResult;
}

pub trait LifetimeValueTracking {
	fn increase_lifetime_value(
		&self,
		amount: f64,
		name: &str,
		properties: Option<PropertyBag>,
	) -> TrackingResult;
}

pub trait UserAttributeTracking {
	fn set_user_attribute(&self, key: &str, value: Value) -> TrackingResult;
}

pub trait WishListTracking {
	fn add_to_wish_list(&self, product: Product, properties: Option<PropertyBag>)
		-> TrackingResult;

	fn remove_from_wish_list(
		&self,
		product: Product,
		properties: Option<PropertyBag>,
	) -> TrackingResult;
}
