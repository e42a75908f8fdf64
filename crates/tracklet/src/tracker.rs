// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The tracking adapter that forwards capability calls to the vendor SDK.

use serde_json::Value;
use tracing::{debug, info, warn};
use tracklet_config::{SdkConfig, SecretString};
use tracklet_core::{
	CommerceAction, CommerceEvent, Event, EventKey, EventType, InstallationType, Location, Product,
	PropertyBag, PropertyKey, SdkEnvironment, TransactionAttributes,
};

use crate::capabilities::{
	CartTracking, CheckoutTracking, ErrorLogging, EventTracking, LifetimeValueTracking,
	LocationTracking, PageViewTracking, ProductViewTracking, PurchaseTracking,
	UserAttributeTracking, WishListTracking,
};
use crate::enrich::PropertyEnricher;
use crate::error::{TrackerError, TrackingError, TrackingResult};
use crate::sdk::{AnalyticsSdk, SdkOptions};

/// Name given to events reported through [`LocationTracking::track_location`].
pub const LOCATION_EVENT_NAME: &str = "Location Update";

/// Builder for constructing an [`SdkTracker`] around an uninitialised SDK.
pub struct TrackerBuilder<S> {
	sdk: S,
	api_key: Option<String>,
	api_secret: Option<SecretString>,
	installation_type: InstallationType,
	environment: SdkEnvironment,
	proxy_app_delegate: bool,
	enrichers: Vec<Box<dyn PropertyEnricher>>,
}

impl<S: AnalyticsSdk> TrackerBuilder<S> {
	fn new(sdk: S) -> Self {
		Self {
			sdk,
			api_key: None,
			api_secret: None,
			installation_type: InstallationType::default(),
			environment: SdkEnvironment::default(),
			proxy_app_delegate: true,
			enrichers: Vec::new(),
		}
	}

	pub fn api_key(mut self, key: impl Into<String>) -> Self {
		self.api_key = Some(key.into());
		self
	}

	pub fn api_secret(mut self, secret: SecretString) -> Self {
		self.api_secret = Some(secret);
		self
	}

	pub fn installation_type(mut self, installation_type: InstallationType) -> Self {
		self.installation_type = installation_type;
		self
	}

	pub fn environment(mut self, environment: SdkEnvironment) -> Self {
		self.environment = environment;
		self
	}

	pub fn proxy_app_delegate(mut self, enabled: bool) -> Self {
		self.proxy_app_delegate = enabled;
		self
	}

	/// Copies every SDK option from a resolved configuration section.
	pub fn with_config(self, config: &SdkConfig) -> Self {
		self
			.api_key(config.api_key.clone())
			.api_secret(config.api_secret.clone())
			.installation_type(config.installation_type)
			.environment(config.environment)
			.proxy_app_delegate(config.proxy_app_delegate)
	}

	/// Registers an enricher for named events. Enrichers run in registration order.
	pub fn enricher(mut self, enricher: impl PropertyEnricher + 'static) -> Self {
		self.enrichers.push(Box::new(enricher));
		self
	}

	/// Validates the options, initialises the SDK once and returns the tracker.
	pub fn build(self) -> Result<SdkTracker<S>, TrackerError> {
		let api_key = self
			.api_key
			.filter(|k| !k.trim().is_empty())
			.ok_or(TrackerError::MissingApiKey)?;
		let api_secret = self
			.api_secret
			.filter(|s| !s.expose().trim().is_empty())
			.ok_or(TrackerError::MissingApiSecret)?;

		let options = SdkOptions {
			api_key,
			api_secret,
			installation_type: self.installation_type,
			environment: self.environment,
			proxy_app_delegate: self.proxy_app_delegate,
		};

		info!(
			installation_type = %options.installation_type,
			environment = %options.environment,
			proxy_app_delegate = options.proxy_app_delegate,
			enrichers = self.enrichers.len(),
			"Initializing analytics SDK"
		);
		self.sdk.initialize(options);

		Ok(SdkTracker {
			sdk: self.sdk,
			enrichers: self.enrichers,
		})
	}
}

/// Forwards every tracking capability to a single vendor SDK.
///
/// Calls are stateless and independent. Structured calls (cart, checkout,
/// purchase, detail views, wish lists, errors, page views, lifetime value and
/// user attributes) always succeed because the vendor reports nothing back.
/// Named events and locations go through [`Event::generate`] and fail when the
/// properties do not describe a valid event; nothing reaches the SDK then.
pub struct SdkTracker<S> {
	sdk: S,
	enrichers: Vec<Box<dyn PropertyEnricher>>,
}

impl<S: AnalyticsSdk> SdkTracker<S> {
	/// Starts building a tracker that will initialise `sdk`.
	pub fn builder(sdk: S) -> TrackerBuilder<S> {
		TrackerBuilder::new(sdk)
	}

	/// Wraps an SDK that has already been initialised elsewhere.
	pub fn new(sdk: S) -> Self {
		Self {
			sdk,
			enrichers: Vec::new(),
		}
	}

	pub fn sdk(&self) -> &S {
		&self.sdk
	}

	fn log_commerce(&self, event: CommerceEvent) -> TrackingResult {
		debug!(
			action = %event.action,
			products = event.products.len(),
			"forwarding commerce event"
		);
		self.sdk.log_commerce_event(event);
		Ok(())
	}

	fn log_cart_change(
		&self,
		action: CommerceAction,
		product: Product,
		quantity: u32,
		price: Option<f64>,
		properties: Option<PropertyBag>,
	) -> TrackingResult {
		let mut product = product.with_quantity(quantity);
		if let Some(price) = price {
			product.price = Some(price);
		}

		self.log_commerce(
			CommerceEvent::new(action, vec![product]).with_custom_attributes(properties),
		)
	}

	fn transaction_event(
		&self,
		action: CommerceAction,
		products: Vec<Product>,
		properties: Option<PropertyBag>,
	) -> CommerceEvent {
		let attributes = properties
			.as_ref()
			.map(TransactionAttributes::from_properties)
			.unwrap_or_default();

		CommerceEvent::new(action, products)
			.with_transaction_attributes(attributes)
			.with_custom_attributes(properties)
	}

	fn enrich(&self, properties: Option<PropertyBag>) -> Result<Option<PropertyBag>, TrackingError> {
		let Some(mut properties) = properties else {
			return Ok(None);
		};

		for enricher in &self.enrichers {
			enricher
				.enrich(&mut properties)
				.map_err(TrackingError::from_failure)?;
		}

		Ok(Some(properties))
	}

	fn log_generated(&self, name: &str, properties: Option<PropertyBag>) -> TrackingResult {
		let event = self
			.enrich(properties)
			.and_then(|properties| Event::generate(name, properties).map_err(TrackingError::from))
			.map_err(|err| {
				warn!(event_name = name, error = %err, "failed to generate event");
				err
			})?;

		debug!(
			event_name = %event.name,
			event_type = %event.event_type,
			metadata = event.metadata.len(),
			"forwarding event"
		);
		self.sdk.log_event(event);
		Ok(())
	}
}

impl<S: AnalyticsSdk> CartTracking for SdkTracker<S> {
	fn add_to_cart(
		&self,
		product: Product,
		quantity: u32,
		price: Option<f64>,
		properties: Option<PropertyBag>,
	) -> TrackingResult {
		self.log_cart_change(CommerceAction::AddToCart, product, quantity, price, properties)
	}

	fn remove_from_cart(
		&self,
		product: Product,
		quantity: u32,
		price: Option<f64>,
		properties: Option<PropertyBag>,
	) -> TrackingResult {
		self.log_cart_change(
			CommerceAction::RemoveFromCart,
			product,
			quantity,
			price,
			properties,
		)
	}
}

impl<S: AnalyticsSdk> CheckoutTracking for SdkTracker<S> {
	fn checkout(
		&self,
		products: Vec<Product>,
		step: Option<u32>,
		options: Option<String>,
		properties: Option<PropertyBag>,
	) -> TrackingResult {
		let event = self
			.transaction_event(CommerceAction::Checkout, products, properties)
			.with_checkout_step(step)
			.with_checkout_options(options);
		self.log_commerce(event)
	}
}

impl<S: AnalyticsSdk> PurchaseTracking for SdkTracker<S> {
	fn purchase(&self, products: Vec<Product>, properties: Option<PropertyBag>) -> TrackingResult {
		let event = self.transaction_event(CommerceAction::Purchase, products, properties);
		self.log_commerce(event)
	}
}

impl<S: AnalyticsSdk> ProductViewTracking for SdkTracker<S> {
	fn view_detail(&self, product: Product, properties: Option<PropertyBag>) -> TrackingResult {
		self.log_commerce(
			CommerceEvent::new(CommerceAction::ViewDetail, vec![product])
				.with_custom_attributes(properties),
		)
	}
}

impl<S: AnalyticsSdk> WishListTracking for SdkTracker<S> {
	fn add_to_wish_list(&self, product: Product, properties: Option<PropertyBag>) -> TrackingResult {
		self.log_commerce(
			CommerceEvent::new(CommerceAction::AddToWishList, vec![product])
				.with_custom_attributes(properties),
		)
	}

	fn remove_from_wish_list(
		&self,
		product: Product,
		properties: Option<PropertyBag>,
	) -> TrackingResult {
		self.log_commerce(
			CommerceEvent::new(CommerceAction::RemoveFromWishList, vec![product])
				.with_custom_attributes(properties),
		)
	}
}

impl<S: AnalyticsSdk> ErrorLogging for SdkTracker<S> {
	fn log_error(&self, message: &str, properties: Option<PropertyBag>) -> TrackingResult {
		debug!(error_message = message, "forwarding error");
		self.sdk.log_error(message, properties);
		Ok(())
	}
}

impl<S: AnalyticsSdk> EventTracking for SdkTracker<S> {
	fn track_event(&self, name: &str, properties: Option<PropertyBag>) -> TrackingResult {
		self.log_generated(name, properties)
	}
}

impl<S: AnalyticsSdk> LocationTracking for SdkTracker<S> {
	fn track_location(&self, location: Location, properties: Option<PropertyBag>) -> TrackingResult {
		let mut properties = properties.unwrap_or_default();
		properties.set("latitude", location.latitude);
		properties.set("longitude", location.longitude);
		if !properties.contains_key(EventKey::EventType.as_str()) {
			properties.set(EventKey::EventType.as_str(), EventType::Location);
		}

		self.log_generated(LOCATION_EVENT_NAME, Some(properties))
	}
}

impl<S: AnalyticsSdk> PageViewTracking for SdkTracker<S> {
	fn track_page_view(&self, name: &str, properties: Option<PropertyBag>) -> TrackingResult {
		debug!(screen = name, "forwarding page view");
		self.sdk.log_screen(name, properties);
		Ok(())
	}
}

impl<S: AnalyticsSdk> LifetimeValueTracking for SdkTracker<S> {
	fn increase_lifetime_value(
		&self,
		amount: f64,
		name: &str,
		properties: Option<PropertyBag>,
	) -> TrackingResult {
		debug!(amount, ltv_name = name, "forwarding lifetime value increase");
		self.sdk.log_ltv_increase(amount, name, properties);
		Ok(())
	}
}

impl<S: AnalyticsSdk> UserAttributeTracking for SdkTracker<S> {
	fn set_user_attribute(&self, key: &str, value: Value) -> TrackingResult {
		debug!(key, "forwarding user attribute");
		self.sdk.set_user_attribute(key, value);
		Ok(())
	}
}
