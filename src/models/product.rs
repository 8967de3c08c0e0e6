use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::priceable::Priceable;

/// A single item with a fixed price. The leaf of a pricing tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
}

impl Product {
    /// Builds a product as given. No validation is performed: empty names and
    /// negative or fractional prices are all accepted.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Validated construction, used when products come from outside the program.
    pub fn from_request(request: ProductRequest, policy: &PricePolicy) -> Result<Self, ProductError> {
        request
            .validate()
            .map_err(|e| ProductError::InvalidName(e.to_string()))?;

        policy.check(request.price)?;

        Ok(Self {
            name: request.name.trim().to_string(),
            price: request.price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Priceable for Product {
    fn price(&self) -> f64 {
        self.price
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

// request dto
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[validate(custom = "validate_name")]
    pub name: String,

    pub price: f64,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Name is required"));
    }
    Ok(())
}

/// Rules applied to prices read from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePolicy {
    pub allow_negative: bool,
}

impl Default for PricePolicy {
    fn default() -> Self {
        Self {
            allow_negative: true,
        }
    }
}

impl PricePolicy {
    pub fn strict() -> Self {
        Self {
            allow_negative: false,
        }
    }

    pub fn check(&self, price: f64) -> Result<(), ProductError> {
        if !price.is_finite() {
            return Err(ProductError::InvalidPrice { price });
        }
        if !self.allow_negative && price < 0.0 {
            return Err(ProductError::InvalidPrice { price });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductError {
    #[error("Invalid product name: {0}")]
    InvalidName(String),

    #[error("Invalid product price: {price}")]
    InvalidPrice { price: f64 },
}
