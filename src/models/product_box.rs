use std::sync::Arc;

use crate::models::{priceable::Priceable, product::Product};

/// A box holding other priceables, products or further boxes.
///
/// The contents are fixed at construction. Children are shared, so the same
/// product may sit in several boxes at once.
#[derive(Debug, Clone, Default)]
pub struct ProductBox {
    label: Option<String>,
    items: Vec<Arc<dyn Priceable>>,
}

impl ProductBox {
    pub fn new(items: Vec<Arc<dyn Priceable>>) -> Self {
        Self { label: None, items }
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self::new(
            products
                .into_iter()
                .map(|product| Arc::new(product) as Arc<dyn Priceable>)
                .collect(),
        )
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn items(&self) -> &[Arc<dyn Priceable>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Priceable for ProductBox {
    /// Sum of the children's prices, left to right from zero.
    fn price(&self) -> f64 {
        self.items.iter().fold(0.0, |total, item| total + item.price())
    }

    fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Box ({} items)", self.items.len()),
        }
    }

    fn children(&self) -> &[Arc<dyn Priceable>] {
        &self.items
    }

    fn is_composite(&self) -> bool {
        true
    }
}
