use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{
    priceable::Priceable,
    product::{PricePolicy, Product, ProductError, ProductRequest},
    product_box::ProductBox,
};

pub const CATALOG_LABEL: &str = "Catalog";

/// On-disk catalog layout.
///
/// ```json
/// { "entries": [
///     { "kind": "product", "name": "iPhone", "price": 1000 },
///     { "kind": "box", "label": "Bundle", "items": [ ... ] }
/// ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogEntry {
    Product(ProductRequest),
    Box {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        items: Vec<CatalogEntry>,
    },
}

impl CatalogFile {
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn build(&self, policy: &PricePolicy) -> Result<Catalog, ProductError> {
        let items = self
            .entries
            .iter()
            .map(|entry| entry.build(policy))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(items))
    }
}

impl CatalogEntry {
    /// Turns the entry into a priced tree, validating every product on the way.
    pub fn build(&self, policy: &PricePolicy) -> Result<Arc<dyn Priceable>, ProductError> {
        match self {
            CatalogEntry::Product(request) => {
                let product = Product::from_request(request.clone(), policy)?;
                Ok(Arc::new(product))
            }
            CatalogEntry::Box { label, items } => {
                let children = items
                    .iter()
                    .map(|item| item.build(policy))
                    .collect::<Result<Vec<_>, _>>()?;

                let product_box = ProductBox::new(children);
                Ok(Arc::new(match label {
                    Some(label) => product_box.with_label(label.clone()),
                    None => product_box,
                }))
            }
        }
    }
}

/// A built catalog. The root is itself a box, so its price is the grand total.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: ProductBox,
}

impl Catalog {
    pub fn new(items: Vec<Arc<dyn Priceable>>) -> Self {
        Self {
            root: ProductBox::new(items).with_label(CATALOG_LABEL),
        }
    }

    pub fn root(&self) -> &ProductBox {
        &self.root
    }

    pub fn entries(&self) -> &[Arc<dyn Priceable>] {
        self.root.items()
    }

    pub fn total(&self) -> f64 {
        self.root.price()
    }

    /// Number of (products, boxes) in the whole tree, the root excluded.
    pub fn counts(&self) -> (usize, usize) {
        fn walk(node: &dyn Priceable, counts: &mut (usize, usize)) {
            for child in node.children() {
                if child.is_composite() {
                    counts.1 += 1;
                } else {
                    counts.0 += 1;
                }
                walk(child.as_ref(), counts);
            }
        }

        let mut counts = (0, 0);
        walk(&self.root, &mut counts);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"{
        "entries": [
            { "kind": "product", "name": "Charger", "price": 25 },
            { "kind": "box", "label": "Apple bundle", "items": [
                { "kind": "product", "name": "iPhone", "price": 1000 },
                { "kind": "product", "name": "iPad", "price": 600 },
                { "kind": "box", "items": [
                    { "kind": "product", "name": "Case", "price": 40.5 }
                ] }
            ] }
        ]
    }"#;

    #[test]
    fn test_nested_catalog_builds_and_totals() {
        let file = CatalogFile::from_json_str(NESTED).unwrap();
        let catalog = file.build(&PricePolicy::default()).unwrap();

        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[1].label(), "Apple bundle");
        assert_eq!(catalog.entries()[1].price(), 1640.5);
        assert_eq!(catalog.total(), 1665.5);
        assert_eq!(catalog.counts(), (4, 2));
    }

    #[test]
    fn test_missing_entries_is_empty_catalog() {
        let catalog = CatalogFile::from_json_str("{}")
            .unwrap()
            .build(&PricePolicy::default())
            .unwrap();
        assert_eq!(catalog.total(), 0.0);
        assert_eq!(catalog.counts(), (0, 0));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = CatalogFile::from_json_str(r#"{ "entries": [ { "kind": "crate" } ] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_product_fails_whole_build() {
        let file = CatalogFile::from_json_str(
            r#"{ "entries": [ { "kind": "box", "items": [ { "kind": "product", "name": "", "price": 1 } ] } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            file.build(&PricePolicy::default()),
            Err(ProductError::InvalidName(_))
        ));
    }
}
