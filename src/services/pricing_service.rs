use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    Catalog, CatalogFile, PricePolicy, Priceable, Product, ProductBox, ProductError,
};

#[derive(Error, Debug)]
pub enum PricingServiceError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog entry: {0}")]
    Product(#[from] ProductError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Product,
    Box,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Product => write!(f, "product"),
            LineKind::Box => write!(f, "box"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub depth: usize,
    pub label: String,
    pub kind: LineKind,
    pub price: f64,
}

/// Flattened, priced view of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total: f64,
}

pub struct PricingService {
    policy: PricePolicy,
}

impl PricingService {
    pub fn new(policy: PricePolicy) -> Self {
        Self { policy }
    }

    /// Read, parse and validate a catalog file.
    pub fn load_catalog(&self, path: impl AsRef<Path>) -> Result<Catalog, PricingServiceError> {
        let path = path.as_ref();
        info!("Loading catalog from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| PricingServiceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_catalog(&content)
    }

    pub fn parse_catalog(&self, content: &str) -> Result<Catalog, PricingServiceError> {
        let file = CatalogFile::from_json_str(content).map_err(|e| {
            warn!("Catalog is not valid JSON: {}", e);
            e
        })?;
        debug!("Parsed {} top-level catalog entries", file.entries.len());

        let catalog = file.build(&self.policy).map_err(|e| {
            warn!("Catalog validation failed: {}", e);
            e
        })?;

        let (products, boxes) = catalog.counts();
        info!(
            "Catalog loaded with {} products in {} boxes",
            products, boxes
        );
        Ok(catalog)
    }

    /// Walks the catalog depth-first. With `flat`, only top-level entries are listed.
    pub fn quote(&self, catalog: &Catalog, flat: bool) -> Quote {
        let mut lines = Vec::new();
        for entry in catalog.entries() {
            collect_lines(entry.as_ref(), 0, flat, &mut lines);
        }

        let total = catalog.total();
        info!("Quoted {} lines, total {}", lines.len(), total);
        Quote { lines, total }
    }

    /// An iPhone, an iPad, and a box holding both. The two products are shared
    /// with the box, so the catalog total counts them twice.
    pub fn demo_catalog(&self) -> Catalog {
        let phone: Arc<dyn Priceable> = Arc::new(Product::new("iPhone", 1000.0));
        let tablet: Arc<dyn Priceable> = Arc::new(Product::new("iPad", 600.0));
        let bundle: Arc<dyn Priceable> =
            Arc::new(ProductBox::new(vec![phone.clone(), tablet.clone()]).with_label("Box"));

        Catalog::new(vec![phone, tablet, bundle])
    }
}

fn collect_lines(node: &dyn Priceable, depth: usize, flat: bool, lines: &mut Vec<QuoteLine>) {
    let kind = if node.is_composite() {
        LineKind::Box
    } else {
        LineKind::Product
    };
    debug!("Pricing {} '{}' at depth {}", kind, node.label(), depth);

    lines.push(QuoteLine {
        depth,
        label: node.label(),
        kind,
        price: node.price(),
    });

    if flat {
        return;
    }
    for child in node.children() {
        collect_lines(child.as_ref(), depth + 1, flat, lines);
    }
}
