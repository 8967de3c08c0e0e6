use std::fmt::Debug;
use std::sync::Arc;

/// Anything that can report a price.
///
/// Implemented by single products and by boxes of other priceables alike, so
/// callers never need to know which one they are holding.
pub trait Priceable: Debug + Send + Sync {
    /// Current price. Pure and deterministic for a given value.
    fn price(&self) -> f64;

    /// Display name used in reports.
    fn label(&self) -> String;

    /// Direct children, empty for leaves.
    fn children(&self) -> &[Arc<dyn Priceable>] {
        &[]
    }

    fn is_composite(&self) -> bool {
        false
    }
}
