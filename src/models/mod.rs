pub mod priceable;
pub mod product;
pub mod product_box;
pub mod catalog;

// Re-exports
pub use priceable::*;
pub use product::*;
pub use product_box::*;
pub use catalog::*;
