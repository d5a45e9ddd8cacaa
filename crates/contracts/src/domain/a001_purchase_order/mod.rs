pub mod aggregate;

pub use aggregate::{OrderLabel, PurchaseOrder};
