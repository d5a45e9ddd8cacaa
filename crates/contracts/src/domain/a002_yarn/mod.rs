pub mod aggregate;

pub use aggregate::{YarnReceipt, YarnRecord, YarnRequest, YarnStatusQuery};
