pub mod a001_purchase_order;
pub mod a002_yarn;
pub mod common;
