pub mod download;
pub mod receive;
