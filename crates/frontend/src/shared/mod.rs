pub mod api_utils;
pub mod date_utils;
pub mod export;
pub mod number_input;
pub mod page_frame;
pub mod pdf;
pub mod status_message;
