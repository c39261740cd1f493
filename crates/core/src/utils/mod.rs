pub mod time_utils;

pub use time_utils::parse_rfc3339;
