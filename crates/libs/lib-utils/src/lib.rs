//! # Utilities Library
//!
//! Shared utility functions for environment variables, bearer-token claims,
//! date/time display and input validation.

pub mod envs;
pub mod jwt;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse};
pub use jwt::{token_expiry, token_subject};
pub use time::{format_clock, format_date, format_date_time, from_now, DEFAULT_DATE_TIME_FORMAT};
pub use validation::{validate_length, validate_required, validate_tracking_number};
