use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Role written onto every profile row created through registration.
pub const SIGNUP_ROLE: &str = "admin";
