//! Browser Logging
//!
//! Routes the `log` facade to the browser console.

use crate::error::{AppError, Result};

pub fn init(level: log::Level) -> Result<()> {
    console_log::init_with_level(level).map_err(|e| AppError::Logger(e.to_string()))
}
