//! Status-code range filters.
//!
//! Each filter consumes the response and hands it back unchanged on success,
//! so further decode steps can chain off the same value. On rejection the
//! response travels inside the error for caller-side inspection.

use std::ops::{Range, RangeInclusive};

use crate::error::{self, Result};

use super::Response;

impl Response {
    /// Succeeds iff the status code falls within `range` (both ends included).
    pub fn filter_status_codes(self, range: RangeInclusive<u16>) -> Result<Response> {
        if range.contains(&self.status().as_u16()) {
            Ok(self)
        } else {
            tracing::debug!(
                status = self.status().as_u16(),
                range = ?range,
                "status code outside accepted range"
            );
            Err(error::status_code(self))
        }
    }

    /// Succeeds iff the status code falls within `range` (upper end excluded).
    pub fn filter_status_range(self, range: Range<u16>) -> Result<Response> {
        if range.contains(&self.status().as_u16()) {
            Ok(self)
        } else {
            tracing::debug!(
                status = self.status().as_u16(),
                range = ?range,
                "status code outside accepted range"
            );
            Err(error::status_code(self))
        }
    }

    /// Succeeds iff the status code is exactly `code`.
    pub fn filter_status_code(self, code: u16) -> Result<Response> {
        self.filter_status_codes(code..=code)
    }

    /// Succeeds iff the status code is in 200-299.
    pub fn filter_successful_status_codes(self) -> Result<Response> {
        self.filter_status_codes(200..=299)
    }

    /// Succeeds iff the status code is in 200-399.
    pub fn filter_successful_status_and_redirect_codes(self) -> Result<Response> {
        self.filter_status_codes(200..=399)
    }
}
