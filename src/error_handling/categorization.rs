//! Error categorization.
//!
//! This module maps transport errors onto `NetworkFault` categories.

use super::types::NetworkFault;

/// Categorizes a `reqwest::Error` into a `NetworkFault`.
///
/// Only errors that prevented a response are expected here; HTTP status
/// codes are checked on the response itself.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `NetworkFault` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> NetworkFault {
    // Timeout first: a connect timeout is both is_connect() and is_timeout()
    if error.is_timeout() {
        NetworkFault::Timeout
    } else if error.is_builder() {
        NetworkFault::Builder
    } else if error.is_redirect() {
        NetworkFault::Redirect
    } else if error.is_connect() {
        NetworkFault::Connect
    } else if error.is_request() {
        NetworkFault::Request
    } else if error.is_body() {
        NetworkFault::Body
    } else if error.is_decode() {
        NetworkFault::Decode
    } else {
        NetworkFault::Other
    }
}
