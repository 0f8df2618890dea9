//! Process-wide libcurl setup and teardown.
//!
//! Both functions are meant to be called by the embedding application: `init`
//! once before any thread issues requests, `disable` once after every request
//! has finished. libcurl counts calls to its global init, so `init` may be
//! called more than once as long as each call is matched by a `disable`.

use log::debug;

use crate::error::InitError;

/// Prepare libcurl's global state. Call this before starting any threads
/// that issue requests.
pub fn init() -> Result<(), InitError> {
    let code = unsafe { curl_sys::curl_global_init(curl_sys::CURL_GLOBAL_ALL) };
    if code != curl_sys::CURLE_OK {
        return Err(InitError { code: code as i32 });
    }
    debug!("libcurl {} initialized", curl::Version::get().version());
    Ok(())
}

/// Release the global state acquired by `init`.
///
/// # Safety
///
/// Must not run concurrently with `init`, with another `disable`, or with
/// any in-flight request, and must be called at most once per successful
/// `init`.
pub unsafe fn disable() {
    curl_sys::curl_global_cleanup();
    debug!("libcurl global state released");
}
