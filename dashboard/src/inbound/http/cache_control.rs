//! Cache policy for rendered pages.

use actix_web::http::header;

/// Pages reflect a live upstream read and must never be replayed from cache.
pub const NO_STORE: &str = "no-store";

/// Header tuple applied to every rendered page and probe.
pub const fn no_store_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, NO_STORE)
}
