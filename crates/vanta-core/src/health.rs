use axum::http::StatusCode;

/// Liveness probe. Unconditional: a responding process is a live process.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe. The api service has no warm-up phase, so readiness is
/// implied by serving at all.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
