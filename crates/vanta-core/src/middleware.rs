use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

/// Header every inbound request is stamped with before the trace layer runs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Issues v7 UUIDs, so request ids sort by arrival time in log output.
#[derive(Clone, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(value))
    }
}

pub fn request_id_layer() -> SetRequestIdLayer<UuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), UuidRequestId)
}
