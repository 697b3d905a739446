use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts, State},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, Origin, UserAgent, authorization::Bearer};
use std::net::SocketAddr;
use tracing::info;
use util::state::AppState;

use crate::auth::extractors::decode_claims;

/// Logs method, path, IP address, user ID (if a valid token is present), origin,
/// and user-agent for each incoming HTTP request. CORS preflight `OPTIONS`
/// requests are skipped.
///
/// ### Usage:
/// ```ignore
/// let app = Router::new().layer(from_fn_with_state(app_state, log_request));
/// ```
pub async fn log_request(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let user_id = TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &state)
        .await
        .ok()
        .and_then(|TypedHeader(Authorization(bearer))| decode_claims(bearer.token(), &state))
        .map(|claims| claims.sub.to_string());

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &state)
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &state)
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    info!(
        method = ?parts.method,
        path = %parts.uri.path(),
        ip = %ip,
        user = user_id.as_deref().unwrap_or("anonymous"),
        origin = origin.as_deref().unwrap_or("unknown"),
        user_agent = user_agent.as_deref().unwrap_or("unknown"),
        "Incoming request"
    );

    next.run(Request::from_parts(parts, body)).await
}
