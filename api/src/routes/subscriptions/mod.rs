//! # subscriptions Routes Module
//!
//! A student's own plan subscriptions.

pub mod delete;
pub mod get;

use axum::{
    Router,
    routing::{delete, get},
};
use util::state::AppState;

use delete::cancel_subscription;
use get::list_subscriptions;

/// - `GET /subscriptions` → `list_subscriptions`
/// - `DELETE /subscriptions/{subscription_id}` → `cancel_subscription`
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subscriptions))
        .route("/{subscription_id}", delete(cancel_subscription))
}
