//! Middleware for protecting authenticated routes and handling authorization.
//!
//! Authorization is declared as an explicit route-policy table mapping
//! (method, path) to the role required for that operation. A single gate
//! consults the table before dispatch, so a caller lacking the required role
//! never reaches a handler or the persistence layer. Requests with no policy
//! entry pass through to the router untouched.

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::ApiError;
use crate::state::AppState;

use super::errors::AuthError;
use super::models::{Claims, Role};
use super::service::decode_token;

/// Role required for one routed operation.
struct RoutePolicy {
    method: Method,
    path: &'static str,
    required: Role,
}

static ROUTE_POLICIES: &[RoutePolicy] = &[
    RoutePolicy { method: Method::GET, path: "/api/recommendation/all", required: Role::User },
    RoutePolicy { method: Method::GET, path: "/api/recommendation", required: Role::User },
    RoutePolicy { method: Method::POST, path: "/api/recommendation/post", required: Role::Admin },
    RoutePolicy { method: Method::PUT, path: "/api/recommendation", required: Role::Admin },
    RoutePolicy { method: Method::GET, path: "/api/MenuItemReview/all", required: Role::User },
    RoutePolicy { method: Method::GET, path: "/api/MenuItemReview", required: Role::User },
    RoutePolicy { method: Method::POST, path: "/api/MenuItemReview/post", required: Role::Admin },
    RoutePolicy { method: Method::PUT, path: "/api/MenuItemReview", required: Role::Admin },
    RoutePolicy { method: Method::DELETE, path: "/api/MenuItemReview", required: Role::Admin },
    RoutePolicy { method: Method::GET, path: "/api/UCSBDiningCommonsMenuItem/all", required: Role::User },
    RoutePolicy { method: Method::GET, path: "/api/UCSBDiningCommonsMenuItem", required: Role::User },
    RoutePolicy { method: Method::POST, path: "/api/UCSBDiningCommonsMenuItem/post", required: Role::Admin },
];

/// Looks up the role required for an operation, if it is gated at all.
pub fn required_role(method: &Method, path: &str) -> Option<Role> {
    ROUTE_POLICIES
        .iter()
        .find(|policy| policy.method == *method && policy.path == path)
        .map(|policy| policy.required)
}

/// The authorization gate applied ahead of the router. Trailing slashes are
/// trimmed before the lookup so a slash variant cannot slip past a policy.
pub async fn authorize(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().trim_end_matches('/');
    let Some(required) = required_role(request.method(), path) else {
        return next.run(request).await;
    };

    match caller_claims(&request, &state.config.jwt_secret) {
        Ok(claims) if claims.satisfies(required) => next.run(request).await,
        Ok(_) => ApiError::Forbidden.into_response(),
        Err(denied) => ApiError::from(denied).into_response(),
    }
}

fn caller_claims(request: &Request, secret: &str) -> Result<Claims, AuthError> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredentials)?;

    decode_token(token, secret)
}
