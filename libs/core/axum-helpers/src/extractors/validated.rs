//! Extractor that runs a route's field rules before the handler.

use crate::errors::AppError;
use crate::validation::{FieldRule, RequestInput, run};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, RawPathParams, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde_json::Value;
use std::collections::HashMap;

/// A request type guarded by a list of field rules.
///
/// `RULES` are evaluated in order against the raw path params and JSON body;
/// `from_input` only runs when every rule passed.
pub trait ValidatedRequest: Sized {
    const RULES: &'static [FieldRule];

    fn from_input(input: RequestInput) -> Result<Self, AppError>;
}

/// Validation gate: rejects with `400 { "errors": [...] }` if any rule of
/// `T::RULES` failed, otherwise hands the built `T` to the handler.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::{AppError, Validated, ValidatedRequest};
/// use axum_helpers::validation::{Check, FieldRule, RequestInput};
///
/// struct ItemId(i32);
///
/// impl ValidatedRequest for ItemId {
///     const RULES: &'static [FieldRule] = &[
///         FieldRule::param("id", Check::Int).with_message("INVALID_ID", "invalid id"),
///     ];
///
///     fn from_input(input: RequestInput) -> Result<Self, AppError> {
///         input.param_i32("id").map(ItemId).ok_or_else(|| AppError::BadRequest("id".into()))
///     }
/// }
///
/// async fn get_item(Validated(ItemId(id)): Validated<ItemId>) -> String {
///     id.to_string()
/// }
///
/// let app: Router = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: ValidatedRequest,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Undecodable params are left out so the param rules report them.
        let params: HashMap<String, String> =
            match RawPathParams::from_request_parts(&mut parts, state).await {
                Ok(raw) => raw
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
                Err(rejection) => {
                    tracing::debug!("Path params unavailable: {}", rejection.body_text());
                    HashMap::new()
                }
            };

        let is_json = has_json_content_type(&parts.headers);
        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let body = parse_body(&bytes, is_json)?;
        let input = RequestInput::new(params, body);

        let violations = run(T::RULES, &input);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        T::from_input(input).map(Validated)
    }
}

/// Bodies that are empty or not declared as JSON read as `{}`.
fn parse_body(bytes: &[u8], is_json: bool) -> Result<Value, AppError> {
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(bytes).map_err(|e| AppError::InvalidJson(e.to_string()))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
