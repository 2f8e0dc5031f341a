//! Schema validation for JSON request bodies
//!
//! Every structural problem with a body (not JSON, wrong field type, missing
//! field, violated range/length constraint) is rejected here with a 422,
//! before any handler logic runs.

use actix_web::error::JsonPayloadError;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::future::Future;
use std::pin::Pin;
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, FieldError};

/// Field name reported when a failure can't be attributed to one field
const BODY_FIELD: &str = "body";

/// JSON body extractor that also enforces the type's `Validate` constraints
///
/// Usage in handlers:
/// ```ignore
/// async fn my_handler(body: ValidatedJson<TokenRequest>) -> HttpResponse {
///     // body.0 passed every declared constraint
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);
        let path = req.path().to_string();

        Box::pin(async move {
            let value = json.await.map_err(normalize_error)?.into_inner();

            if let Err(errors) = value.validate() {
                let fields = validation_field_errors(&errors);
                log::debug!("Rejected body for {}: {:?}", path, fields);
                return Err(AppError::Unprocessable(fields).into());
            }

            Ok(ValidatedJson(value))
        })
    }
}

/// JSON extractor config whose errors follow the API error contract
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            log::debug!("Rejected body for {}: {}", req.path(), err);
            payload_error(&err).into()
        })
}

/// Maps a JSON payload error onto the API error taxonomy
pub fn payload_error(err: &JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::OverflowKnownLength { length, limit } => AppError::PayloadTooLarge(
            format!("body is {} bytes, limit is {} bytes", length, limit),
        ),
        JsonPayloadError::Overflow { limit } => {
            AppError::PayloadTooLarge(format!("body exceeds {} bytes", limit))
        }
        JsonPayloadError::ContentType => AppError::Unprocessable(vec![FieldError::new(
            BODY_FIELD,
            "content_type",
            "expected Content-Type: application/json",
        )]),
        JsonPayloadError::Deserialize(e) => AppError::Unprocessable(vec![deserialize_field_error(e)]),
        other => AppError::Unprocessable(vec![FieldError::new(
            BODY_FIELD,
            "json",
            other.to_string(),
        )]),
    }
}

/// Describes a serde failure, naming the field when serde reports one
pub fn deserialize_field_error(err: &serde_json::Error) -> FieldError {
    let message = err.to_string();

    if let Some(field) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        return FieldError::new(field, "required", format!("{} is required", field));
    }

    let constraint = match err.classify() {
        Category::Data => "type",
        Category::Syntax | Category::Eof | Category::Io => "json",
    };
    FieldError::new(BODY_FIELD, constraint, message)
}

/// Flattens `validator` errors into field errors, ordered by field name
pub fn validation_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} failed {} validation", field, e.code));
                FieldError::new(field.to_string(), e.code.to_string(), message)
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Routes errors from a `Json` extractor without our config through the same mapping
fn normalize_error(err: actix_web::Error) -> actix_web::Error {
    match err.as_error::<JsonPayloadError>() {
        Some(payload) => payload_error(payload).into(),
        None => err,
    }
}
