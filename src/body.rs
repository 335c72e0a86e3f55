//! Request body extraction.
//!
//! The gateway hands us the event as JSON. `body` may be an encoded JSON
//! string or an object, and some integrations wrap the payload once more
//! under a nested `body`. Everything here only deals with shape; no field is
//! validated.

use serde_json::{Map, Value as Json};

use crate::error::ShortenError;
use crate::model::ShortenRequest;

const INVALID_BODY: &str = "Invalid body format";

type Object = Map<String, Json>;

fn decode(raw: &Json) -> Result<Option<Object>, ShortenError> {
    match raw {
        Json::String(s) => match serde_json::from_str::<Json>(s)? {
            Json::Object(m) => Ok(Some(m)),
            _ => Err(ShortenError::InvalidBody(INVALID_BODY.into())),
        },
        Json::Object(m) => Ok(Some(m.clone())),
        _ => Ok(None),
    }
}

/// Effective body object of an invocation event.
pub fn effective_body(event: &Json) -> Result<Object, ShortenError> {
    let raw = event.get("body").unwrap_or(&Json::Null);
    let outer = decode(raw)?.ok_or_else(|| ShortenError::InvalidBody(INVALID_BODY.into()))?;

    // double-wrapped: {"body": {"body": "..."}}
    if let Some(nested) = outer.get("body") {
        if let Some(inner) = decode(nested)? {
            return Ok(inner);
        }
    }
    Ok(outer)
}

/// Pull the two known fields out of the effective body.
pub fn extract(event: &Json) -> Result<ShortenRequest, ShortenError> {
    let body = effective_body(event)?;
    tracing::debug!(body = ?body, "effective body");

    let original_url = body
        .get("originalUrl")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let expiration_time = match body.get("expirationTime") {
        None | Some(Json::Null) => None,
        Some(Json::String(s)) => Some(s.clone()),
        Some(_) => return Err(ShortenError::InvalidExpirationFormat),
    };

    Ok(ShortenRequest {
        original_url,
        expiration_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expected() -> ShortenRequest {
        ShortenRequest {
            original_url: Some("https://example.com".into()),
            expiration_time: Some("5".into()),
        }
    }

    #[test]
    fn string_body() {
        let evt = json!({"body": r#"{"originalUrl":"https://example.com","expirationTime":"5"}"#});
        assert_eq!(extract(&evt).unwrap(), expected());
    }

    #[test]
    fn object_body() {
        let evt = json!({"body": {"originalUrl": "https://example.com", "expirationTime": "5"}});
        assert_eq!(extract(&evt).unwrap(), expected());
    }

    #[test]
    fn double_wrapped_string() {
        let evt = json!({"body": {"body": r#"{"originalUrl":"https://example.com","expirationTime":"5"}"#}});
        assert_eq!(extract(&evt).unwrap(), expected());
    }

    #[test]
    fn double_wrapped_object_inside_string() {
        let inner = json!({"body": {"originalUrl": "https://example.com", "expirationTime": "5"}});
        let evt = json!({"body": inner.to_string()});
        assert_eq!(extract(&evt).unwrap(), expected());
    }

    #[test]
    fn nested_body_of_other_type_is_ignored() {
        let evt = json!({"body": {"body": 7, "originalUrl": "https://example.com"}});
        let req = extract(&evt).unwrap();
        assert_eq!(req.original_url.as_deref(), Some("https://example.com"));
        assert!(req.expiration_time.is_none());
    }

    #[test]
    fn missing_or_scalar_body_is_invalid() {
        for evt in [json!({}), json!({"body": null}), json!({"body": 42}), json!({"body": [1]})] {
            let err = extract(&evt).unwrap_err();
            assert_eq!(err.public_message(), "Internal server error: Invalid body format");
        }
    }

    #[test]
    fn undecodable_string_is_internal_error() {
        let err = extract(&json!({"body": "{not json"})).unwrap_err();
        assert_eq!(err.status(), 500);
        assert!(err.public_message().starts_with("Internal server error: "));
    }

    #[test]
    fn string_that_is_not_an_object_is_invalid() {
        let err = extract(&json!({"body": "\"just text\""})).unwrap_err();
        assert!(matches!(err, ShortenError::InvalidBody(_)));
    }

    #[test]
    fn non_string_fields() {
        let req = extract(&json!({"body": {"originalUrl": 3, "expirationTime": null}})).unwrap();
        assert_eq!(req, ShortenRequest::default());

        let err = extract(&json!({"body": {"originalUrl": "https://a.b", "expirationTime": 5}}))
            .unwrap_err();
        assert!(matches!(err, ShortenError::InvalidExpirationFormat));
    }
}
