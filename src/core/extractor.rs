use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::error::AppError;

/// JSON body extractor that renders rejections as `ApiResponse` errors
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(rejection_to_error)
    }
}

/// [`AppJson`] whose payload must also pass its `validator` rules
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
        JsonRejection::MissingJsonContentType(err) => {
            format!("Missing JSON content type: {}", err)
        }
        JsonRejection::BytesRejection(err) => format!("Failed to read request body: {}", err),
        _ => "Failed to parse JSON body".to_string(),
    };

    AppError::BadRequest(message)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Router};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::{json, Value};

    use super::*;

    #[derive(Deserialize, Validate)]
    struct Label {
        #[validate(length(min = 2))]
        name: String,
    }

    async fn echo(ValidatedJson(label): ValidatedJson<Label>) -> String {
        label.name
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/labels", post(echo))).unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let response = server().post("/labels").json(&json!({"name": "Books"})).await;

        response.assert_status_ok();
        response.assert_text("Books");
    }

    #[tokio::test]
    async fn test_rule_violation_is_validation_error() {
        let response = server().post("/labels").json(&json!({"name": "B"})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.contains("name")));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = server()
            .post("/labels")
            .content_type("application/json")
            .bytes("{\"name\":".into())
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Invalid JSON syntax")));
    }
}
