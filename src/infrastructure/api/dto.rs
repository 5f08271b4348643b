use serde::{Deserialize, Serialize};

use crate::domain::entities::UserData;

/// Body of a successful `GET /login` or `POST /login`.
#[derive(Debug, Deserialize)]
pub struct AuthInfoResponse {
    #[serde(flatten)]
    pub user: UserData,
    pub token: String,
}

/// Error body returned by the API.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

impl ErrorResponse {
    /// Joins the top-level message with any per-field messages, each
    /// prefixed by the field it refers to.
    #[must_use]
    pub fn summary(&self) -> String {
        let details: Vec<String> = self
            .details
            .iter()
            .flat_map(|detail| {
                detail.messages.iter().map(|message| {
                    if detail.property.is_empty() {
                        message.clone()
                    } else {
                        format!("{}: {message}", detail.property)
                    }
                })
            })
            .collect();

        if details.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", self.message, details.join("; "))
        }
    }
}

/// Field-level validation failure.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_info_flattens_user() {
        let json = r#"{
            "name": "Oliver.conner",
            "avatarUrl": "https://url-to-image/image.png",
            "isPro": false,
            "email": "Oliver.conner@gmail.com",
            "token": "T2xpdmVyLmNvbm5lckBnbWFpbC5jb20="
        }"#;

        let response: AuthInfoResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.user.email, "Oliver.conner@gmail.com");
        assert_eq!(response.token, "T2xpdmVyLmNvbm5lckBnbWFpbC5jb20=");
    }

    #[test]
    fn test_error_summary_includes_details() {
        let json = r#"{
            "errorType": "VALIDATION_ERROR",
            "message": "Validation error: '/six-cities/login'",
            "details": [{"property": "email", "value": "x", "messages": ["email must be an email"]}]
        }"#;

        let response: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.summary(),
            "Validation error: '/six-cities/login': email: email must be an email"
        );
    }

    #[test]
    fn test_error_summary_joins_every_field() {
        let json = r#"{
            "message": "Validation error",
            "details": [
                {"property": "comment", "messages": ["too short", "required"]},
                {"messages": ["rating out of range"]}
            ]
        }"#;

        let response: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.summary(),
            "Validation error: comment: too short; comment: required; rating out of range"
        );
    }

    #[test]
    fn test_error_summary_without_details() {
        let response = ErrorResponse {
            message: "Offer not found".to_string(),
            ..ErrorResponse::default()
        };

        assert_eq!(response.summary(), "Offer not found");
    }
}
