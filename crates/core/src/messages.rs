//! Request/response shapes of the admin backend actions
//!
//! The backend owns the real rules; these types only describe the JSON it
//! exchanges with the admin pages.

use serde::{Deserialize, Serialize};

pub const CONFIRM_USERS_PATH: &str = "/api/confirm_users";
pub const DELETE_USERS_PATH: &str = "/api/delete_users";

/// Link that streams a test's results as a file
pub fn download_results_path(test_id: i64) -> String {
    format!("/download_results/{}", test_id)
}

/// Body of the confirm/delete user actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdsRequest {
    pub user_ids: Vec<String>,
}

impl UserIdsRequest {
    pub fn new(user_ids: Vec<String>) -> Self {
        Self { user_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty()
    }
}

/// Answer to every backend action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ActionResponse {
    /// Text to show the admin: the message itself, or an error prefix on failure
    pub fn display_message(&self) -> String {
        if self.success {
            self.message.clone()
        } else {
            format!("Ошибка: {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = UserIdsRequest::new(vec!["17".to_string(), "42".to_string()]);
        assert!(!body.is_empty());
        assert!(UserIdsRequest::new(Vec::new()).is_empty());
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"user_ids":["17","42"]}"#);
    }

    #[test]
    fn test_response_parsing() {
        let ok: ActionResponse =
            serde_json::from_str(r#"{"success": true, "message": "Пользователи подтверждены"}"#).unwrap();
        assert_eq!(ok.display_message(), "Пользователи подтверждены");

        let failed: ActionResponse = serde_json::from_str(r#"{"success": false, "message": "нет доступа"}"#).unwrap();
        assert_eq!(failed.display_message(), "Ошибка: нет доступа");
    }

    #[test]
    fn test_download_path() {
        assert_eq!(download_results_path(12), "/download_results/12");
    }
}
