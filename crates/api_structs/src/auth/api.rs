use serde::{Deserialize, Serialize};

pub mod verify_password {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub password: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub token: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
    }

    impl APIResponse {
        pub fn accepted(token: String) -> Self {
            Self {
                success: true,
                token: Some(token),
                message: None,
            }
        }

        pub fn rejected<T: Into<String>>(message: T) -> Self {
            Self {
                success: false,
                token: None,
                message: Some(message.into()),
            }
        }
    }
}
