use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response (the `data` of a successful `/auth/login`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    /// Real name shown in the console header; falls back to `username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Token lifetime in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl LoginResponse {
    /// Name to display for the logged in user.
    pub fn display_name(&self) -> &str {
        match self.real_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Identity fields that can be refreshed without a new token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        match self.real_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

impl From<&crate::dto::user::UserDto> for UserInfo {
    fn from(user: &crate::dto::user::UserDto) -> Self {
        Self {
            username: user.username.clone(),
            real_name: user.real_name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_real_name() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token":"t","username":"alice","realName":"Alice Zhang"}"#,
        )
        .unwrap();

        assert_eq!(response.display_name(), "Alice Zhang");
        assert!(response.permissions.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let info = UserInfo {
            username: "bob".to_string(),
            real_name: Some(String::new()),
            avatar: None,
        };

        assert_eq!(info.display_name(), "bob");
    }
}
