use serde::{Deserialize, Serialize};

/// Key under which the session flag is kept in local storage
pub const SESSION_STORAGE_KEY: &str = "library_auth";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

/// Persisted session flag: `{"user":{"username":"admin"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: UserInfo,
}
