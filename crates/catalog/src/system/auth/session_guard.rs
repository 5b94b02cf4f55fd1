use contracts::system::auth::{LoginRequest, StoredSession, UserInfo, SESSION_STORAGE_KEY};

use crate::shared::config::AuthConfig;
use crate::shared::data::KeyValueStorage;
use crate::shared::errors::CatalogResult;

/// Доступ к админ-панели по одной учётной записи из конфигурации
///
/// Флаг сессии хранится в key/value хранилище и восстанавливается при старте.
pub struct SessionGuard<S> {
    storage: S,
    credentials: AuthConfig,
    user: Option<UserInfo>,
}

impl<S: KeyValueStorage> SessionGuard<S> {
    /// Создать guard и восстановить сохранённую сессию
    pub fn restore(storage: S, credentials: AuthConfig) -> CatalogResult<Self> {
        let user = match storage.get_item(SESSION_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<StoredSession>(&raw) {
                Ok(session) => {
                    tracing::info!("Session restored for {}", session.user.username);
                    Some(session.user)
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed session flag: {}", e);
                    None
                }
            },
            None => None,
        };
        Ok(Self {
            storage,
            credentials,
            user,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Проверить учётные данные; при успехе сессия сохраняется
    pub fn login(&mut self, request: &LoginRequest) -> CatalogResult<bool> {
        if request.username != self.credentials.username
            || request.password != self.credentials.password
        {
            tracing::warn!("Login rejected for {}", request.username);
            return Ok(false);
        }

        let session = StoredSession {
            user: UserInfo {
                username: request.username.clone(),
            },
        };
        self.storage
            .set_item(SESSION_STORAGE_KEY, &serde_json::to_string(&session)?)?;
        tracing::info!("User {} logged in", request.username);
        self.user = Some(session.user);
        Ok(true)
    }

    pub fn logout(&mut self) -> CatalogResult<()> {
        self.storage.remove_item(SESSION_STORAGE_KEY)?;
        if let Some(user) = self.user.take() {
            tracing::info!("User {} logged out", user.username);
        }
        Ok(())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::MemoryStorage;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_login_persists_flag() {
        let mut guard = SessionGuard::restore(MemoryStorage::new(), AuthConfig::default()).unwrap();
        assert!(!guard.is_authenticated());

        assert!(!guard.login(&request("admin", "wrong")).unwrap());
        assert!(!guard.is_authenticated());

        assert!(guard.login(&request("admin", "admin123")).unwrap());
        assert_eq!(guard.user().unwrap().username, "admin");

        let storage = guard.into_storage();
        assert_eq!(
            storage.get_item(SESSION_STORAGE_KEY).unwrap().as_deref(),
            Some("{\"user\":{\"username\":\"admin\"}}")
        );

        let restored = SessionGuard::restore(storage, AuthConfig::default()).unwrap();
        assert!(restored.is_authenticated());
    }

    #[test]
    fn test_logout_clears_flag() {
        let mut guard = SessionGuard::restore(MemoryStorage::new(), AuthConfig::default()).unwrap();
        guard.login(&request("admin", "admin123")).unwrap();
        guard.logout().unwrap();
        assert!(!guard.is_authenticated());

        let storage = guard.into_storage();
        assert_eq!(storage.get_item(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_malformed_flag_is_ignored() {
        let mut storage = MemoryStorage::new();
        storage.set_item(SESSION_STORAGE_KEY, "{broken").unwrap();
        let guard = SessionGuard::restore(storage, AuthConfig::default()).unwrap();
        assert!(!guard.is_authenticated());
    }
}
