//! Settings screen sections: profile, preferences and library policy

use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationRules;

pub const PROFILE_STORAGE_KEY: &str = "library_settings_profile";
pub const PREFERENCES_STORAGE_KEY: &str = "library_settings_preferences";
pub const LIBRARY_STORAGE_KEY: &str = "library_settings_library";

/// Профиль администратора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub username: String,
    pub email: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            email: "admin@digitallibrary.com".into(),
            full_name: "Library Administrator".into(),
        }
    }
}

impl ProfileSettings {
    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::required().validate_string(&self.username, "Username")?;
        ValidationRules::required().validate_string(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err(format!("Email is not valid: {}", self.email));
        }
        ValidationRules::none().validate_string(&self.full_name, "Full name")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Настройки приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub notifications: bool,
    #[serde(rename = "emailUpdates")]
    pub email_updates: bool,
    #[serde(rename = "autoSave")]
    pub auto_save: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            notifications: true,
            email_updates: false,
            auto_save: true,
        }
    }
}

pub const DEFAULT_MAX_BOOKS_PER_USER: u32 = 5;
pub const DEFAULT_LOAN_DURATION_DAYS: u32 = 14;

/// Политика библиотеки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    #[serde(rename = "maxBooksPerUser")]
    pub max_books_per_user: u32,
    #[serde(rename = "loanDuration")]
    pub loan_duration_days: u32,
    #[serde(rename = "allowReservations")]
    pub allow_reservations: bool,
    #[serde(rename = "publicAccess")]
    pub public_access: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            max_books_per_user: DEFAULT_MAX_BOOKS_PER_USER,
            loan_duration_days: DEFAULT_LOAN_DURATION_DAYS,
            allow_reservations: true,
            public_access: false,
        }
    }
}

impl LibrarySettings {
    /// Разбор поля ввода; нечисловой или нулевой ввод даёт значение по умолчанию
    pub fn parse_count(input: &str, default: u32) -> u32 {
        match input.trim().parse::<u32>() {
            Ok(0) | Err(_) => default,
            Ok(value) => value,
        }
    }

    pub fn set_max_books_input(&mut self, input: &str) {
        self.max_books_per_user = Self::parse_count(input, DEFAULT_MAX_BOOKS_PER_USER);
    }

    pub fn set_loan_duration_input(&mut self, input: &str) {
        self.loan_duration_days = Self::parse_count(input, DEFAULT_LOAN_DURATION_DAYS);
    }

    pub fn validate(&self) -> Result<(), String> {
        ValidationRules::range(1.0, 20.0)
            .validate_number(self.max_books_per_user as f64, "Max books per user")?;
        ValidationRules::range(1.0, 90.0)
            .validate_number(self.loan_duration_days as f64, "Loan duration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ProfileSettings::default().validate().is_ok());
        assert!(LibrarySettings::default().validate().is_ok());
        assert_eq!(Preferences::default().theme, Theme::System);
    }

    #[test]
    fn test_numeric_inputs_fall_back_to_defaults() {
        let mut settings = LibrarySettings::default();
        settings.set_max_books_input("12");
        assert_eq!(settings.max_books_per_user, 12);
        settings.set_max_books_input("twelve");
        assert_eq!(settings.max_books_per_user, 5);
        settings.set_loan_duration_input("0");
        assert_eq!(settings.loan_duration_days, 14);
    }

    #[test]
    fn test_library_ranges() {
        let settings = LibrarySettings {
            loan_duration_days: 120,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_profile_email_must_have_at() {
        let profile = ProfileSettings {
            email: "admin.digitallibrary.com".into(),
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }
}
