use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов записей
///
/// Идентификатор непрозрачен для вызывающего кода и назначается хранилищем
/// при вставке. Новые ключи возрастают во времени (UUID v7).
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Сгенерировать новый уникальный идентификатор
    fn generate() -> Self;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявляет newtype-идентификатор поверх `Uuid` с реализацией [`AggregateId`]
#[macro_export]
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn generate() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map($name)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::uuid_id!(SampleId);

    #[test]
    fn test_generated_ids_are_unique_and_ordered() {
        let a = SampleId::generate();
        let b = SampleId::generate();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_string_round_trip() {
        let id = SampleId::generate();
        let parsed = SampleId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(SampleId::from_string("not-a-uuid").is_err());
    }
}
