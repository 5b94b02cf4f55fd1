//! Shared domain types of the digital library: records, filters, dashboards, settings

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
