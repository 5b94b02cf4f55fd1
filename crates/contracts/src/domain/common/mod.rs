//! Common types and traits for all catalog records

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod comment;
pub mod filterable;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::{AggregateRoot, Completable};
pub use base_aggregate::BaseAggregate;
pub use comment::{Comment, CommentId};
pub use filterable::Filterable;
