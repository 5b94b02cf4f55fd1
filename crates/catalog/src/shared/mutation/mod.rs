pub mod gateway;

pub use gateway::{Mutable, MutationGateway};
