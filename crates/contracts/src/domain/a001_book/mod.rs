pub mod aggregate;

pub use aggregate::{Book, BookDto, BookId, BookPatch, DocumentLink};
