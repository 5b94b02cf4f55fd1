pub mod service;

pub use service::{books_screen, demo_books, BooksScreen};
