use chrono::{TimeZone, Utc};
use contracts::domain::a001_book::{Book, BookDto, BookPatch, DocumentLink};
use contracts::enums::Category;
use contracts::shared::filter::CategoryScope;

use crate::shared::data::RecordStore;
use crate::shared::mutation::{Mutable, MutationGateway};
use crate::shared::screen::ListScreen;

impl Mutable for Book {
    type Dto = BookDto;
    type Patch = BookPatch;

    fn from_dto(dto: BookDto) -> Self {
        Book::new_for_insert(dto)
    }

    fn apply_patch(&mut self, patch: &BookPatch) {
        Book::apply_patch(self, patch)
    }

    fn patch_is_empty(patch: &BookPatch) -> bool {
        patch.is_empty()
    }
}

/// Экран каталога книг
pub type BooksScreen = ListScreen<Book>;

/// Экран каталога с заданной областью категорий
pub fn books_screen(store: RecordStore<Book>, scope: CategoryScope) -> BooksScreen {
    ListScreen::new(MutationGateway::new(store), scope)
}

/// Демо-каталог: по одной книге на категорию
pub fn demo_books() -> RecordStore<Book> {
    let data = [
        (
            "The Poetry of Emily Dickinson",
            "Emily Dickinson",
            Category::Poetry,
            2023,
            "A comprehensive collection of Emily Dickinson's poetry",
            "/books/poetry/emily-dickinson.pdf",
            (2023, 3, 14),
        ),
        (
            "Ancient Greek Traditions",
            "Classical Studies",
            Category::Tradition,
            2022,
            "Exploring ancient Greek cultural traditions",
            "/books/tradition/greek-traditions.pdf",
            (2022, 10, 2),
        ),
        (
            "Modern Literature Review",
            "Various Authors",
            Category::Reading,
            2024,
            "Contemporary literature analysis and reviews",
            "/books/reading/modern-lit.pdf",
            (2024, 1, 22),
        ),
        (
            "Shakespeare's Greatest Plays",
            "William Shakespeare",
            Category::Drama,
            2023,
            "Collection of Shakespeare's most famous dramatic works",
            "/books/drama/shakespeare.pdf",
            (2023, 3, 30),
        ),
        (
            "The Art of Origami",
            "Origami Masters",
            Category::Folding,
            2024,
            "Traditional and modern paper folding techniques",
            "/books/folding/origami-art.pdf",
            (2024, 5, 8),
        ),
    ];

    RecordStore::with_records(data.into_iter().filter_map(
        |(title, author, category, year, description, path, (y, m, d))| {
            let created_at = Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).single()?;
            let dto = BookDto {
                title: title.into(),
                author: author.into(),
                category,
                year,
                description: description.into(),
                file_path: DocumentLink::new(path),
            };
            Some(Book::new_with_created_at(dto, created_at))
        },
    ))
}

#[cfg(test)]
pub(crate) fn sample_dto(category: Category, year: i32) -> BookDto {
    BookDto {
        title: "Sample Title".into(),
        author: "Sample Author".into(),
        category,
        year,
        description: String::new(),
        file_path: DocumentLink::new(format!("/books/{}/sample.pdf", category.code())),
    }
}
