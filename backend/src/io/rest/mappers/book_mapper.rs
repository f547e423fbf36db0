use crate::domain::models::book::Book as DomainBook;
use shared::Book as BookDto;

/// Converts between the domain book and its wire representation
pub struct BookMapper;

impl BookMapper {
    pub fn to_dto(book: DomainBook) -> BookDto {
        BookDto {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }

    pub fn to_dtos(books: Vec<DomainBook>) -> Vec<BookDto> {
        books.into_iter().map(Self::to_dto).collect()
    }
}
