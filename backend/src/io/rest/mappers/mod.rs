pub mod book_mapper;
