/// A book as owned by the store: the id is always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// A validated book that has not been stored yet
///
/// The only way to build one is [`NewBook::new`], so every `NewBook` handed
/// to a store has a non-empty title and author. Fields are stored exactly as
/// given, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title: String,
    author: String,
}

impl NewBook {
    pub fn new(title: &str, author: &str) -> Result<Self, BookValidationError> {
        if title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Author cannot be empty")]
    EmptyAuthor,
}
