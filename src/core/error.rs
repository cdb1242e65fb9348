use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyFieldList,
    IndexAlreadyExists,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn empty_field_list() -> Self {
        Error::new(ErrorKind::EmptyFieldList, "no fields to index".to_string())
    }

    pub fn index_already_exists(name: &str) -> Self {
        Error::new(
            ErrorKind::IndexAlreadyExists,
            format!("index {} already exists", name),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
