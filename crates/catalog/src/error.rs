#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Empty,
    Io(String),
    Parse(String),
    InvalidEntry { index: usize, reason: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no entries"),
            CatalogError::Io(msg) => write!(f, "catalog read failed: {msg}"),
            CatalogError::Parse(msg) => write!(f, "catalog is not valid JSON: {msg}"),
            CatalogError::InvalidEntry { index, reason } => {
                write!(f, "catalog entry #{index} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
