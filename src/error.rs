use std::path::PathBuf;

// Exit codes follow the Windows system error code table.
pub const ERROR_SUCCESS: i32 = 0;
pub const ERROR_INVALID_FUNCTION: i32 = 1;
pub const ERROR_FILE_NOT_FOUND: i32 = 2;
pub const ERROR_INVALID_DATA: i32 = 13;
pub const ERROR_READ_FAULT: i32 = 30;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File does not exist: \"{}\"", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File \"{}\" has no data inside. Skipping it.", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("Wrong File ID (got: {found}, needs: {})", crate::codec::FILE_ID)]
    InvalidFormat { found: String },

    #[error("unexpected end of data")]
    Truncated,

    #[error("malformed 7-bit encoded string length")]
    InvalidStringLength,

    #[error("io error: {0}")]
    Io(String),

    #[error("diff tool failed: {0}")]
    DiffTool(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => ERROR_FILE_NOT_FOUND,
            Self::EmptyFile { .. }
            | Self::InvalidFormat { .. }
            | Self::Truncated
            | Self::InvalidStringLength => ERROR_INVALID_DATA,
            Self::Io(_) => ERROR_READ_FAULT,
            Self::DiffTool(_) => ERROR_INVALID_FUNCTION,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        let not_found = Error::FileNotFound { path: "a".into() }.exit_code();
        let invalid = Error::Truncated.exit_code();
        let io = Error::Io("x".into()).exit_code();

        assert_eq!(not_found, 2);
        assert_eq!(invalid, 13);
        assert_eq!(Error::EmptyFile { path: "a".into() }.exit_code(), 13);
        assert_ne!(io, ERROR_SUCCESS);
        assert_ne!(io, not_found);
        assert_ne!(io, invalid);
    }

    #[test]
    fn test_invalid_format_message() {
        let err = Error::InvalidFormat { found: "Nope".into() };
        assert_eq!(err.to_string(), "Wrong File ID (got: Nope, needs: AreaMapTiles)");
    }
}
