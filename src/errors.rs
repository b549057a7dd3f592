use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkmintError {
    Validation(String),
    NotFound(String),
    CorruptRecord(String),
    Storage(String),
    Serialization(String),
}

impl LinkmintError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkmintError::Validation(_) => "E001",
            LinkmintError::NotFound(_) => "E002",
            LinkmintError::CorruptRecord(_) => "E003",
            LinkmintError::Storage(_) => "E004",
            LinkmintError::Serialization(_) => "E005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkmintError::Validation(_) => "Validation Error",
            LinkmintError::NotFound(_) => "Resource Not Found",
            LinkmintError::CorruptRecord(_) => "Corrupt Record",
            LinkmintError::Storage(_) => "Storage Error",
            LinkmintError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkmintError::Validation(msg) => msg,
            LinkmintError::NotFound(msg) => msg,
            LinkmintError::CorruptRecord(msg) => msg,
            LinkmintError::Storage(msg) => msg,
            LinkmintError::Serialization(msg) => msg,
        }
    }
}

impl fmt::Display for LinkmintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for LinkmintError {}

// 便捷的构造函数
impl LinkmintError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkmintError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkmintError::NotFound(msg.into())
    }

    pub fn corrupt_record<T: Into<String>>(msg: T) -> Self {
        LinkmintError::CorruptRecord(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        LinkmintError::Storage(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkmintError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<redb::DatabaseError> for LinkmintError {
    fn from(err: redb::DatabaseError) -> Self {
        LinkmintError::Storage(err.to_string())
    }
}

impl From<redb::TransactionError> for LinkmintError {
    fn from(err: redb::TransactionError) -> Self {
        LinkmintError::Storage(err.to_string())
    }
}

impl From<redb::TableError> for LinkmintError {
    fn from(err: redb::TableError) -> Self {
        LinkmintError::Storage(err.to_string())
    }
}

impl From<redb::StorageError> for LinkmintError {
    fn from(err: redb::StorageError) -> Self {
        LinkmintError::Storage(err.to_string())
    }
}

impl From<redb::CommitError> for LinkmintError {
    fn from(err: redb::CommitError) -> Self {
        LinkmintError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LinkmintError {
    fn from(err: serde_json::Error) -> Self {
        LinkmintError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkmintError>;
