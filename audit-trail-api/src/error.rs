use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Record already deleted: {0}")]
    RecordDeleted(String),

    #[error("Record not yet persisted: {0}")]
    NotPersisted(String),
}

pub type AuditResult<T> = Result<T, AuditError>;
