use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("document version {0} does not exist")]
    VersionNotFound(u64),
}
