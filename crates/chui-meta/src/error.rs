//! Error types for chui-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] chui_fs::Error),

    #[error("\"{value}\" is not a valid Chui app type")]
    UnknownAppType { value: String },
}
