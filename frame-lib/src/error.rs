/// Errors from writing, saving or reading back frames.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("markup found before the first frame label")]
    MissingLabel,

    #[error("frame label out of order: expected {expected}, found {found}")]
    OutOfOrder { expected: usize, found: usize },
}
