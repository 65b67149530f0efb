use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("distance table is not square ({rows} rows, {cols} columns)")]
    NotSquare { rows: usize, cols: usize },
    #[error("distance table must cover at least 2 nodes, found {0}")]
    TooFewNodes(usize),
    #[error("failed to read {0}: {1}")]
    UnreadableFile(String, #[source] std::io::Error),
    #[error("failed to parse `{token}` on line {line}")]
    MalformedNumber { line: usize, token: String },
    #[error("failed to parse config file: {0}")]
    BadConfig(#[from] serde_yaml::Error),
}
