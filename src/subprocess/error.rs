#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interrupted while running `{command}`")]
    Interrupted { command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
