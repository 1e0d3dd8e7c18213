use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse network JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to build internal network model: {0}")]
    ModelConstructionError(String),

    #[error("Entity does not belong to this network: {0}")]
    CrossNetwork(String),

    #[error("An availability query received an empty fiber collection")]
    EmptyFiberSet,

    #[error("All fibers in a bidirectional adjacency query must be bidirectional")]
    RequiresBidirectional,

    #[error("A fiber or its bidirectional pair appears more than once among the candidate options")]
    DuplicateFiberOption,

    #[error("The propagation path is empty")]
    EmptyPath,

    #[error("The sequence of fibers is not a contiguous unicast path")]
    NonContiguousPath,

    #[error("The signal of this lightpath is not reaching the drop node")]
    SignalNotReachingDrop,

    #[error("Fiber is longer ({length_km} km) than the maximum distance without regenerators ({max_km} km)")]
    FiberTooLong { length_km: f64, max_km: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
