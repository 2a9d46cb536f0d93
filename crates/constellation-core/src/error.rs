use thiserror::Error;

/// Errors raised by the platform-free core.
///
/// Rendering itself never fails: malformed content blocks are skipped. These
/// variants cover parsing at the edges (JSON payloads, ids, colors).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid image asset reference `{0}`")]
    InvalidImageRef(String),

    #[error("unknown pillar id `{0}`")]
    UnknownPillar(String),

    #[error("unknown view `{0}`")]
    UnknownView(String),

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown visual preset `{0}`")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
