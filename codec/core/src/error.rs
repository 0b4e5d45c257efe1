use thiserror::Error;

use crate::types::{AudioCodec, MediaKind};

/**
    Errors from codec normalization and audio detail lookups.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("empty codec identifier")]
    Empty,

    #[error("unknown media kind '{0}'")]
    InvalidKind(String),

    #[error("unknown {kind} codec '{value}'")]
    UnknownCodec { kind: MediaKind, value: String },

    #[error("codec '{value}' is {actual}, expected {expected}")]
    KindMismatch {
        value: String,
        expected: MediaKind,
        actual: MediaKind,
    },

    #[error("invalid channel descriptor '{descriptor}' for {codec}")]
    InvalidDescriptor {
        codec: AudioCodec,
        descriptor: String,
    },

    #[error("{codec} does not support a sample rate of {rate} Hz")]
    UnsupportedSampleRate { codec: AudioCodec, rate: u32 },

    #[error("invalid bit depth {0}")]
    InvalidBitDepth(u8),
}

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
