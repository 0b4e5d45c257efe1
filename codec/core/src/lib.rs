/*!
    Codec identifier normalization.

    Maps RFC 6381 codec strings as found in DASH and HLS manifests
    (`mp4a.40.2`, `ec-3`, `avc1.64001F`) to a small closed vocabulary of
    normalized codecs, and resolves audio channel layouts from the channel
    descriptors that accompany them (`F801`, `16/JOC`, `6`).
*/

mod channels;
mod constants;
mod details;
mod error;
mod normalizer;
mod tables;
mod types;

#[cfg(feature = "serde")]
mod serde_impl;

pub mod utils;

pub use self::channels::ChannelLayout;
pub use self::constants::{BIT_DEPTHS, MAX_JOC_COMPLEXITY, supports_sample_rate};
pub use self::details::{AudioCodecDetails, ChannelDescriptor};
pub use self::error::{CodecError, ParseError};
pub use self::normalizer::{CodecNormalizer, NormalizerConfig};
pub use self::types::{AudioCodec, Codec, CodecInfo, MediaKind, SubtitleCodec, VideoCodec};
