use tracing::{debug, trace};

use crate::channels::ChannelLayout;
use crate::constants::{BIT_DEPTHS, supports_sample_rate};
use crate::details::{AudioCodecDetails, ChannelDescriptor, implied_layout};
use crate::error::CodecError;
use crate::tables::{TableMatch, lookup};
use crate::types::{Codec, CodecInfo, MediaKind};
use crate::utils::{CodecString, clean};

/// Lookup order when the media kind is not given.
const DETECT_ORDER: [MediaKind; 3] = [MediaKind::Audio, MediaKind::Video, MediaKind::Subtitle];

/**
    Normalizer configuration.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Reject codecs missing from the tables. When false they are passed
    /// through as [`Codec::Unknown`].
    pub strict: bool,
    /// Layout reported for audio when neither the descriptor nor the codec
    /// implies one.
    pub fallback_channels: Option<ChannelLayout>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strict: true,
            fallback_channels: None,
        }
    }
}

/**
    Codec identifier normalizer.

    Holds only configuration, so a single instance can be shared freely.

    ```
    use codecid_core::CodecNormalizer;

    let codecs = CodecNormalizer::new();
    let info = codecs.normalize_codec("mp4a.40.2", "audio").unwrap();
    assert_eq!(info.normalized.to_string(), "AAC_LC");
    ```
*/
#[derive(Debug, Clone, Default)]
pub struct CodecNormalizer {
    config: NormalizerConfig,
}

impl CodecNormalizer {
    /**
        Create a strict normalizer with no fallback channel layout.
    */
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /**
        Normalize `codec` as a codec of the media kind named by `kind`
        (`audio`, `video` or `subtitle`).
    */
    pub fn normalize_codec(&self, codec: &str, kind: &str) -> Result<CodecInfo, CodecError> {
        let kind =
            MediaKind::from_name(kind).ok_or_else(|| CodecError::InvalidKind(kind.to_owned()))?;
        self.normalize(codec, kind)
    }

    /**
        Normalize `codec` as a codec of `kind`.

        Errors with [`CodecError::KindMismatch`] if the codec is known under a
        different media kind.
    */
    pub fn normalize(&self, codec: &str, kind: MediaKind) -> Result<CodecInfo, CodecError> {
        let cs = CodecString::parse(codec).ok_or(CodecError::Empty)?;
        let original = clean(codec).to_owned();

        if let Some(found) = lookup(kind, &cs) {
            let info = into_info(original, found);
            debug!(codec, %kind, normalized = %info.normalized, "normalized codec");
            return Ok(info);
        }

        if let Some(actual) = DETECT_ORDER
            .into_iter()
            .filter(|k| *k != kind)
            .find(|k| lookup(*k, &cs).is_some())
        {
            return Err(CodecError::KindMismatch {
                value: original,
                expected: kind,
                actual,
            });
        }

        self.unknown(original, kind)
    }

    /**
        Identify `codec` without a media kind, trying the audio, video and
        subtitle tables in that order.

        A lenient normalizer reports unmatched codecs as unknown audio.
    */
    pub fn identify(&self, codec: &str) -> Result<CodecInfo, CodecError> {
        let cs = CodecString::parse(codec).ok_or(CodecError::Empty)?;
        let original = clean(codec).to_owned();

        for kind in DETECT_ORDER {
            trace!(codec, %kind, "trying table");
            if let Some(found) = lookup(kind, &cs) {
                let info = into_info(original, found);
                debug!(codec, kind = %info.kind, normalized = %info.normalized, "identified codec");
                return Ok(info);
            }
        }

        self.unknown(original, MediaKind::Audio)
    }

    /**
        Identify every entry of a comma-separated codec list, such as the
        `CODECS` attribute of an HLS variant. Empty entries are skipped.
    */
    pub fn normalize_codec_list(&self, codecs: &str) -> Result<Vec<CodecInfo>, CodecError> {
        clean(codecs)
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| self.identify(entry))
            .collect()
    }

    /**
        Look up detailed information about an audio stream.

        `descriptor` is the channel signalling that accompanies the codec in
        a manifest: a Dolby bitmask (`F801`), a JOC descriptor (`16/JOC`),
        an explicit layout (`5.1`) or a channel count (`6`). It may be empty.
    */
    pub fn get_audio_codec_details(
        &self,
        codec: &str,
        descriptor: &str,
        sample_rate: u32,
        bit_depth: Option<u8>,
    ) -> Result<AudioCodecDetails, CodecError> {
        let info = self.normalize(codec, MediaKind::Audio)?;
        let Some(normalized) = info.normalized.as_audio() else {
            return Err(CodecError::UnknownCodec {
                kind: MediaKind::Audio,
                value: info.original,
            });
        };

        let parsed = ChannelDescriptor::parse(normalized, descriptor)?;
        let channels = parsed
            .layout()
            .or_else(|| implied_layout(normalized))
            .or(self.config.fallback_channels);

        if !supports_sample_rate(normalized, sample_rate) {
            return Err(CodecError::UnsupportedSampleRate {
                codec: normalized,
                rate: sample_rate,
            });
        }
        if let Some(bits) = bit_depth
            && !BIT_DEPTHS.contains(&bits)
        {
            return Err(CodecError::InvalidBitDepth(bits));
        }

        let complexity_index = match parsed {
            ChannelDescriptor::Joc(n) => Some(n),
            _ => None,
        };

        debug!(
            codec,
            descriptor,
            normalized = %normalized,
            channels = ?channels.map(|c| c.to_string()),
            atmos = complexity_index.is_some(),
            "resolved audio details"
        );

        Ok(AudioCodecDetails {
            normalized,
            channels,
            sample_rate,
            bit_depth,
            atmos: complexity_index.is_some(),
            complexity_index,
            lossless: normalized.is_lossless(),
        })
    }

    fn unknown(&self, original: String, kind: MediaKind) -> Result<CodecInfo, CodecError> {
        if self.config.strict {
            return Err(CodecError::UnknownCodec {
                kind,
                value: original,
            });
        }

        debug!(codec = %original, %kind, "passing through unknown codec");
        Ok(CodecInfo {
            normalized: Codec::Unknown {
                kind,
                name: original.to_ascii_uppercase(),
            },
            original,
            kind,
            profile: None,
        })
    }
}

fn into_info(original: String, found: TableMatch) -> CodecInfo {
    let (normalized, profile): (Codec, _) = match found {
        TableMatch::Audio(codec) => (codec.into(), None),
        TableMatch::Video(codec, profile) => (codec.into(), profile),
        TableMatch::Subtitle(codec) => (codec.into(), None),
    };
    CodecInfo {
        original,
        kind: normalized.kind(),
        normalized,
        profile,
    }
}
