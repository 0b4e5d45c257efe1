/*!
    Audio codec details and channel descriptor parsing.
*/

use crate::channels::ChannelLayout;
use crate::constants::MAX_JOC_COMPLEXITY;
use crate::error::CodecError;
use crate::types::AudioCodec;
use crate::utils::parse_dec_u8;

/**
    Detailed information about an audio stream.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AudioCodecDetails {
    /// The normalized codec.
    pub normalized: AudioCodec,
    /// Channel layout, if the descriptor or codec implies one.
    pub channels: Option<ChannelLayout>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (if given).
    pub bit_depth: Option<u8>,
    /// True when the stream carries Dolby Atmos objects.
    pub atmos: bool,
    /// JOC complexity index (Atmos only).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub complexity_index: Option<u8>,
    /// True for lossless codecs.
    pub lossless: bool,
}

/**
    A parsed channel descriptor.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelDescriptor {
    /// Dolby Atmos joint object coding (`16/JOC`) with its complexity index.
    Joc(u8),
    /// A concrete channel layout.
    Layout(ChannelLayout),
    /// No descriptor was given.
    Empty,
}

impl ChannelDescriptor {
    /**
        Parse a channel descriptor for `codec`.

        Accepted forms are `N/JOC`, a four digit Dolby speaker bitmask
        (Dolby codecs only), an explicit `X.Y[.Z]` layout, and a decimal
        channel count. On AAC a decimal value that is a valid MPEG-4
        `channelConfiguration` is read as one.
    */
    pub fn parse(codec: AudioCodec, descriptor: &str) -> Result<Self, CodecError> {
        let s = descriptor.trim();
        let invalid = || CodecError::InvalidDescriptor {
            codec,
            descriptor: descriptor.to_owned(),
        };

        if s.is_empty() {
            return Ok(Self::Empty);
        }

        if let Some((count, suffix)) = s.split_once('/') {
            if !suffix.trim().eq_ignore_ascii_case("JOC") || !codec.supports_joc() {
                return Err(invalid());
            }
            return match parse_dec_u8(count.trim()) {
                Some(n @ 1..=MAX_JOC_COMPLEXITY) => Ok(Self::Joc(n)),
                _ => Err(invalid()),
            };
        }

        if s.contains('.') {
            return s
                .parse::<ChannelLayout>()
                .map(Self::Layout)
                .map_err(|_| invalid());
        }

        if codec.is_dolby() && s.len() == 4 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return u16::from_str_radix(s, 16)
                .ok()
                .and_then(ChannelLayout::from_dolby_mask)
                .map(Self::Layout)
                .ok_or_else(invalid);
        }

        let count = parse_dec_u8(s).ok_or_else(invalid)?;
        if codec.is_aac()
            && let Some(layout) = ChannelLayout::from_mpeg4_config(count)
        {
            return Ok(Self::Layout(layout));
        }
        match u16::from(count) {
            n @ 1..=ChannelLayout::MAX_CHANNELS => Ok(Self::Layout(ChannelLayout::from_count(n))),
            _ => Err(invalid()),
        }
    }

    /**
        The channel layout this descriptor reports.

        Atmos reports its object count, one more than the complexity index,
        capped at the largest complexity index.
    */
    pub fn layout(self) -> Option<ChannelLayout> {
        match self {
            Self::Joc(n) => {
                let objects = n.saturating_add(1).min(MAX_JOC_COMPLEXITY);
                Some(ChannelLayout::new(objects.into(), 0, 0))
            }
            Self::Layout(layout) => Some(layout),
            Self::Empty => None,
        }
    }
}

/**
    The channel layout a codec implies on its own, if any.
*/
pub const fn implied_layout(codec: AudioCodec) -> Option<ChannelLayout> {
    match codec {
        // parametric stereo is only defined for a mono core
        AudioCodec::HeAacV2 => Some(ChannelLayout::STEREO),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(codec: AudioCodec, descriptor: &str) -> String {
        ChannelDescriptor::parse(codec, descriptor)
            .unwrap()
            .layout()
            .unwrap()
            .to_string()
    }

    #[test]
    fn dolby_mask_descriptor() {
        assert_eq!(layout(AudioCodec::Ac3, "F801"), "5.1");
        assert_eq!(layout(AudioCodec::Eac3, "a000"), "2.0");
    }

    #[test]
    fn joc_descriptor() {
        let d = ChannelDescriptor::parse(AudioCodec::Eac3, "15/JOC").unwrap();
        assert_eq!(d, ChannelDescriptor::Joc(15));
        assert_eq!(d.layout().unwrap().to_string(), "16.0");
        assert_eq!(layout(AudioCodec::Eac3, "16/joc"), "16.0");
        assert_eq!(layout(AudioCodec::Ac4, "11/JOC"), "12.0");
    }

    #[test]
    fn joc_rejected_outside_joc_codecs() {
        let err = ChannelDescriptor::parse(AudioCodec::Ac3, "16/JOC").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidDescriptor {
                codec: AudioCodec::Ac3,
                descriptor: "16/JOC".to_owned(),
            }
        );
    }

    #[test]
    fn joc_complexity_bounds() {
        assert!(ChannelDescriptor::parse(AudioCodec::Eac3, "0/JOC").is_err());
        assert!(ChannelDescriptor::parse(AudioCodec::Eac3, "17/JOC").is_err());
        assert!(ChannelDescriptor::parse(AudioCodec::Eac3, "16/IMM").is_err());
    }

    #[test]
    fn explicit_layout_descriptor() {
        assert_eq!(layout(AudioCodec::Opus, "5.1"), "5.1");
        assert_eq!(layout(AudioCodec::Eac3, "5.1.2"), "5.1.2");
        assert!(ChannelDescriptor::parse(AudioCodec::Opus, "5.x").is_err());
    }

    #[test]
    fn count_descriptor() {
        assert_eq!(layout(AudioCodec::Eac3, "6"), "5.1");
        assert_eq!(layout(AudioCodec::Opus, "2"), "2.0");
        assert_eq!(layout(AudioCodec::Flac, "3"), "3.0");
        assert!(ChannelDescriptor::parse(AudioCodec::Flac, "0").is_err());
        assert!(ChannelDescriptor::parse(AudioCodec::Flac, "65").is_err());
    }

    #[test]
    fn aac_reads_channel_configuration() {
        assert_eq!(layout(AudioCodec::AacLc, "7"), "7.1");
        assert_eq!(layout(AudioCodec::AacLc, "13"), "22.2");
        // not a channelConfiguration, so a plain count
        assert_eq!(layout(AudioCodec::AacLc, "8"), "7.1");
        assert_eq!(layout(AudioCodec::Opus, "7"), "7.0");
    }

    #[test]
    fn hex_mask_only_for_dolby() {
        assert!(ChannelDescriptor::parse(AudioCodec::AacLc, "F801").is_err());
        assert!(ChannelDescriptor::parse(AudioCodec::Ac3, "0001").is_err());
    }

    #[test]
    fn empty_descriptor() {
        let d = ChannelDescriptor::parse(AudioCodec::Ac3, "  ").unwrap();
        assert_eq!(d, ChannelDescriptor::Empty);
        assert_eq!(d.layout(), None);
        assert_eq!(
            implied_layout(AudioCodec::HeAacV2),
            Some(ChannelLayout::STEREO)
        );
        assert_eq!(implied_layout(AudioCodec::Ac3), None);
    }
}
