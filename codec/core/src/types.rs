use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/**
    The kind of media a codec carries.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Audio,
    Video,
    Subtitle,
}

impl MediaKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("audio") {
            Some(Self::Audio)
        } else if name.eq_ignore_ascii_case("video") {
            Some(Self::Video)
        } else if name.eq_ignore_ascii_case("subtitle")
            || name.eq_ignore_ascii_case("subtitles")
            || name.eq_ignore_ascii_case("text")
        {
            Some(Self::Subtitle)
        } else {
            None
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Subtitle => "subtitle",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for MediaKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "media kind",
            value: s.to_owned(),
        })
    }
}

/**
    Normalized audio codecs.

    AAC is split by MPEG-4 audio object type since players and packagers
    treat the profiles differently.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCodec {
    AacMain,
    AacLc,
    AacSsr,
    AacLtp,
    HeAac,
    HeAacV2,
    AacLd,
    AacEld,
    XheAac,
    Mp3,
    Ac3,
    Eac3,
    Ac4,
    TrueHd,
    Opus,
    Flac,
    Alac,
    Vorbis,
    Dts,
    DtsHd,
    DtsExpress,
    DtsX,
    Pcm,
    MpegH,
}

impl AudioCodec {
    pub const ALL: [Self; 24] = [
        Self::AacMain,
        Self::AacLc,
        Self::AacSsr,
        Self::AacLtp,
        Self::HeAac,
        Self::HeAacV2,
        Self::AacLd,
        Self::AacEld,
        Self::XheAac,
        Self::Mp3,
        Self::Ac3,
        Self::Eac3,
        Self::Ac4,
        Self::TrueHd,
        Self::Opus,
        Self::Flac,
        Self::Alac,
        Self::Vorbis,
        Self::Dts,
        Self::DtsHd,
        Self::DtsExpress,
        Self::DtsX,
        Self::Pcm,
        Self::MpegH,
    ];

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::AacMain => "AAC_MAIN",
            Self::AacLc => "AAC_LC",
            Self::AacSsr => "AAC_SSR",
            Self::AacLtp => "AAC_LTP",
            Self::HeAac => "HE_AAC",
            Self::HeAacV2 => "HE_AACV2",
            Self::AacLd => "AAC_LD",
            Self::AacEld => "AAC_ELD",
            Self::XheAac => "XHE_AAC",
            Self::Mp3 => "MP3",
            Self::Ac3 => "AC3",
            Self::Eac3 => "EAC3",
            Self::Ac4 => "AC4",
            Self::TrueHd => "TRUEHD",
            Self::Opus => "OPUS",
            Self::Flac => "FLAC",
            Self::Alac => "ALAC",
            Self::Vorbis => "VORBIS",
            Self::Dts => "DTS",
            Self::DtsHd => "DTS_HD",
            Self::DtsExpress => "DTS_EXPRESS",
            Self::DtsX => "DTS_X",
            Self::Pcm => "PCM",
            Self::MpegH => "MPEGH",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|codec| codec.to_name().eq_ignore_ascii_case(name))
    }

    /**
        Returns true for every member of the MPEG-4 AAC family.
    */
    pub const fn is_aac(self) -> bool {
        matches!(
            self,
            Self::AacMain
                | Self::AacLc
                | Self::AacSsr
                | Self::AacLtp
                | Self::HeAac
                | Self::HeAacV2
                | Self::AacLd
                | Self::AacEld
                | Self::XheAac
        )
    }

    /**
        Returns true for codecs whose channel configuration may be signalled
        with a Dolby speaker bitmask.
    */
    pub const fn is_dolby(self) -> bool {
        matches!(self, Self::Ac3 | Self::Eac3 | Self::Ac4 | Self::TrueHd)
    }

    /**
        Returns true for codecs that can carry Atmos objects via joint object coding.
    */
    pub const fn supports_joc(self) -> bool {
        matches!(self, Self::Eac3 | Self::Ac4)
    }

    pub const fn is_lossless(self) -> bool {
        matches!(self, Self::Flac | Self::Alac | Self::Pcm | Self::TrueHd)
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for AudioCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "audio codec",
            value: s.to_owned(),
        })
    }
}

/**
    Normalized video codecs.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoCodec {
    H264,
    H265,
    H266,
    DolbyVision,
    Vp8,
    Vp9,
    Av1,
    Mpeg4,
}

impl VideoCodec {
    pub const ALL: [Self; 8] = [
        Self::H264,
        Self::H265,
        Self::H266,
        Self::DolbyVision,
        Self::Vp8,
        Self::Vp9,
        Self::Av1,
        Self::Mpeg4,
    ];

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::H264 => "H264",
            Self::H265 => "H265",
            Self::H266 => "H266",
            Self::DolbyVision => "DOLBY_VISION",
            Self::Vp8 => "VP8",
            Self::Vp9 => "VP9",
            Self::Av1 => "AV1",
            Self::Mpeg4 => "MPEG4",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|codec| codec.to_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for VideoCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "video codec",
            value: s.to_owned(),
        })
    }
}

/**
    Normalized subtitle and caption formats.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleCodec {
    Wvtt,
    Ttml,
    Tx3g,
    Cea608,
    Cea708,
    Srt,
}

impl SubtitleCodec {
    pub const ALL: [Self; 6] = [
        Self::Wvtt,
        Self::Ttml,
        Self::Tx3g,
        Self::Cea608,
        Self::Cea708,
        Self::Srt,
    ];

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Wvtt => "WVTT",
            Self::Ttml => "TTML",
            Self::Tx3g => "TX3G",
            Self::Cea608 => "CEA608",
            Self::Cea708 => "CEA708",
            Self::Srt => "SRT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|codec| codec.to_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SubtitleCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for SubtitleCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "subtitle codec",
            value: s.to_owned(),
        })
    }
}

/**
    A normalized codec of any media kind.

    `Unknown` is only produced by a lenient normalizer, and carries the
    upper-cased identifier it was given.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Codec {
    Audio(AudioCodec),
    Video(VideoCodec),
    Subtitle(SubtitleCodec),
    Unknown { kind: MediaKind, name: String },
}

impl Codec {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Audio(_) => MediaKind::Audio,
            Self::Video(_) => MediaKind::Video,
            Self::Subtitle(_) => MediaKind::Subtitle,
            Self::Unknown { kind, .. } => *kind,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Audio(c) => c.to_name(),
            Self::Video(c) => c.to_name(),
            Self::Subtitle(c) => c.to_name(),
            Self::Unknown { name, .. } => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }

    pub fn as_audio(&self) -> Option<AudioCodec> {
        match self {
            Self::Audio(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<AudioCodec> for Codec {
    fn from(codec: AudioCodec) -> Self {
        Self::Audio(codec)
    }
}

impl From<VideoCodec> for Codec {
    fn from(codec: VideoCodec) -> Self {
        Self::Video(codec)
    }
}

impl From<SubtitleCodec> for Codec {
    fn from(codec: SubtitleCodec) -> Self {
        Self::Subtitle(codec)
    }
}

/**
    The result of identifying a single codec string.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodecInfo {
    /// The identifier as given, with whitespace and quotes removed.
    pub original: String,
    /// The media kind the codec belongs to.
    pub kind: MediaKind,
    /// The normalized codec.
    pub normalized: Codec,
    /// Profile name parsed from the codec parameters (video only).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub profile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_aliases() {
        assert_eq!("AUDIO".parse::<MediaKind>().unwrap(), MediaKind::Audio);
        assert_eq!(" video ".parse::<MediaKind>().unwrap(), MediaKind::Video);
        assert_eq!("text".parse::<MediaKind>().unwrap(), MediaKind::Subtitle);
        assert_eq!(
            "subtitles".parse::<MediaKind>().unwrap(),
            MediaKind::Subtitle
        );
    }

    #[test]
    fn media_kind_unknown() {
        let err = "image".parse::<MediaKind>().unwrap_err();
        assert_eq!(err.kind, "media kind");
        assert_eq!(err.to_string(), "unknown media kind 'image'");
    }

    #[test]
    fn audio_codec_names_roundtrip() {
        for codec in AudioCodec::ALL {
            assert_eq!(codec.to_name().parse::<AudioCodec>().unwrap(), codec);
        }
        assert_eq!("aac_lc".parse::<AudioCodec>().unwrap(), AudioCodec::AacLc);
    }

    #[test]
    fn video_and_subtitle_names_roundtrip() {
        for codec in VideoCodec::ALL {
            assert_eq!(VideoCodec::from_name(codec.to_name()), Some(codec));
        }
        for codec in SubtitleCodec::ALL {
            assert_eq!(SubtitleCodec::from_name(codec.to_name()), Some(codec));
        }
    }

    #[test]
    fn audio_codec_families() {
        assert!(AudioCodec::HeAacV2.is_aac());
        assert!(!AudioCodec::Ac3.is_aac());
        assert!(AudioCodec::TrueHd.is_dolby());
        assert!(AudioCodec::TrueHd.is_lossless());
        assert!(AudioCodec::Eac3.supports_joc());
        assert!(!AudioCodec::Ac3.supports_joc());
    }

    #[test]
    fn codec_display_and_kind() {
        let codec = Codec::from(AudioCodec::AacLc);
        assert_eq!(codec.to_string(), "AAC_LC");
        assert_eq!(codec.kind(), MediaKind::Audio);
        assert_eq!(codec.as_audio(), Some(AudioCodec::AacLc));

        let unknown = Codec::Unknown {
            kind: MediaKind::Video,
            name: "XYZ1".to_owned(),
        };
        assert_eq!(unknown.to_string(), "XYZ1");
        assert_eq!(unknown.kind(), MediaKind::Video);
        assert!(!unknown.is_known());
        assert_eq!(unknown.as_audio(), None);
    }
}
