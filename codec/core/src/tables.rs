/*!
    Sample entry lookup tables, one per media kind.

    Each lookup returns `None` when the codec string does not belong to its
    table, which lets the normalizer tell a kind mismatch from an unknown codec.
*/

use crate::types::{AudioCodec, MediaKind, SubtitleCodec, VideoCodec};
use crate::utils::{CodecString, parse_dec_u8, parse_hex_u8};

/**
    A successful table match.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TableMatch {
    Audio(AudioCodec),
    Video(VideoCodec, Option<String>),
    Subtitle(SubtitleCodec),
}

pub(crate) fn lookup(kind: MediaKind, cs: &CodecString<'_>) -> Option<TableMatch> {
    match kind {
        MediaKind::Audio => audio(cs).map(TableMatch::Audio),
        MediaKind::Video => video(cs).map(|(codec, profile)| TableMatch::Video(codec, profile)),
        MediaKind::Subtitle => subtitle(cs).map(TableMatch::Subtitle),
    }
}

pub(crate) fn audio(cs: &CodecString<'_>) -> Option<AudioCodec> {
    use AudioCodec::*;
    Some(match cs.entry.as_str() {
        "mp4a" => return mp4a(cs),
        "ac-3" => Ac3,
        "ec-3" => Eac3,
        "ac-4" => Ac4,
        "mlpa" => TrueHd,
        "opus" => Opus,
        "flac" => Flac,
        "alac" => Alac,
        "mp3" => Mp3,
        "vorbis" => Vorbis,
        "dtsc" => Dts,
        "dtsh" | "dtsl" => DtsHd,
        "dtse" => DtsExpress,
        "dtsx" => DtsX,
        "ipcm" | "lpcm" | "sowt" | "twos" => Pcm,
        "mha1" | "mhm1" => MpegH,
        _ => return None,
    })
}

/**
    `mp4a.<oti>[.<aot>]`: the object type indication is hex, the MPEG-4 audio
    object type that follows `40` is decimal.
*/
fn mp4a(cs: &CodecString<'_>) -> Option<AudioCodec> {
    use AudioCodec::*;
    let Some(oti) = cs.param(0) else {
        return Some(AacLc);
    };
    Some(match parse_hex_u8(oti)? {
        0x40 => match cs.param(1) {
            None => AacLc,
            Some(aot) => match parse_dec_u8(aot)? {
                1 => AacMain,
                2 => AacLc,
                3 => AacSsr,
                4 => AacLtp,
                5 => HeAac,
                23 => AacLd,
                29 => HeAacV2,
                39 => AacEld,
                42 => XheAac,
                _ => return None,
            },
        },
        0x66..=0x68 => AacLc,
        0x69 | 0x6B => Mp3,
        0xA5 => Ac3,
        0xA6 => Eac3,
        0xA9 | 0xAC => Dts,
        0xAD => Opus,
        _ => return None,
    })
}

pub(crate) fn video(cs: &CodecString<'_>) -> Option<(VideoCodec, Option<String>)> {
    use VideoCodec::*;
    let codec = match cs.entry.as_str() {
        "avc1" | "avc3" => H264,
        "hvc1" | "hev1" => H265,
        "vvc1" | "vvi1" => H266,
        "dvh1" | "dvhe" | "dvav" | "dva1" => DolbyVision,
        "vp08" | "vp8" => Vp8,
        "vp09" | "vp9" => Vp9,
        "av01" => Av1,
        "mp4v" => Mpeg4,
        _ => return None,
    };
    let profile = match codec {
        H264 => avc_profile(cs),
        H265 => hevc_profile(cs),
        DolbyVision => cs
            .param(0)
            .and_then(parse_dec_u8)
            .map(|p| format!("Profile{p}")),
        Vp9 => match cs.param(0).and_then(parse_dec_u8) {
            Some(p @ 0..=3) => Some(format!("Profile{p}")),
            _ => None,
        },
        Av1 => match cs.param(0).and_then(parse_dec_u8) {
            Some(0) => Some("Main".to_owned()),
            Some(1) => Some("High".to_owned()),
            Some(2) => Some("Professional".to_owned()),
            _ => None,
        },
        H266 | Vp8 | Mpeg4 => None,
    };
    Some((codec, profile))
}

/**
    `avc1.PPCCLL` (hex profile_idc, constraint flags, level), or the legacy
    decimal `avc1.PP.LL` form.
*/
fn avc_profile(cs: &CodecString<'_>) -> Option<String> {
    let first = cs.param(0)?;
    let profile_idc = if first.len() == 6 {
        parse_hex_u8(first.get(..2)?)?
    } else {
        parse_dec_u8(first)?
    };
    let name = match profile_idc {
        66 => "Baseline",
        77 => "Main",
        88 => "Extended",
        100 => "High",
        110 => "High10",
        122 => "High422",
        244 => "High444",
        _ => return None,
    };
    Some(name.to_owned())
}

/**
    `hvc1.[A-C]N.…` where the optional letter is general_profile_space.
*/
fn hevc_profile(cs: &CodecString<'_>) -> Option<String> {
    let first = cs.param(0)?;
    let digits = first.trim_start_matches(|c: char| matches!(c, 'A'..='C' | 'a'..='c'));
    let name = match parse_dec_u8(digits)? {
        1 => "Main",
        2 => "Main10",
        3 => "MainStillPicture",
        4 => "RExt",
        _ => return None,
    };
    Some(name.to_owned())
}

pub(crate) fn subtitle(cs: &CodecString<'_>) -> Option<SubtitleCodec> {
    use SubtitleCodec::*;
    Some(match cs.entry.as_str() {
        "wvtt" | "vtt" | "webvtt" => Wvtt,
        "stpp" => Ttml,
        "tx3g" => Tx3g,
        "c608" => Cea608,
        "c708" => Cea708,
        "srt" => Srt,
        _ => return None,
    })
}
