use crate::types::AudioCodec;

/// MPEG-4 sampling frequency index table (ISO/IEC 14496-3, indices 0..=11).
pub const AAC_SAMPLE_RATES: [u32; 12] = [
    96_000, 88_200, 64_000, 48_000, 44_100, 32_000, 24_000, 22_050, 16_000, 12_000, 11_025, 8_000,
];

/// MPEG-1/2 Layer III sample rates.
pub const MP3_SAMPLE_RATES: [u32; 9] = [
    8_000, 11_025, 12_000, 16_000, 22_050, 24_000, 32_000, 44_100, 48_000,
];

pub const AC3_SAMPLE_RATES: [u32; 3] = [32_000, 44_100, 48_000];

/// E-AC-3 adds the reduced rates signalled by `fscod2`.
pub const EAC3_SAMPLE_RATES: [u32; 6] = [16_000, 22_050, 24_000, 32_000, 44_100, 48_000];

pub const AC4_SAMPLE_RATES: [u32; 4] = [44_100, 48_000, 96_000, 192_000];

/// Input rates an Opus encoder accepts. The stream itself always runs at 48 kHz.
pub const OPUS_SAMPLE_RATES: [u32; 5] = [8_000, 12_000, 16_000, 24_000, 48_000];

pub const DTS_SAMPLE_RATES: [u32; 6] = [32_000, 44_100, 48_000, 88_200, 96_000, 192_000];

pub const MPEGH_SAMPLE_RATES: [u32; 4] = [32_000, 44_100, 48_000, 96_000];

pub const TRUEHD_SAMPLE_RATES: [u32; 6] = [44_100, 48_000, 88_200, 96_000, 176_400, 192_000];

/// Bit depths accepted by the audio detail lookup.
pub const BIT_DEPTHS: [u8; 5] = [8, 16, 20, 24, 32];

/// Highest JOC complexity index, which is also the highest object count reported.
pub const MAX_JOC_COMPLEXITY: u8 = 16;

const LOSSLESS_MIN_RATE: u32 = 8_000;
const LOSSLESS_MAX_RATE: u32 = 384_000;

/**
    Returns true if `codec` can carry audio at `rate` Hz.
*/
pub fn supports_sample_rate(codec: AudioCodec, rate: u32) -> bool {
    use AudioCodec::*;
    match codec {
        AacMain | AacLc | AacSsr | AacLtp | HeAac | HeAacV2 | AacLd | AacEld | XheAac => {
            AAC_SAMPLE_RATES.contains(&rate)
        }
        Mp3 => MP3_SAMPLE_RATES.contains(&rate),
        Ac3 => AC3_SAMPLE_RATES.contains(&rate),
        Eac3 => EAC3_SAMPLE_RATES.contains(&rate),
        Ac4 => AC4_SAMPLE_RATES.contains(&rate),
        TrueHd => TRUEHD_SAMPLE_RATES.contains(&rate),
        Opus => OPUS_SAMPLE_RATES.contains(&rate),
        Dts | DtsHd | DtsExpress | DtsX => DTS_SAMPLE_RATES.contains(&rate),
        MpegH => MPEGH_SAMPLE_RATES.contains(&rate),
        Flac | Alac | Pcm | Vorbis => (LOSSLESS_MIN_RATE..=LOSSLESS_MAX_RATE).contains(&rate),
    }
}
