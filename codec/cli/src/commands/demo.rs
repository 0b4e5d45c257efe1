use anyhow::{Context, Result};

use codecid_core::CodecNormalizer;

use super::channels_text;

/**
    Run the three example lookups against one normalizer and format one
    line for each.
*/
pub fn demo_lines(codecs: &CodecNormalizer) -> Result<[String; 3]> {
    let aac_info = codecs
        .normalize_codec("mp4a.40.2", "audio")
        .context("failed to normalize AAC codec")?;
    let ac3_details = codecs
        .get_audio_codec_details("ac-3", "F801", 48000, Some(16))
        .context("failed to resolve AC-3 details")?;
    let atmos_details = codecs
        .get_audio_codec_details("ec-3", "15/JOC", 48000, None)
        .context("failed to resolve E-AC-3 Atmos details")?;

    Ok([
        format!("Codec: {}", aac_info.normalized),
        format!(
            "Audio: {} {}",
            ac3_details.normalized,
            channels_text(ac3_details.channels)
        ),
        format!(
            "Format: {} Atmos {}",
            atmos_details.normalized,
            channels_text(atmos_details.channels)
        ),
    ])
}

pub fn run(codecs: &CodecNormalizer) -> Result<()> {
    for line in demo_lines(codecs)? {
        println!("{line}");
    }
    Ok(())
}
