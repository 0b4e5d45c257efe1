use anyhow::{Context, Result};
use clap::Args;

use codecid_core::CodecNormalizer;

use super::{channels_text, print_json};

/**
    Show detailed information about an audio codec.
*/
#[derive(Args)]
pub struct AudioCommand {
    /// Codec identifier, e.g. "ec-3".
    pub codec: String,

    /// Channel descriptor: Dolby bitmask ("F801"), JOC ("16/JOC"),
    /// layout ("5.1") or channel count ("6").
    pub descriptor: Option<String>,

    /// Sample rate in Hz.
    #[arg(short = 'r', long, default_value_t = 48000)]
    pub sample_rate: u32,

    /// Bits per sample.
    #[arg(short, long)]
    pub bit_depth: Option<u8>,
}

impl AudioCommand {
    pub fn run(self, codecs: &CodecNormalizer, json: bool) -> Result<()> {
        let details = codecs
            .get_audio_codec_details(
                &self.codec,
                self.descriptor.as_deref().unwrap_or_default(),
                self.sample_rate,
                self.bit_depth,
            )
            .with_context(|| format!("failed to resolve audio details for '{}'", self.codec))?;

        if json {
            return print_json(&details);
        }

        println!("Codec:        {}", details.normalized);
        println!("Channels:     {}", channels_text(details.channels));
        if let Some(index) = details.complexity_index {
            println!("Atmos:        yes (complexity index {index})");
        }
        println!("Sample Rate:  {} Hz", details.sample_rate);
        if let Some(bits) = details.bit_depth {
            println!("Bit Depth:    {bits}");
        }
        println!(
            "Lossless:     {}",
            if details.lossless { "yes" } else { "no" }
        );

        Ok(())
    }
}
