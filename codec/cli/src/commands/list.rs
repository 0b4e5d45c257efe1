use anyhow::{Context, Result};
use clap::Args;

use codecid_core::CodecNormalizer;

use super::print_json;

/**
    Identify every codec in a comma-separated list.
*/
#[derive(Args)]
pub struct ListCommand {
    /// Comma-separated codec list, e.g. the CODECS attribute of an HLS variant.
    pub codecs: String,
}

impl ListCommand {
    pub fn run(self, codecs: &CodecNormalizer, json: bool) -> Result<()> {
        let infos = codecs
            .normalize_codec_list(&self.codecs)
            .context("failed to normalize codec list")?;

        if json {
            return print_json(&infos);
        }

        for info in &infos {
            match &info.profile {
                Some(profile) => println!(
                    "{:<20} {:<9} {} ({profile})",
                    info.original,
                    info.kind.to_name(),
                    info.normalized
                ),
                None => println!(
                    "{:<20} {:<9} {}",
                    info.original,
                    info.kind.to_name(),
                    info.normalized
                ),
            }
        }

        Ok(())
    }
}
