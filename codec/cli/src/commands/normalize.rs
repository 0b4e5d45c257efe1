use anyhow::{Context, Result};
use clap::Args;

use codecid_core::{CodecNormalizer, MediaKind};

use super::print_json;

/**
    Normalize a single codec identifier.
*/
#[derive(Args)]
pub struct NormalizeCommand {
    /// Codec identifier, e.g. "mp4a.40.2" or "avc1.64001F".
    pub codec: String,

    /// Media kind: audio, video or subtitle. Detected when omitted.
    #[arg(short, long)]
    pub kind: Option<MediaKind>,
}

impl NormalizeCommand {
    pub fn run(self, codecs: &CodecNormalizer, json: bool) -> Result<()> {
        let info = match self.kind {
            Some(kind) => codecs.normalize(&self.codec, kind),
            None => codecs.identify(&self.codec),
        }
        .with_context(|| format!("failed to normalize codec '{}'", self.codec))?;

        if json {
            return print_json(&info);
        }

        println!("Codec:    {}", info.normalized);
        println!("Kind:     {}", info.kind);
        if let Some(profile) = &info.profile {
            println!("Profile:  {profile}");
        }
        if !info.normalized.is_known() {
            println!();
            println!("Not in the codec tables, passed through unchanged.");
        }

        Ok(())
    }
}
