mod audio;
mod list;
mod normalize;

pub mod demo;

pub use self::audio::AudioCommand;
pub use self::list::ListCommand;
pub use self::normalize::NormalizeCommand;

use anyhow::Result;
use serde::Serialize;

use codecid_core::ChannelLayout;

pub(crate) fn channels_text(channels: Option<ChannelLayout>) -> String {
    channels.map_or_else(|| "unknown".to_owned(), |c| c.to_string())
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
