use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use codecid_core::{ChannelLayout, CodecNormalizer, NormalizerConfig};

use crate::commands::{self, AudioCommand, ListCommand, NormalizeCommand};

/**
    Codec identification command-line tool.

    Runs the demonstration when no subcommand is given.
*/
#[derive(Parser)]
#[command(name = "codecid", version)]
pub struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct GlobalOptions {
    /// Pass unknown codecs through instead of failing.
    #[arg(
        long,
        global = true,
        env = "CODECID_LENIENT",
        value_parser = FalseyValueParser::new()
    )]
    lenient: bool,

    /// Channel layout to report when a stream does not signal one (e.g. "2.0").
    #[arg(long, global = true, env = "CODECID_FALLBACK_CHANNELS")]
    fallback_channels: Option<ChannelLayout>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
}

impl GlobalOptions {
    fn normalizer(&self) -> CodecNormalizer {
        let config = NormalizerConfig {
            strict: !self.lenient,
            fallback_channels: self.fallback_channels,
        };
        debug!(?config, "normalizer config");
        CodecNormalizer::with_config(config)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the three example lookups.
    Demo,
    /// Normalize a single codec identifier.
    Normalize(NormalizeCommand),
    /// Show detailed information about an audio codec.
    Audio(AudioCommand),
    /// Identify every codec in a comma-separated list.
    List(ListCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let codecs = self.options.normalizer();
        let json = self.options.json;
        match self.command.unwrap_or(Command::Demo) {
            Command::Demo => commands::demo::run(&codecs),
            Command::Normalize(cmd) => cmd.run(&codecs, json),
            Command::Audio(cmd) => cmd.run(&codecs, json),
            Command::List(cmd) => cmd.run(&codecs, json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["codecid"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.options.json);
    }

    #[test]
    fn audio_arguments() {
        let cli = Cli::try_parse_from([
            "codecid",
            "audio",
            "ec-3",
            "15/JOC",
            "--sample-rate",
            "48000",
            "--json",
        ])
        .unwrap();
        assert!(cli.options.json);
        let Some(Command::Audio(cmd)) = cli.command else {
            panic!("expected audio command");
        };
        assert_eq!(cmd.codec, "ec-3");
        assert_eq!(cmd.descriptor.as_deref(), Some("15/JOC"));
        assert_eq!(cmd.sample_rate, 48000);
        assert_eq!(cmd.bit_depth, None);
    }

    #[test]
    fn global_options_build_config() {
        let cli = Cli::try_parse_from([
            "codecid",
            "normalize",
            "xyz1",
            "--lenient",
            "--fallback-channels",
            "5.1",
        ])
        .unwrap();
        let codecs = cli.options.normalizer();
        assert!(!codecs.config().strict);
        assert_eq!(
            codecs.config().fallback_channels,
            Some(ChannelLayout::SURROUND_5_1)
        );
    }

    #[test]
    fn global_options_read_from_env() {
        // SAFETY: no other test asserts on the values these variables control
        unsafe {
            std::env::set_var("CODECID_LENIENT", "1");
            std::env::set_var("CODECID_FALLBACK_CHANNELS", "2.0");
        }
        let parsed = Cli::try_parse_from(["codecid", "normalize", "xyz1"]);
        let demo = Cli::try_parse_from(["codecid"]);
        unsafe {
            std::env::set_var("CODECID_LENIENT", "0");
        }
        let disabled = Cli::try_parse_from(["codecid"]);
        unsafe {
            std::env::remove_var("CODECID_LENIENT");
            std::env::remove_var("CODECID_FALLBACK_CHANNELS");
        }

        let codecs = parsed.unwrap().options.normalizer();
        assert!(!codecs.config().strict);
        assert_eq!(codecs.config().fallback_channels, Some(ChannelLayout::STEREO));
        assert!(demo.unwrap().options.lenient);
        assert!(!disabled.unwrap().options.lenient);
    }

    #[test]
    fn bad_kind_rejected_by_parser() {
        assert!(Cli::try_parse_from(["codecid", "normalize", "avc1", "--kind", "image"]).is_err());
    }
}
