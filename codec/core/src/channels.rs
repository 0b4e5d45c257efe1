/*!
    Audio channel layout type and the channel signalling schemes it can be
    derived from.
*/

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::utils::parse_dec_u8;

/**
    Audio channel layout in `full.lfe[.height]` notation.

    `5.1` is five full-range speakers plus one LFE, `7.1.4` adds four height
    speakers. Object-based formats report their object count as full-range
    channels, so Atmos with sixteen objects is `16.0`.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelLayout {
    /// Full-range (ear-level) speakers.
    pub full: u16,
    /// Low-frequency effects channels.
    pub lfe: u16,
    /// Height (overhead) speakers.
    pub height: u16,
}

/**
    Speaker bits of the Dolby 2011 channel configuration, MSB first, as
    `(full, lfe, height)` speaker counts.
*/
const DOLBY_SPEAKERS: [(u16, u16, u16); 16] = [
    (1, 0, 0), // L
    (1, 0, 0), // C
    (1, 0, 0), // R
    (1, 0, 0), // Ls
    (1, 0, 0), // Rs
    (2, 0, 0), // Lc/Rc
    (2, 0, 0), // Lrs/Rrs
    (1, 0, 0), // Cs
    (0, 0, 1), // Ts
    (2, 0, 0), // Lsd/Rsd
    (2, 0, 0), // Lw/Rw
    (0, 0, 2), // Vhl/Vhr
    (0, 0, 1), // Vhc
    (0, 0, 2), // Lts/Rts
    (0, 1, 0), // LFE2
    (0, 1, 0), // LFE
];

impl ChannelLayout {
    pub const MONO: Self = Self::new(1, 0, 0);
    pub const STEREO: Self = Self::new(2, 0, 0);
    pub const SURROUND_5_1: Self = Self::new(5, 1, 0);
    pub const SURROUND_7_1: Self = Self::new(7, 1, 0);

    /// Largest channel count accepted from a plain count descriptor.
    pub const MAX_CHANNELS: u16 = 64;

    pub const fn new(full: u16, lfe: u16, height: u16) -> Self {
        Self { full, lfe, height }
    }

    /**
        Returns the total number of channels, saturating at `u16::MAX`.
    */
    pub const fn channels(self) -> u16 {
        self.full.saturating_add(self.lfe).saturating_add(self.height)
    }

    /**
        Create a channel layout from a channel count.

        Counts with a conventional speaker arrangement map to it (6 is `5.1`,
        8 is `7.1`, 12 is `7.1.4`). Anything else is reported as `N.0`.
    */
    pub const fn from_count(count: u16) -> Self {
        match count {
            6 => Self::SURROUND_5_1,
            8 => Self::SURROUND_7_1,
            12 => Self::new(7, 1, 4),
            n => Self::new(n, 0, 0),
        }
    }

    /**
        Create a channel layout from an MPEG-4 `channelConfiguration` value
        (ISO/IEC 14496-3 and ISO/IEC 23001-8).
    */
    pub const fn from_mpeg4_config(config: u8) -> Option<Self> {
        Some(match config {
            1 => Self::MONO,
            2 => Self::STEREO,
            3 => Self::new(3, 0, 0),
            4 => Self::new(4, 0, 0),
            5 => Self::new(5, 0, 0),
            6 => Self::SURROUND_5_1,
            7 => Self::SURROUND_7_1,
            11 => Self::new(6, 1, 0),
            12 => Self::SURROUND_7_1,
            13 => Self::new(22, 2, 0),
            14 => Self::new(5, 1, 2),
            _ => return None,
        })
    }

    /**
        Create a channel layout from a Dolby 2011 audio channel configuration
        bitmask, as carried in DASH manifests for AC-3, E-AC-3 and AC-4
        (`F801` is `5.1`).

        Returns `None` if the mask has no full-range speakers.
    */
    pub const fn from_dolby_mask(mask: u16) -> Option<Self> {
        let mut layout = Self::new(0, 0, 0);
        let mut i = 0;
        while i < DOLBY_SPEAKERS.len() {
            if mask & (0x8000 >> i) != 0 {
                let (full, lfe, height) = DOLBY_SPEAKERS[i];
                layout.full += full;
                layout.lfe += lfe;
                layout.height += height;
            }
            i += 1;
        }
        if layout.full == 0 { None } else { Some(layout) }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.height == 0 {
            write!(f, "{}.{}", self.full, self.lfe)
        } else {
            write!(f, "{}.{}.{}", self.full, self.lfe, self.height)
        }
    }
}

impl FromStr for ChannelLayout {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError {
            kind: "channel layout",
            value: s.to_owned(),
        };

        let mut parts = s.trim().split('.').map(parse_dec_u8);
        let full = parts.next().flatten().ok_or_else(err)?;
        let lfe = parts.next().flatten().ok_or_else(err)?;
        let height = match parts.next() {
            Some(part) => part.ok_or_else(err)?,
            None => 0,
        };
        if parts.next().is_some() || full == 0 {
            return Err(err());
        }

        Ok(Self::new(full.into(), lfe.into(), height.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_zero_height() {
        assert_eq!(ChannelLayout::SURROUND_5_1.to_string(), "5.1");
        assert_eq!(ChannelLayout::new(16, 0, 0).to_string(), "16.0");
        assert_eq!(ChannelLayout::new(7, 1, 4).to_string(), "7.1.4");
    }

    #[test]
    fn channels_counts_every_speaker() {
        assert_eq!(ChannelLayout::STEREO.channels(), 2);
        assert_eq!(ChannelLayout::SURROUND_5_1.channels(), 6);
        assert_eq!(ChannelLayout::new(7, 1, 4).channels(), 12);
    }

    #[test]
    fn channels_saturates() {
        assert_eq!(ChannelLayout::new(u16::MAX, 1, 1).channels(), u16::MAX);
    }

    #[test]
    fn from_count_uses_conventional_layouts() {
        assert_eq!(ChannelLayout::from_count(1), ChannelLayout::MONO);
        assert_eq!(ChannelLayout::from_count(2), ChannelLayout::STEREO);
        assert_eq!(ChannelLayout::from_count(6), ChannelLayout::SURROUND_5_1);
        assert_eq!(ChannelLayout::from_count(8), ChannelLayout::SURROUND_7_1);
        assert_eq!(ChannelLayout::from_count(12).to_string(), "7.1.4");
        assert_eq!(ChannelLayout::from_count(3).to_string(), "3.0");
    }

    #[test]
    fn mpeg4_channel_configurations() {
        assert_eq!(
            ChannelLayout::from_mpeg4_config(2),
            Some(ChannelLayout::STEREO)
        );
        assert_eq!(
            ChannelLayout::from_mpeg4_config(6),
            Some(ChannelLayout::SURROUND_5_1)
        );
        assert_eq!(
            ChannelLayout::from_mpeg4_config(13).unwrap().to_string(),
            "22.2"
        );
        assert_eq!(
            ChannelLayout::from_mpeg4_config(14).unwrap().to_string(),
            "5.1.2"
        );
        assert_eq!(ChannelLayout::from_mpeg4_config(0), None);
        assert_eq!(ChannelLayout::from_mpeg4_config(8), None);
    }

    #[test]
    fn dolby_masks() {
        assert_eq!(
            ChannelLayout::from_dolby_mask(0xF801),
            Some(ChannelLayout::SURROUND_5_1)
        );
        assert_eq!(
            ChannelLayout::from_dolby_mask(0xA000),
            Some(ChannelLayout::STEREO)
        );
        // L C R Ls Rs Lrs/Rrs LFE
        assert_eq!(
            ChannelLayout::from_dolby_mask(0xFA01),
            Some(ChannelLayout::SURROUND_7_1)
        );
        // 5.1 plus Lts/Rts
        assert_eq!(
            ChannelLayout::from_dolby_mask(0xF805).unwrap().to_string(),
            "5.1.2"
        );
    }

    #[test]
    fn dolby_mask_without_full_range_speakers_rejected() {
        assert_eq!(ChannelLayout::from_dolby_mask(0), None);
        assert_eq!(ChannelLayout::from_dolby_mask(0x0001), None);
    }

    #[test]
    fn parse_layout_text() {
        assert_eq!(
            "5.1".parse::<ChannelLayout>().unwrap(),
            ChannelLayout::SURROUND_5_1
        );
        assert_eq!(
            "7.1.4".parse::<ChannelLayout>().unwrap(),
            ChannelLayout::new(7, 1, 4)
        );
        assert!("5".parse::<ChannelLayout>().is_err());
        assert!("5.1.2.1".parse::<ChannelLayout>().is_err());
        assert!("0.1".parse::<ChannelLayout>().is_err());
        assert!("a.b".parse::<ChannelLayout>().is_err());
    }
}
