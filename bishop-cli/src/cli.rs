//! Command-line arguments.

use art::{Palette, Rgb, input::Encoding};
use clap::Parser;
use std::time::Duration;

/// Default pause between frames in seconds.
const DEFAULT_SLEEP: f64 = 0.5;

/// Animate the "drunken bishop" randomart of the MD5 digest of stdin.
#[derive(Parser, Debug)]
#[command(name = "drunken-bishop", version, about)]
pub struct Cli {
    /// Input is base64 encoded.
    #[arg(short = 'e', long)]
    pub base64_encoded: bool,

    /// Use block characters (takes precedence over --drawing-chars).
    #[arg(short, long)]
    pub block_chars: bool,

    /// Use box drawing characters.
    #[arg(short, long)]
    pub drawing_chars: bool,

    /// Draw in a color derived from the digest.
    #[arg(short, long)]
    pub colors: bool,

    /// Seconds to sleep between drawing iterations.
    #[arg(short, long, default_value_t = DEFAULT_SLEEP, value_parser = parse_sleep)]
    pub sleep: f64,
}

impl Cli {
    /// How stdin is encoded.
    pub fn encoding(&self) -> Encoding {
        if self.base64_encoded {
            Encoding::Base64
        } else {
            Encoding::Raw
        }
    }

    /// Palette selected by the flags.
    pub fn palette(&self) -> Palette {
        if self.block_chars {
            Palette::Block
        } else if self.drawing_chars {
            Palette::Drawing
        } else {
            Palette::Ascii
        }
    }

    /// Color to draw in, given the digest's color.
    pub fn color(&self, digest_color: Rgb) -> Option<Rgb> {
        self.colors.then_some(digest_color)
    }

    /// Pause between frames.
    pub fn pause(&self) -> Duration {
        Duration::try_from_secs_f64(self.sleep).unwrap_or_default()
    }
}

/// Parse a number of seconds representable as a [`Duration`].
fn parse_sleep(s: &str) -> Result<f64, String> {
    let seconds = s
        .parse::<f64>()
        .map_err(|err| format!("`{s}` is not a number: {err}"))?;

    Duration::try_from_secs_f64(seconds)
        .map_err(|err| format!("`{s}` is not a valid number of seconds: {err}"))?;

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use art::{Palette, Rgb, input::Encoding};
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["drunken-bishop"]).unwrap();
        assert_eq!(cli.encoding(), Encoding::Raw);
        assert_eq!(cli.palette(), Palette::Ascii);
        assert_eq!(cli.color(Rgb::new(1, 2, 3)), None);
        assert_eq!(cli.pause(), Duration::from_millis(500));
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["drunken-bishop", "-e", "-d", "-c", "-s", "0"]).unwrap();
        assert_eq!(cli.encoding(), Encoding::Base64);
        assert_eq!(cli.palette(), Palette::Drawing);
        assert_eq!(cli.color(Rgb::new(1, 2, 3)), Some(Rgb::new(1, 2, 3)));
        assert_eq!(cli.pause(), Duration::ZERO);
    }

    #[test]
    fn block_wins_over_drawing() {
        let cli = Cli::try_parse_from(["drunken-bishop", "--drawing-chars", "--block-chars"])
            .unwrap();
        assert_eq!(cli.palette(), Palette::Block);
    }

    #[test]
    fn reject_bad_sleep() {
        for sleep in ["-1", "NaN", "inf", "1e300", "soon"] {
            assert!(
                Cli::try_parse_from(["drunken-bishop", "--sleep", sleep]).is_err(),
                "{sleep:?} should be rejected"
            );
        }
    }

    #[test]
    fn reject_unknown_flag() {
        assert!(Cli::try_parse_from(["drunken-bishop", "--rainbow"]).is_err());
    }
}
