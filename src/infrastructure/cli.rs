use std::str::FromStr;

use clap::Parser;

use crate::{
    domain::variant::TimerVariant, infrastructure::tui::real::MAX_FRAME_RATE, utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0,
        value_parser = parse_frame_rate
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_name = "VARIANT",
        help = "Control policy: classic or padded (overrides config)",
        value_parser = parse_variant
    )]
    pub variant: Option<TimerVariant>,

    #[arg(long, value_name = "HOURS", help = "Prefill the hours field")]
    pub hours: Option<String>,

    #[arg(long, value_name = "MINUTES", help = "Prefill the minutes field")]
    pub minutes: Option<String>,

    #[arg(long, value_name = "SECONDS", help = "Prefill the seconds field")]
    pub seconds: Option<String>,
}

fn parse_frame_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if rate.is_finite() && rate > 0.0 && rate <= MAX_FRAME_RATE {
        Ok(rate)
    } else {
        Err(format!("frame rate must be in (0, {MAX_FRAME_RATE}]"))
    }
}

fn parse_variant(s: &str) -> Result<TimerVariant, String> {
    TimerVariant::from_str(s).map_err(|_| format!("unknown variant `{s}`, expected classic or padded"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["countdown"]);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.variant, None);
        assert_eq!(cli.hours, None);
    }

    #[test]
    fn test_prefill_and_variant() {
        let cli = Cli::parse_from([
            "countdown",
            "--variant",
            "Classic",
            "--minutes",
            "5",
            "--seconds",
            "30",
        ]);
        assert_eq!(cli.variant, Some(TimerVariant::Classic));
        assert_eq!(cli.minutes.as_deref(), Some("5"));
        assert_eq!(cli.seconds.as_deref(), Some("30"));
    }

    #[test]
    fn test_frame_rate_must_be_finite_and_positive() {
        assert_eq!(
            Cli::parse_from(["countdown", "--frame-rate", "60"]).frame_rate,
            60.0
        );
        for bad in ["inf", "NaN", "0", "-5", "1000", "fast"] {
            assert!(
                Cli::try_parse_from(["countdown", "--frame-rate", bad]).is_err(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["countdown", "--variant", "fancy"]).is_err());
    }
}
