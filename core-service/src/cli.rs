use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use airwise_core::logic::location::{parse_location, Coordinates};
use airwise_core::{LocalHealthData, UserProfile};

#[derive(Parser, Debug)]
#[command(name = "airwise", version, about = "Air quality health risk predictor")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "ONNX health model (defaults to AIRWISE_MODEL_PATH)"
    )]
    pub model: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch live conditions for a location and assess them
    Assess {
        #[arg(
            long,
            value_parser = parse_location,
            help = "Location as latitude,longitude"
        )]
        location: Coordinates,
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        local_health: LocalHealthArgs,
        #[arg(long, help = "OpenWeather API key (defaults to OPENWEATHER_API_KEY)")]
        api_key: Option<String>,
    },
    /// Assess a reading stored as JSON, without contacting the feeds
    Evaluate {
        #[arg(long, help = "Path to an EnvironmentalReading JSON file")]
        reading: PathBuf,
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ProfileArgs {
    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..=120),
        help = "Your age"
    )]
    pub age: u32,
    #[arg(long, help = "You have asthma")]
    pub asthma: bool,
    #[arg(long, help = "You have heart disease")]
    pub heart_disease: bool,
}

impl From<ProfileArgs> for UserProfile {
    fn from(args: ProfileArgs) -> Self {
        UserProfile::new(args.age)
            .with_asthma(args.asthma)
            .with_heart_disease(args.heart_disease)
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct LocalHealthArgs {
    #[arg(long, default_value_t = 5, help = "Respiratory cases in your area")]
    pub respiratory_cases: u32,
    #[arg(long, default_value_t = 3, help = "Cardiovascular cases in your area")]
    pub cardiovascular_cases: u32,
}

impl From<LocalHealthArgs> for LocalHealthData {
    fn from(args: LocalHealthArgs) -> Self {
        LocalHealthData::new(args.respiratory_cases, args.cardiovascular_cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_defaults() {
        let cli = Cli::try_parse_from(["airwise", "assess", "--location", "28.61,77.21"]).unwrap();
        match cli.command {
            Commands::Assess {
                location,
                profile,
                local_health,
                api_key,
            } => {
                assert_eq!(location.latitude, 28.61);
                assert_eq!(UserProfile::from(profile), UserProfile::new(30));
                assert_eq!(LocalHealthData::from(local_health), LocalHealthData::new(5, 3));
                assert!(api_key.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_profile_flags() {
        let cli = Cli::try_parse_from([
            "airwise", "--json", "evaluate", "--reading", "r.json", "--age", "65", "--asthma",
            "--heart-disease",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Evaluate { reading, profile } => {
                assert_eq!(reading, PathBuf::from("r.json"));
                let profile = UserProfile::from(profile);
                assert_eq!(profile, UserProfile::new(65).with_asthma(true).with_heart_disease(true));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["airwise", "assess", "--location", "somewhere"]).is_err());
        assert!(Cli::try_parse_from(["airwise", "assess", "--location", "1,2", "--age", "0"]).is_err());
        assert!(Cli::try_parse_from(["airwise", "assess", "--location", "1,2", "--age", "121"]).is_err());
    }
}
