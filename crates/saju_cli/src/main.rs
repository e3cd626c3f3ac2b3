use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use saju_base::{ALL_ELEMENTS, Pillar, Script, Stem};
use saju_config::SajuConfig;
use saju_engine::{
    BirthRecord, FourPillarsEngine, NoLunarBridge, ZiHourRule, date_ganzi, day_pillar,
    hour_pillars_for_day, year_pillar,
};
use saju_time::CivilDate;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) calendar CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a solar birth date and time
    Pillars {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        date: CivilDate,
        /// Hour of birth (0-23)
        #[arg(long)]
        hour: u32,
        /// Minute of birth (0-59)
        #[arg(long, default_value = "0")]
        minute: u32,
        /// Day assignment of 23:00-23:59 (overrides the config)
        #[arg(long, value_enum)]
        zi_hour: Option<ZiHourArg>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Day pillar and weekday of a date
    Day {
        /// Date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        date: CivilDate,
    },
    /// Year, month, and day pillars of a date
    Ganzi {
        /// Date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        date: CivilDate,
    },
    /// Weekday and day pillar for every date in a range
    Range {
        /// First date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        start: CivilDate,
        /// Last date, inclusive (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        end: CivilDate,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// The twelve hour pillars of a date
    Hours {
        /// Date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        date: CivilDate,
    },
    /// Year pillar and zodiac animal
    Year {
        /// Gregorian year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
    },
    /// Element of a heavenly stem
    Element {
        /// Stem as Hangul, Hanja, romanization, or index 0-9
        #[arg(long)]
        stem: Stem,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ZiHourArg {
    SameDay,
    NextDay,
}

impl From<ZiHourArg> for ZiHourRule {
    fn from(arg: ZiHourArg) -> Self {
        match arg {
            ZiHourArg::SameDay => ZiHourRule::SameDay,
            ZiHourArg::NextDay => ZiHourRule::NextDay,
        }
    }
}

fn init_tracing(verbose: u8, config_level: Option<&str>) -> Result<()> {
    let filter = match (verbose, config_level) {
        (0, Some(level)) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log_level '{level}'"))?
        }
        (0, None) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn pillar_line(label: &str, pillar: Pillar, script: Script) -> String {
    format!("{label}: {}  {}", pillar.label(script), pillar.element())
}

fn run(cli: Cli) -> Result<()> {
    let config = SajuConfig::resolve(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("loading config {}", path.display()),
        None => "loading default config".to_string(),
    })?;
    init_tracing(cli.verbose, config.log_level.as_deref())?;
    debug!(?config, "configuration resolved");

    let script = config.display.script;
    let mut options = config.engine_options();

    match cli.command {
        Commands::Pillars {
            date,
            hour,
            minute,
            zi_hour,
            json,
        } => {
            if let Some(rule) = zi_hour {
                options.zi_hour = rule.into();
            }
            let record = BirthRecord::solar(date.year(), date.month(), date.day(), hour, minute);
            let pillars =
                FourPillarsEngine::new(options).compute_four_pillars(&record, &NoLunarBridge)?;
            let zodiac = pillars.year.branch();
            let balance = pillars.element_counts();

            if json {
                return print_json(&json!({
                    "pillars": pillars,
                    "elements": balance,
                    "zodiac": zodiac.animal(),
                    "weekday": date.weekday(),
                }));
            }

            println!(
                "{} {} ({}, {})",
                date,
                pillars.time,
                date.weekday().name(),
                date.weekday().korean_name()
            );
            println!("{}", pillar_line("년주 (year) ", pillars.year, script));
            println!("{}", pillar_line("월주 (month)", pillars.month, script));
            println!("{}", pillar_line("일주 (day)  ", pillars.day, script));
            println!("{}", pillar_line("시주 (hour) ", pillars.hour, script));
            let counts: Vec<String> = ALL_ELEMENTS
                .iter()
                .map(|e| format!("{} {}", e.hangul(), balance.count(*e)))
                .collect();
            println!("오행: {}", counts.join(", "));
            println!("띠: {} ({})", zodiac.animal_hangul(), zodiac.animal());
        }

        Commands::Day { date } => {
            let weekday = date.weekday();
            println!(
                "{date} ({}, {}): {}",
                weekday.name(),
                weekday.korean_name(),
                day_pillar(date).label(script)
            );
        }

        Commands::Ganzi { date } => {
            let ganzi = date_ganzi(date)?;
            println!("{date}: {}", ganzi.label(script));
        }

        Commands::Range { start, end, json } => {
            let days = FourPillarsEngine::new(options).annotate_range(start, end, None)?;
            if json {
                return print_json(&serde_json::to_value(&days)?);
            }
            for day in &days {
                println!(
                    "{}  {}  {}",
                    day.date,
                    day.weekday.korean_name(),
                    day.day_pillar.label(script)
                );
            }
        }

        Commands::Hours { date } => {
            let day = day_pillar(date);
            println!("{date} 일주 {}", day.label(script));
            for slot in hour_pillars_for_day(day) {
                println!(
                    "{}  {}  {}",
                    slot.branch.hour_name(),
                    slot.branch.hour_window(),
                    slot.pillar.label(script)
                );
            }
        }

        Commands::Year { year } => {
            let pillar = year_pillar(year)?;
            let zodiac = pillar.branch();
            println!(
                "{year}: {} ({} {}, {})",
                pillar.label(script),
                pillar.element(),
                zodiac.animal_hangul(),
                zodiac.animal()
            );
        }

        Commands::Element { stem } => {
            let element = stem.element();
            println!(
                "{stem}: {element} {}, generates {}, overcomes {}",
                if stem.is_yang() { "yang" } else { "yin" },
                element.generates(),
                element.overcomes()
            );
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_year_dates_parse() {
        let cli = Cli::try_parse_from(["saju", "day", "--date", "-0044-03-15"]).unwrap();
        match cli.command {
            Commands::Day { date } => assert_eq!(date, CivilDate::new(-44, 3, 15).unwrap()),
            _ => panic!("expected day"),
        }

        let cli =
            Cli::try_parse_from(["saju", "pillars", "--date", "-0001-12-31", "--hour", "23"])
                .unwrap();
        match cli.command {
            Commands::Pillars { date, hour, .. } => {
                assert_eq!(date.year(), -1);
                assert_eq!(hour, 23);
            }
            _ => panic!("expected pillars"),
        }
    }

    #[test]
    fn negative_year_range_parses() {
        let cli = Cli::try_parse_from([
            "saju",
            "range",
            "--start",
            "-0100-01-01",
            "--end",
            "-0100-01-31",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Range { start, end, json } => {
                assert_eq!(start, CivilDate::new(-100, 1, 1).unwrap());
                assert_eq!(end, CivilDate::new(-100, 1, 31).unwrap());
                assert!(json);
            }
            _ => panic!("expected range"),
        }
    }

    #[test]
    fn negative_year_flag_parses() {
        let cli = Cli::try_parse_from(["saju", "year", "--year", "-2333"]).unwrap();
        assert!(matches!(cli.command, Commands::Year { year: -2333 }));
    }

    #[test]
    fn malformed_date_is_a_usage_error() {
        assert!(Cli::try_parse_from(["saju", "ganzi", "--date", "2024-02-30"]).is_err());
    }
}
