use clap::{CommandFactory, Parser, Subcommand};
use commands::number::NumberCommand;
use commands::time::TimeCommand;
use libhumanize::{CalendarDelta, TimeMode, UnitSystem};

mod commands;
mod config;
mod context;
mod format;

/// Humanize - human-readable numbers, sizes and dates
///
/// Turns raw values into short phrases: byte sizes, ordinals, large-number
/// words, fractions and natural day/time descriptions.
#[derive(Parser, Debug)]
#[command(name = "humanize")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format byte counts ("3.00 MB")
    Size {
        /// Byte counts
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<String>,
        /// Unit system: decimal, binary, memory
        #[arg(short, long)]
        units: Option<UnitSystem>,
        /// Show decimal and binary side by side
        #[arg(long)]
        table: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Append an ordinal suffix ("3rd")
    Ordinal {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Group digits with commas ("1,000,000")
    Comma {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Scale a large number into words ("1.2 billion")
    Word {
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Spell out single digits ("seven")
    Apnumber {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Render as a (mixed) fraction ("2 1/2")
    Fraction {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Render in scientific notation ("1.5 × 10³")
    Scientific {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Bound a value for display ("<10.0", ">120.0")
    Clamp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Values below this render as "<floor"
        #[arg(long, allow_negative_numbers = true)]
        floor: Option<f64>,
        /// Values above this render as ">ceil"
        #[arg(long, allow_negative_numbers = true)]
        ceil: Option<f64>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Today, Yesterday, Tomorrow or the day ("09 Jul")
    Day {
        /// RFC 3339 timestamp or local YYYY-MM-DD[ HH:MM[:SS]]
        date: String,
        /// strftime pattern for other days
        #[arg(short, long)]
        pattern: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Like day, adding the year for distant dates ("09 Jul, 2020")
    Date {
        /// RFC 3339 timestamp or local YYYY-MM-DD[ HH:MM[:SS]]
        date: String,
        /// strftime pattern for dates more than a few months away
        #[arg(short, long)]
        pattern: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Seconds, minutes or hours ago or from now
    Time {
        /// RFC 3339 timestamp or local YYYY-MM-DD[ HH:MM[:SS]]
        date: String,
        /// How to measure the difference: elapsed, components
        #[arg(short, long)]
        mode: Option<TimeMode>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Coarse phrase for an ISO 8601 timestamp ("2 days ago")
    Relative {
        timestamp: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Print the current date and time
    Now {
        /// strftime pattern
        #[arg(short, long)]
        pattern: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Move a date by calendar components
    Shift {
        /// RFC 3339 timestamp or local YYYY-MM-DD[ HH:MM[:SS]]
        date: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        years: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        months: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        hours: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        minutes: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        seconds: i64,
        /// Subtract instead of add
        #[arg(long)]
        back: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Get a configuration value (or display all if no key provided)
    Get {
        /// Configuration key to get (e.g., defaults.time.day_format)
        key: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set (e.g., style.format)
        key: String,
        /// Value to set
        value: String,
    },
}

fn init_logging(verbosity: context::VerbosityLevel) {
    // RUST_LOG still takes precedence over -v
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    init_logging(verbosity);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(format::ColorChoice::from(cli.color.as_str()));

    match cli.command {
        Commands::Size {
            bytes,
            units,
            table,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::size::handle_size(&ctx, &bytes, units, table, fmt);
        }
        Commands::Ordinal { value, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(&ctx, NumberCommand::Ordinal(value), fmt);
        }
        Commands::Comma { value, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(&ctx, NumberCommand::Comma(value), fmt);
        }
        Commands::Word { value, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(&ctx, NumberCommand::Word(value), fmt);
        }
        Commands::Apnumber { value, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(&ctx, NumberCommand::Apnumber(value), fmt);
        }
        Commands::Fraction { value, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(&ctx, NumberCommand::Fraction(value), fmt);
        }
        Commands::Scientific { value, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(&ctx, NumberCommand::Scientific(value), fmt);
        }
        Commands::Clamp {
            value,
            floor,
            ceil,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::number::handle_number(
                &ctx,
                NumberCommand::Clamp { value, floor, ceil },
                fmt,
            );
        }
        Commands::Day {
            date,
            pattern,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_time(
                &ctx,
                TimeCommand::Day {
                    date,
                    format: pattern,
                },
                fmt,
            );
        }
        Commands::Date {
            date,
            pattern,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_time(
                &ctx,
                TimeCommand::Date {
                    date,
                    format: pattern,
                },
                fmt,
            );
        }
        Commands::Time { date, mode, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_time(&ctx, TimeCommand::Time { date, mode }, fmt);
        }
        Commands::Relative { timestamp, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_time(&ctx, TimeCommand::Relative { timestamp }, fmt);
        }
        Commands::Now { pattern, format } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::time::handle_time(&ctx, TimeCommand::Now { format: pattern }, fmt);
        }
        Commands::Shift {
            date,
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            back,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            let delta = CalendarDelta::new()
                .years(years)
                .months(months)
                .days(days)
                .hours(hours)
                .minutes(minutes)
                .seconds(seconds);
            commands::time::handle_time(&ctx, TimeCommand::Shift { date, delta, back }, fmt);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx),
            ConfigCommands::Get { key, format } => {
                let fmt = ctx.output_format(format.as_deref());
                commands::config::handle_get(&ctx, key.as_deref(), fmt);
            }
            ConfigCommands::Set { key, value } => {
                commands::config::handle_set(&ctx, &key, &value);
            }
        },
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shift_with_negative_components() {
        let cli = Cli::try_parse_from([
            "humanize", "shift", "2021-07-10", "--months", "-2", "--days", "3", "--back",
        ])
        .unwrap();
        match cli.command {
            Commands::Shift {
                months, days, back, ..
            } => {
                assert_eq!(months, -2);
                assert_eq!(days, 3);
                assert!(back);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_typed_options() {
        let cli = Cli::try_parse_from(["humanize", "-vv", "size", "1024", "--units", "binary"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Size { units, .. } => assert_eq!(units, Some(UnitSystem::Binary)),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["humanize", "time", "2021-07-10", "--mode", "components"])
            .unwrap();
        match cli.command {
            Commands::Time { mode, .. } => assert_eq!(mode, Some(TimeMode::Components)),
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Cli::try_parse_from(["humanize", "size", "1", "--units", "furlongs"]).is_err());
    }

    #[test]
    fn test_parse_negative_number() {
        let cli = Cli::try_parse_from(["humanize", "ordinal", "-23"]).unwrap();
        match cli.command {
            Commands::Ordinal { value, .. } => assert_eq!(value, -23),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
