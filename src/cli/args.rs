//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use crate::models::LengthPolicy;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    pub levels: Option<String>,
    pub seismic: Option<String>,
    pub wind: Option<String>,
    /// Evaluate once and print instead of opening the form
    pub headless: bool,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub length_policy: LengthPolicy,
    pub log_file: Option<PathBuf>,
    pub skip_prompts: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Drift Ratio Checker - check story drift ratios against Eurocode limits");
    eprintln!();
    eprintln!("Usage: drift-ratio-checker [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --levels <LIST>    Comma-separated level numbers");
    eprintln!("  -s, --seismic <LIST>   Comma-separated seismic drift ratios (limit 0.01)");
    eprintln!("  -w, --wind <LIST>      Comma-separated wind drift ratios (limit 0.02)");
    eprintln!("  -p, --print            Print the report and exit instead of opening the form");
    eprintln!("  -o, --output <PATH>    Save the report to PATH (implies --print)");
    eprintln!("  --json                 Print results as JSON (implies --print)");
    eprintln!("  --strict               Reject lists of different lengths");
    eprintln!("  --log-file <PATH>      Append log output to PATH");
    eprintln!("  -y, --yes              Overwrite existing files without asking");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  drift-ratio-checker                                  # Open the form");
    eprintln!("  drift-ratio-checker -l 1,2 -s 0.012,0.008 -w 0.015,0.025 -p");
    eprintln!("  drift-ratio-checker -l 1,2 -s 0.012,0.008 -w 0.015,0.025 -o report");
}

/// Take the value following a flag, or fail with usage
fn flag_value(args: &[String], i: usize, flag: &str) -> io::Result<String> {
    match args.get(i) {
        Some(value) => Ok(value.clone()),
        None => {
            print_usage();
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Missing value for {}", flag),
            ))
        }
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    parse_args_from(std::env::args().skip(1))
}

/// Parse the given arguments (program name excluded)
pub fn parse_args_from<I>(args: I) -> io::Result<CliConfig>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("drift-ratio-checker {}", VERSION);
                std::process::exit(0);
            }
            "-l" | "--levels" => {
                i += 1;
                config.levels = Some(flag_value(&args, i, arg)?);
            }
            "-s" | "--seismic" => {
                i += 1;
                config.seismic = Some(flag_value(&args, i, arg)?);
            }
            "-w" | "--wind" => {
                i += 1;
                config.wind = Some(flag_value(&args, i, arg)?);
            }
            "-o" | "--output" => {
                i += 1;
                config.output = Some(PathBuf::from(flag_value(&args, i, arg)?));
                config.headless = true;
            }
            "--log-file" => {
                i += 1;
                config.log_file = Some(PathBuf::from(flag_value(&args, i, arg)?));
            }
            "-p" | "--print" => config.headless = true,
            "--json" => {
                config.json = true;
                config.headless = true;
            }
            "--strict" => config.length_policy = LengthPolicy::Strict,
            "-y" | "--yes" => config.skip_prompts = true,
            _ => {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", arg),
                ));
            }
        }
        i += 1;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> io::Result<CliConfig> {
        parse_args_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_opens_form() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config.headless);
    }

    #[test]
    fn test_field_values() {
        let config = parse(&["-l", "1,2", "--seismic", "0.012, 0.008", "-w", "0.015,0.025"]).unwrap();
        assert_eq!(config.levels.as_deref(), Some("1,2"));
        assert_eq!(config.seismic.as_deref(), Some("0.012, 0.008"));
        assert_eq!(config.wind.as_deref(), Some("0.015,0.025"));
        assert!(!config.headless);
    }

    #[test]
    fn test_output_implies_headless() {
        let config = parse(&["-o", "report.txt"]).unwrap();
        assert!(config.headless);
        assert_eq!(config.output, Some(PathBuf::from("report.txt")));
    }

    #[test]
    fn test_json_implies_headless() {
        let config = parse(&["--json"]).unwrap();
        assert!(config.headless);
        assert!(config.json);
    }

    #[test]
    fn test_flags() {
        let config = parse(&["--strict", "-y", "-p", "--log-file", "drift.log"]).unwrap();
        assert_eq!(config.length_policy, LengthPolicy::Strict);
        assert!(config.skip_prompts);
        assert!(config.headless);
        assert_eq!(config.log_file, Some(PathBuf::from("drift.log")));
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--levels"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("--levels"));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
