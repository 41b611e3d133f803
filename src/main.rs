use log::{error, info};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use word_ranker::{
    run_with_custom_config, Error, InputSource, ReportFormat, TokenRule, WordRankerConfig,
    DEFAULT_WORD_RANKER_CONFIG,
};

const USAGE: &str = "Usage: word-ranker-cli [--extended] [--csv] [--diagnostics] [FILE]

Counts the words of FILE (or stdin; `.gz` files are decompressed) and prints
`<count>: <token>` lines, most frequent first, ties in alphabetical order.

  --extended     also accept `_`, `-` and a lone `#` in words
  --csv          print the report as CSV
  --diagnostics  dump distinct counts, tier counters and vocabulary to stderr";

#[derive(Debug)]
struct CliArgs {
    config: WordRankerConfig,
    input: Option<PathBuf>,
    show_help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, Error> {
    let mut cli_args = CliArgs {
        config: *DEFAULT_WORD_RANKER_CONFIG,
        input: None,
        show_help: false,
    };

    for arg in args {
        match arg.as_str() {
            "--extended" => cli_args.config.token_rule = TokenRule::Extended,
            "--csv" => cli_args.config.report_format = ReportFormat::Csv,
            "--diagnostics" => cli_args.config.emit_diagnostics = true,
            "-h" | "--help" => cli_args.show_help = true,
            option if option.starts_with("--") => {
                return Err(Error::ConfigError(format!("unknown option `{}`", option)));
            }
            path => {
                if cli_args.input.is_some() {
                    return Err(Error::ConfigError(format!(
                        "unexpected extra input `{}`",
                        path
                    )));
                }
                cli_args.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(cli_args)
}

fn run(cli_args: &CliArgs) -> Result<(), Error> {
    let reader = InputSource::from_path(cli_args.input.as_deref()).open()?;

    let stdout = io::stdout();
    let stderr = io::stderr();

    let report = run_with_custom_config(
        &cli_args.config,
        reader,
        BufWriter::new(stdout.lock()),
        stderr.lock(),
    )?;

    info!(
        "Ranked {} distinct tokens out of {}",
        report.entries().len(),
        report.token_count
    );

    Ok(())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli_args = match parse_args(std::env::args().skip(1)) {
        Ok(cli_args) => cli_args,
        Err(e) => {
            error!("Failed to parse arguments: {}", e);
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    if cli_args.show_help {
        println!("{}", USAGE);
        return;
    }

    if let Err(e) = run(&cli_args) {
        error!("Error ranking words: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let cli_args = parse_args(args(&[])).unwrap();

        assert_eq!(cli_args.config, *DEFAULT_WORD_RANKER_CONFIG);
        assert_eq!(cli_args.input, None);
        assert!(!cli_args.show_help);
    }

    #[test]
    fn test_parse_args_all_options() {
        let cli_args =
            parse_args(args(&["--extended", "--csv", "--diagnostics", "words.txt.gz"])).unwrap();

        assert_eq!(cli_args.config.token_rule, TokenRule::Extended);
        assert_eq!(cli_args.config.report_format, ReportFormat::Csv);
        assert!(cli_args.config.emit_diagnostics);
        assert_eq!(cli_args.input, Some(PathBuf::from("words.txt.gz")));
    }

    #[test]
    fn test_parse_args_rejects_unknown_option() {
        let result = parse_args(args(&["--verbose"]));

        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_parse_args_rejects_second_input() {
        let result = parse_args(args(&["a.txt", "b.txt"]));

        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
