use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI arguments for synonyms-server
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config_file: Option<PathBuf>,
    pub seed_file: Option<PathBuf>,
    pub default_max_depth: Option<usize>,
    pub max_request_size: Option<usize>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        let matches = Self::command().get_matches();

        if matches.get_flag("help_env") {
            Self::print_env_help();
            std::process::exit(0);
        }

        Self::from_matches(&matches)
    }

    /// Parse arguments from an explicit iterator, failing instead of exiting
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            host: matches.get_one::<String>("host").cloned(),
            port: matches.get_one::<u16>("port").copied(),
            config_file: matches.get_one::<PathBuf>("config").cloned(),
            seed_file: matches.get_one::<PathBuf>("seed").cloned(),
            default_max_depth: matches.get_one::<usize>("default_max_depth").copied(),
            max_request_size: matches.get_one::<usize>("max_request_size").copied(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }

    fn command() -> Command {
        Command::new("synonyms-server")
            .version(synonyms::VERSION)
            .about("HTTP API server for the synonyms relationship store")
            .long_about(
                r#"Synonyms Server exposes a REST API to register synonym pairs and to
query the direct or transitive synonyms of a word. Words are matched
case-insensitively. All data lives in memory for the lifetime of the process.

The server can be configured through command line arguments or environment
variables. Command line arguments take precedence over environment variables.

Examples:
  synonyms-server --port 8080
  synonyms-server --seed thesaurus.json --log-level debug
  synonyms-server --config synonyms.toml"#,
            )
            .arg(
                Arg::new("host")
                    .long("host")
                    .value_name("ADDR")
                    .help("Address to bind to")
                    .long_help(
                        "IP address the HTTP server binds to.
Environment variable: SYNONYMS_HOST",
                    )
                    .value_hint(ValueHint::Hostname),
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .help("Port to listen on")
                    .long_help(
                        "Port number for the HTTP server to listen on.
Environment variable: SYNONYMS_PORT",
                    )
                    .value_hint(ValueHint::Other)
                    .value_parser(clap::value_parser!(u16)),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .long_help(
                        "Path to a TOML, YAML or JSON configuration file for the
store and logging. Without it, synonyms.toml and friends are looked up in
the working directory and the user configuration directory.
Environment variable: SYNONYMS_CONFIG_FILE",
                    )
                    .value_hint(ValueHint::FilePath)
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("seed")
                    .long("seed")
                    .value_name("FILE")
                    .help("Synonym dictionary to load at startup")
                    .long_help(
                        "JSON file holding an array of synonym groups, e.g.
[[\"happy\", \"cheerful\"], [\"big\", \"large\"]]. Every word in a group is
linked to every other word of that group.",
                    )
                    .value_hint(ValueHint::FilePath)
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("default_max_depth")
                    .long("default-max-depth")
                    .value_name("LINKS")
                    .help("Depth for bounded lookups that do not name one")
                    .long_help(
                        "Number of links followed by GET /api/synonyms/{word} when the
request has no max_depth parameter. Must be at least 1.
Environment variable: SYNONYMS_STORE__DEFAULT_MAX_DEPTH",
                    )
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("max_request_size")
                    .long("max-request-size")
                    .value_name("BYTES")
                    .help("Maximum request body size in bytes")
                    .long_help(
                        "Maximum size allowed for HTTP request bodies.
Larger requests will be rejected.
Environment variable: SYNONYMS_MAX_REQUEST_SIZE",
                    )
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("log_level")
                    .long("log-level")
                    .value_name("LEVEL")
                    .help("Logging level")
                    .long_help(
                        "Set the logging level. Valid values: error, warn, info, debug, trace
Environment variable: RUST_LOG",
                    )
                    .value_parser(["error", "warn", "info", "debug", "trace"]),
            )
            .arg(
                Arg::new("help_env")
                    .long("help-env")
                    .help("Show all environment variables")
                    .action(ArgAction::SetTrue),
            )
    }

    /// Print environment variable help
    fn print_env_help() {
        println!("Synonyms Server Environment Variables");
        println!("=====================================");
        println!();
        println!("Server Configuration:");
        println!("  SYNONYMS_HOST                     - Bind address (default: 0.0.0.0)");
        println!("  SYNONYMS_PORT                     - Server port (default: 3000)");
        println!(
            "  SYNONYMS_MAX_REQUEST_SIZE         - Max request body size in bytes (default: 1MB)"
        );
        println!("  SYNONYMS_CONFIG_FILE              - Path to config file");
        println!();
        println!("Store and logging (nested keys use a double underscore):");
        println!("  SYNONYMS_STORE__SEED_FILE         - Synonym dictionary loaded at startup");
        println!("  SYNONYMS_STORE__DEFAULT_MAX_DEPTH - Default depth for bounded queries");
        println!("  SYNONYMS_LOGGING__LEVEL           - Log level (default: info)");
        println!("  SYNONYMS_LOGGING__FORMAT          - default, json, compact or pretty");
        println!("  SYNONYMS_LOGGING__FILE            - Log file path");
        println!();
        println!("Logging:");
        println!(
            "  RUST_LOG                          - Logging filter, overrides the configured level"
        );
        println!();
        println!("Note: Command line arguments take precedence over environment variables.");
    }
}
