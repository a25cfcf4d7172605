//! CLI argument parsing.
//!
//! The benchmark surface is deliberately flat: no flags, no options.
//! Invoked bare (or with `run`) the binary executes the fixed catalog;
//! `help` and `version` are the only other verbs.

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the fixed benchmark suite.
    Run,
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// Accepts any iterator of strings rather than only
    /// `std::env::args()`, which keeps parsing testable.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Run,
            };
        }

        let command = match args[1].as_str() {
            "run" => Command::Run,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }
}
