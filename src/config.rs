use clap::Parser;
use std::ffi::{OsStr, OsString};
use tracing::debug;

pub const DEFAULT_INDEX: u64 = 60;
pub const DEFAULT_REPEAT: u64 = 1;

// Raw positionals; parsing into numbers happens leniently in `Config::from_args`
#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    index: Option<OsString>,
    repeat: Option<OsString>,
    #[arg(hide = true)]
    rest: Vec<OsString>,
}

/// Resolved inputs of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Index of the Fibonacci term to compute.
    pub index: u64,
    /// How many times the computation runs before the last result is reported.
    pub repeat: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX,
            repeat: DEFAULT_REPEAT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Builds a config from a full argument list, program name first.
    ///
    /// Never fails: a missing or unparseable value falls back to its default, independently
    /// of the other one. Arguments past the second are ignored.
    ///
    /// # Example
    /// ```
    /// use fibonacci_cli::config::Config;
    /// let config = Config::from_args(["fib", "ten", "3"]);
    /// assert_eq!((config.index, config.repeat), (60, 3));
    /// ```
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        // Escape everything after the program name so a literal `--` or `-x` is a value
        let mut args = args.into_iter().map(|arg| -> OsString { arg.into() });
        let argv = args
            .next()
            .into_iter()
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);

        let args = match Args::try_parse_from(argv) {
            Ok(args) => args,
            Err(err) => {
                debug!(%err, "unusable arguments, using defaults");
                return Self::default();
            }
        };

        if !args.rest.is_empty() {
            debug!(ignored = ?args.rest, "ignoring extra arguments");
        }

        // Each value falls back on its own
        let config = Self {
            index: parse_or_default(args.index.as_deref(), "index", DEFAULT_INDEX),
            repeat: parse_or_default(args.repeat.as_deref(), "repeat", DEFAULT_REPEAT),
        };
        debug!(index = config.index, repeat = config.repeat, "resolved config");
        config
    }
}

fn parse_or_default(raw: Option<&OsStr>, name: &'static str, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    // Non-UTF-8 input can never be a number
    let Some(text) = raw.to_str() else {
        debug!(
            argument = name,
            ?raw,
            default,
            "non-UTF-8 argument, falling back to default"
        );
        return default;
    };

    text.parse().unwrap_or_else(|err| {
        debug!(argument = name, raw = text, %err, default, "falling back to default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str]) -> (u64, u64) {
        let config = Config::from_args(std::iter::once("fib").chain(args.iter().copied()));
        (config.index, config.repeat)
    }

    #[test]
    fn no_arguments_use_defaults() {
        assert_eq!(resolve(&[]), (DEFAULT_INDEX, DEFAULT_REPEAT));
        assert_eq!(Config::default(), Config::from_args(["fib"]));
    }

    #[test]
    fn numeric_arguments_are_used() {
        assert_eq!(resolve(&["10"]), (10, 1));
        assert_eq!(resolve(&["100", "5"]), (100, 5));
    }

    #[test]
    fn malformed_arguments_fall_back_independently() {
        assert_eq!(resolve(&["abc"]), (60, 1));
        assert_eq!(resolve(&["abc", "4"]), (60, 4));
        assert_eq!(resolve(&["10", "many"]), (10, 1));
        assert_eq!(resolve(&["1.5", ""]), (60, 1));
        assert_eq!(resolve(&["99999999999999999999999"]), (60, 1));
    }

    #[test]
    fn negative_values_fall_back() {
        assert_eq!(resolve(&["-3"]), (60, 1));
        assert_eq!(resolve(&["10", "-3"]), (10, 1));
    }

    #[test]
    fn flags_are_not_recognised() {
        assert_eq!(resolve(&["--help"]), (60, 1));
        assert_eq!(resolve(&["-V"]), (60, 1));
    }

    #[test]
    fn double_dash_is_an_ordinary_value() {
        assert_eq!(resolve(&["--", "10"]), (60, 1));
        assert_eq!(resolve(&["10", "--", "5"]), (10, 1));
        assert_eq!(resolve(&["10", "5", "--"]), (10, 5));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_only_resets_its_own_value() {
        use std::os::unix::ffi::OsStringExt;

        let invalid = || OsString::from_vec(vec![0xff]);
        let config = Config::from_args([OsString::from("fib"), OsString::from("10"), invalid()]);
        assert_eq!((config.index, config.repeat), (10, 1));

        let config = Config::from_args([OsString::from("fib"), invalid(), OsString::from("4")]);
        assert_eq!((config.index, config.repeat), (60, 4));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(resolve(&["7", "2", "extra", "more"]), (7, 2));
    }
}
