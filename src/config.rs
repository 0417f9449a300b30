use std::path::PathBuf;

use crate::domain::Error;

pub const USAGE: &str = "usage: credit_card_service [--accounts <accounts.csv>] \
[--transactions <transactions.csv>] [<requests.csv>]";

/// Where data and requests come from. Missing data files fall back to the
/// built-in sample dataset; a missing request path means stdin.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub accounts: Option<PathBuf>,
    pub transactions: Option<PathBuf>,
    pub requests: Option<PathBuf>,
}

impl Config {
    /// Parses arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--accounts" => config.accounts = Some(flag_value(&arg, args.next())?),
                "--transactions" => config.transactions = Some(flag_value(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(Error::Config(format!("Unknown flag {}\n{}", flag, USAGE)));
                }
                path => {
                    if config.requests.is_some() {
                        return Err(Error::Config(format!(
                            "Unexpected argument {}\n{}",
                            path, USAGE
                        )));
                    }
                    config.requests = Some(PathBuf::from(path));
                }
            }
        }

        Ok(config)
    }
}

fn flag_value(flag: &str, value: Option<String>) -> Result<PathBuf, Error> {
    value
        .filter(|v| !v.starts_with("--"))
        .map(PathBuf::from)
        .ok_or_else(|| Error::Config(format!("{} expects a path\n{}", flag, USAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        Config::from_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn defaults_to_sample_data_and_stdin() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_flags_and_request_path() {
        let config = parse(&[
            "--accounts",
            "a.csv",
            "requests.csv",
            "--transactions",
            "t.csv",
        ])
        .unwrap();
        assert_eq!(config.accounts, Some(PathBuf::from("a.csv")));
        assert_eq!(config.transactions, Some(PathBuf::from("t.csv")));
        assert_eq!(config.requests, Some(PathBuf::from("requests.csv")));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(parse(&["--verbose"]), Err(Error::Config(_))));
        assert!(matches!(parse(&["--accounts"]), Err(Error::Config(_))));
        assert!(matches!(
            parse(&["--accounts", "--transactions"]),
            Err(Error::Config(_))
        ));
        assert!(matches!(parse(&["a.csv", "b.csv"]), Err(Error::Config(_))));
    }
}
