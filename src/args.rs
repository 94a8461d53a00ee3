//! Command-line arguments

use crate::error::CliError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    pub table_path: PathBuf,
    pub config_path: Option<PathBuf>,
    /// Header activations, applied in order after the initial sort
    pub sorts: Vec<String>,
    /// Clock for the expiry pass (None = local time)
    pub now: Option<String>,
    pub json: bool,
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut parsed = Args::default();
        let mut table_path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config_path = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--sort" => parsed.sorts.push(value_for(&arg, args.next())?),
                "--now" => parsed.now = Some(value_for(&arg, args.next())?),
                "--json" => parsed.json = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("Unknown option {}", flag)));
                }
                _ if table_path.is_none() => table_path = Some(PathBuf::from(arg)),
                _ => return Err(CliError::Usage(format!("Unexpected argument {}", arg))),
            }
        }

        parsed.table_path = table_path.ok_or_else(|| CliError::Usage("Missing table file".to_string()))?;
        Ok(parsed)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, CliError> {
    value.ok_or_else(|| CliError::Usage(format!("{} needs a value", flag)))
}
