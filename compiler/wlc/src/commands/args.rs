//! Argument parsing for `run` and `eval`.

use thiserror::Error;

use crate::RunOptions;

/// A rejected `run`/`eval` argument.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("invalid step limit '{0}'")]
    InvalidStepLimit(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parsed `run`/`eval` arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunArgs<'a> {
    pub options: RunOptions,
    /// The file path (`run`) or source text (`eval`), if given.
    pub input: Option<&'a str>,
}

/// Parse `[--max-steps=N] <input>` in any order.
///
/// At most one positional argument is accepted; a later `--max-steps`
/// overrides an earlier one.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs<'_>, ArgsError> {
    let mut options = RunOptions::default();
    let mut input = None;

    for arg in args {
        if let Some(limit) = arg.strip_prefix("--max-steps=") {
            let limit = limit
                .parse::<u64>()
                .map_err(|_| ArgsError::InvalidStepLimit(limit.to_string()))?;
            options.max_steps = Some(limit);
        } else if arg.starts_with("--") {
            return Err(ArgsError::UnknownOption(arg.clone()));
        } else if input.is_none() {
            input = Some(arg.as_str());
        } else {
            return Err(ArgsError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(RunArgs { options, input })
}
