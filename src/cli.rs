//! Interactive session: prompt, read one password, print the report.

use std::io::{self, BufRead, Write};

use secrecy::SecretString;
use thiserror::Error;

use crate::evaluator::evaluate;
use crate::report::{HEADER, INSTRUCTIONS, PROMPT, render};
use crate::types::EvaluationResult;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How the password is read from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Read a line from the given reader; typed characters are echoed.
    #[default]
    Echo,
    /// Read from the terminal without echo.
    Masked,
}

/// Prompts on `output` and reads one line from `input`.
///
/// Only the line terminator is stripped; surrounding spaces are part of
/// the password. Returns `Ok(None)` on end of input.
pub fn read_password<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<SecretString>, CliError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    strip_line_ending(&mut line);

    Ok(Some(SecretString::new(line.into())))
}

/// Reads the password from the terminal without echoing it.
pub fn read_masked_password() -> Result<Option<SecretString>, CliError> {
    match rpassword::prompt_password(PROMPT) {
        Ok(line) => Ok(Some(SecretString::new(line.into()))),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Runs one interactive check.
///
/// Returns `Ok(None)` when the input ended before a password was entered.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mode: InputMode,
) -> Result<Option<EvaluationResult>, CliError> {
    writeln!(output, "{}", HEADER)?;
    writeln!(output, "{}", INSTRUCTIONS)?;
    output.flush()?;

    let password = match mode {
        InputMode::Echo => read_password(input, output)?,
        InputMode::Masked => read_masked_password()?,
    };

    let Some(password) = password else {
        tracing::debug!("input closed before a password was entered");
        return Ok(None);
    };

    let evaluation = evaluate(&password);
    write!(output, "{}", render(&evaluation))?;
    output.flush()?;

    Ok(Some(evaluation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    fn run_with(input: &str) -> (Option<EvaluationResult>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run(&mut input, &mut output, InputMode::Echo).expect("run failed");
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn test_read_password_strips_newline_only() {
        let mut input = Cursor::new(b"  spaced pwd \r\n".to_vec());
        let mut output = Vec::new();
        let pwd = read_password(&mut input, &mut output)
            .expect("read failed")
            .expect("password expected");
        assert_eq!(pwd.expose_secret(), "  spaced pwd ");
        assert_eq!(output, PROMPT.as_bytes());
    }

    #[test]
    fn test_read_password_without_trailing_newline() {
        let mut input = Cursor::new(b"abc".to_vec());
        let mut output = Vec::new();
        let pwd = read_password(&mut input, &mut output)
            .expect("read failed")
            .expect("password expected");
        assert_eq!(pwd.expose_secret(), "abc");
    }

    #[test]
    fn test_read_password_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let pwd = read_password(&mut input, &mut output).expect("read failed");
        assert!(pwd.is_none());
    }

    #[test]
    fn test_run_full_transcript() {
        let (result, transcript) = run_with("Abcdefgh1!\n");
        let result = result.expect("evaluation expected");
        assert_eq!(result.strength, Strength::Strong);

        let expected = "=== Password Strength Checker ===\n\
            Enter a password to check its strength:\n\
            Password: \n\
            === Results ===\n\
            Strength: Strong (5/6)\n\
            \n\
            Feedback:\n\
            - Password length is acceptable, but could be longer.\n\
            - Contains uppercase letters. ✓\n\
            - Contains lowercase letters. ✓\n\
            - Contains numbers. ✓\n\
            - Contains special characters. ✓\n\
            \n\
            Your password is strong. Good job!\n";
        assert_eq!(transcript, expected);
    }

    #[test]
    fn test_run_empty_line_is_evaluated() {
        let (result, transcript) = run_with("\n");
        let result = result.expect("evaluation expected");
        assert_eq!(result.score, 0);
        assert!(transcript.contains("Strength: Weak (0/6)"));
    }

    #[test]
    fn test_run_eof_is_no_input() {
        let (result, transcript) = run_with("");
        assert!(result.is_none());
        assert!(!transcript.contains("=== Results ==="));
    }

    #[test]
    fn test_cli_error_display() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "Terminal I/O failed: closed");
    }
}
