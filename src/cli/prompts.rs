//! Read/validate/retry prompts used by the add-vehicle wizard and the menu loop.

use crate::cli::core::CommandError;
use crate::cli::io::{self as cli_io, LineInput, ReadOutcome};
use crate::cli::validation;

/// Reads one line, mapping interrupt and end of input to command errors.
pub fn read_raw(input: &mut dyn LineInput, prompt: &str) -> Result<String, CommandError> {
    match input.read_line(prompt)? {
        ReadOutcome::Line(line) => Ok(line),
        ReadOutcome::Interrupted => Err(CommandError::Cancelled),
        ReadOutcome::Eof => Err(CommandError::InputClosed),
    }
}

/// Re-prompts until `accept` returns a value.
pub fn read_until<T>(
    input: &mut dyn LineInput,
    prompt: &str,
    retry_message: &str,
    mut accept: impl FnMut(&str) -> Option<T>,
) -> Result<T, CommandError> {
    loop {
        let line = read_raw(input, prompt)?;
        if let Some(value) = accept(&line) {
            return Ok(value);
        }
        cli_io::print_warning(retry_message);
    }
}

pub fn read_alphanumeric(input: &mut dyn LineInput, field: &str) -> Result<String, CommandError> {
    read_until(
        input,
        &format!("Enter {}: ", title_case(field)),
        &format!("Invalid {field}. Please enter only alphanumeric characters."),
        |line| validation::is_alphanumeric(line).then(|| line.to_string()),
    )
}

pub fn read_letters(input: &mut dyn LineInput, field: &str) -> Result<String, CommandError> {
    read_until(
        input,
        &format!("Enter {}: ", title_case(field)),
        &format!("Invalid {field}. Please enter only letters."),
        |line| validation::is_letters(line).then(|| line.to_string()),
    )
}

pub fn read_decimal(input: &mut dyn LineInput, prompt: &str) -> Result<f64, CommandError> {
    read_until(
        input,
        prompt,
        "Invalid input. Please enter a valid number.",
        validation::parse_decimal,
    )
}

/// Accepts one of `options` case-insensitively and returns it as written in `options`.
pub fn read_choice(
    input: &mut dyn LineInput,
    prompt: &str,
    options: &[&'static str],
    retry_message: &str,
) -> Result<&'static str, CommandError> {
    read_until(input, prompt, retry_message, |line| {
        let answer = line.trim();
        options
            .iter()
            .copied()
            .find(|option| option.eq_ignore_ascii_case(answer))
    })
}

fn title_case(field: &str) -> String {
    field
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
