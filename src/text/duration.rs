use crate::error::{ChatbotError, Result};

const HOUR_UNITS: [&str; 2] = ["hrs", "hr"];
const MINUTE_UNITS: [&str; 2] = ["mins", "min"];

/// Converts a duration such as "1 hr 20 mins" into whole minutes.
///
/// Only the first hour unit and the first minute unit are read, each from the
/// token right before it. A string without any unit is zero minutes.
///
/// # Errors
/// Returns [`ChatbotError::ParseError`] when a unit has no whole number in
/// front of it.
pub fn parse_duration(text: &str) -> Result<u32> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let hours = quantity_before(&tokens, &HOUR_UNITS)?;
    let minutes = quantity_before(&tokens, &MINUTE_UNITS)?;

    hours
        .checked_mul(60)
        .and_then(|hours| hours.checked_add(minutes))
        .ok_or_else(|| ChatbotError::ParseError(format!("'{}' is too long", text.trim())))
}

fn quantity_before(tokens: &[&str], units: &[&str]) -> Result<u32> {
    // "hrs" wins over "hr" when both appear
    let Some(index) = units
        .iter()
        .find_map(|unit| tokens.iter().position(|token| token == unit))
    else {
        return Ok(0);
    };

    let quantity = match index.checked_sub(1) {
        Some(previous) => tokens[previous],
        None => {
            return Err(ChatbotError::ParseError(format!(
                "'{}' has no quantity before it",
                tokens[index]
            )))
        }
    };

    quantity.parse::<u32>().map_err(|_| {
        ChatbotError::ParseError(format!(
            "'{}' is not a whole number of {}",
            quantity, tokens[index]
        ))
    })
}
