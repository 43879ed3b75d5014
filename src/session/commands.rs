use crate::error::{ChatbotError, Result};

/// A suggestion mode offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Time,
    Random,
    HighRated,
    Preference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Mode(Mode),
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") {
            return Some(MenuChoice::Exit);
        }
        let mode = match input {
            "1" => Mode::Time,
            "2" => Mode::Random,
            "3" => Mode::HighRated,
            "4" => Mode::Preference,
            _ => return None,
        };
        Some(MenuChoice::Mode(mode))
    }
}

/// Answer to a "would you like another suggestion?" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Yes,
    Quit,
    /// New time budget
    Different,
    /// New search keyword
    Another,
    Unrecognized,
}

impl Reply {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "yes" => Reply::Yes,
            "quit" => Reply::Quit,
            "different" => Reply::Different,
            "another" => Reply::Another,
            _ => Reply::Unrecognized,
        }
    }

    /// The word a user types for this reply; `None` for `Unrecognized`.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Reply::Yes => Some("yes"),
            Reply::Quit => Some("quit"),
            Reply::Different => Some("different"),
            Reply::Another => Some("another"),
            Reply::Unrecognized => None,
        }
    }
}

pub fn parse_minutes(input: &str) -> Result<u32> {
    let input = input.trim();
    input.parse().map_err(|_| {
        ChatbotError::InvalidInput(format!("'{}' is not a whole number of minutes", input))
    })
}

pub fn parse_rating(input: &str) -> Result<f64> {
    let input = input.trim();
    match input.parse::<f64>() {
        Ok(rating) if (0.0..=5.0).contains(&rating) => Ok(rating),
        _ => Err(ChatbotError::InvalidInput(format!(
            "'{}' is not a rating between 0 and 5",
            input
        ))),
    }
}

pub fn parse_query(input: &str) -> Result<&str> {
    let query = input.trim();
    if query.is_empty() {
        return Err(ChatbotError::InvalidInput(
            "a meal name or type is required".to_string(),
        ));
    }
    Ok(query)
}
