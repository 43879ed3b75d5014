/// Trims every line of `text` and drops the ones left empty.
///
/// Remaining lines keep their order and are joined with a single `\n`.
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_blank_lines_and_padding() {
        let text = "Preheat oven to 375 degrees. \n\n\nMix ingredients thoroughly.\n\n   Bake for 20 minutes.";
        assert_eq!(
            normalize(text),
            "Preheat oven to 375 degrees.\nMix ingredients thoroughly.\nBake for 20 minutes."
        );
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        let text = "Preheat oven to 375 degrees.\nMix ingredients.\nBake for 20 minutes.";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n  \n \n   "), "");
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(normalize("Stir.\r\n\r\nServe.\r\n"), "Stir.\nServe.");
    }
}
