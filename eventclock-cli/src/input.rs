//! Interactive input helpers.

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};
use dialoguer::Input;
use eventclock_core::datetime;
use owo_colors::OwoColorize;

/// Prompt the user with retry on parse errors.
pub fn prompt_with_retry<T, F>(prompt: &str, initial: Option<&str>, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }

        match parse(&input.interact_text()?) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for free text; empty input is allowed.
pub fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

const DAY_AND_MONTH_NAMES: [&str; 19] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "january", "february", "march", "april", "june", "july", "august", "september",
    "october", "november", "december", "may",
];

/// Spell out shortened day and month names ("sat", "Sept") for fuzzydate.
///
/// A word of three letters or more that starts exactly one name is replaced
/// by that name; everything else is only lowercased.
fn expand_abbreviations(input: &str) -> String {
    lower_words(input)
        .map(|word| {
            let mut names = DAY_AND_MONTH_NAMES
                .iter()
                .filter(|name| word.len() >= 3 && name.starts_with(word.as_str()));
            match (names.next(), names.next()) {
                (Some(name), None) => name.to_string(),
                _ => word,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lower_words(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(str::to_lowercase)
}

/// Parse a date typed at a prompt.
///
/// The editor form (`2025-03-20T15:00`) and RFC 3339 are tried first; anything
/// else goes through fuzzydate ("next friday 6pm", "dec 24 at 18:00").
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = datetime::parse_input(input) {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let naive = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input.trim()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("\"{}\" does not exist in your timezone", input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat 3pm"), "saturday 3pm");
        assert_eq!(expand_abbreviations("fri 9am"), "friday 9am");
        assert_eq!(expand_abbreviations("thu noon"), "thursday noon");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("Sept 5"), "september 5");
        assert_eq!(expand_abbreviations("may 1"), "may 1");
    }

    #[test]
    fn longer_prefixes_expand_too() {
        assert_eq!(expand_abbreviations("tues 8pm"), "tuesday 8pm");
        assert_eq!(expand_abbreviations("thurs"), "thursday");
        assert_eq!(expand_abbreviations("mo ju"), "mo ju");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow 6pm"), "tomorrow 6pm");
        assert_eq!(expand_abbreviations("next  friday"), "next friday");
    }

    #[test]
    fn editor_form_is_parsed_exactly() {
        assert_eq!(
            parse_date("2030-05-01T09:30").unwrap(),
            datetime::parse_input("2030-05-01T09:30").unwrap()
        );
    }

    #[test]
    fn typed_seconds_survive() {
        let date = parse_date("2030-01-01T10:00:45Z").unwrap();
        assert_eq!(date.timestamp() % 60, 45);
    }

    #[test]
    fn natural_language_falls_back_to_fuzzydate() {
        let now = Utc::now();
        assert!(parse_date("tomorrow").unwrap() > now);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date("not a date at all xyz").is_err());
    }
}
