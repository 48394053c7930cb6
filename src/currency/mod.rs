use thiserror::Error;

/// Failure to interpret a spreadsheet cell as a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{input}` is not a valid currency amount")]
pub struct ParseMoneyError {
    pub input: String,
}

impl ParseMoneyError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Parses a currency-formatted string into a signed amount.
///
/// Accepts an optional sign, an optional leading `$`, optional thousands
/// separators, and an optional decimal fraction: `"$1,200.00"`, `"-$50"`,
/// `"840.5"` are all valid. This is the one parser used everywhere a
/// spreadsheet cell becomes a number.
pub fn parse_amount(input: &str) -> Result<f64, ParseMoneyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseMoneyError::new(input));
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let cleaned = rest.replace(',', "");
    if cleaned.is_empty() || !cleaned.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return Err(ParseMoneyError::new(input));
    }

    let value: f64 = cleaned.parse().map_err(|_| ParseMoneyError::new(input))?;
    Ok(if negative { -value } else { value })
}

/// Formats an amount as dollars with thousands grouping, e.g. `$1,200.00`.
/// Negative amounts carry a leading sign: `-$50.00`.
pub fn format_amount(amount: f64) -> String {
    let body = format!("{:.2}", amount.abs());
    let grouped = match body.find('.') {
        Some(pos) => format!("{}{}", group_digits(&body[..pos]), &body[pos..]),
        None => group_digits(&body),
    };
    if amount < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a signed fraction as a percentage with two fractional digits,
/// e.g. `-0.1` becomes `-10.00%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
