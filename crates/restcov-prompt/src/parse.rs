//! Parsing of line-oriented model replies.

/// Extract one value per response line.
///
/// Models are asked for bare values but often reply with ordered
/// (`1. value`, `2 value`) or unordered (`- value`) lists, or wrap
/// values in double quotes. Strip those decorations; blank lines are
/// dropped.
pub fn parse_response(response: &str) -> Vec<String> {
    response
        .lines()
        .filter_map(|line| {
            let line = strip_list_marker(line.trim());
            let line = strip_quotes(line);
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

/// Remove a leading `1.`/`1`/`-` list marker followed by one space.
fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix('-') {
        if let Some(value) = rest.strip_prefix(' ') {
            return value;
        }
        return line;
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    let mut rest = &line[digits..];
    rest = rest.strip_prefix('.').unwrap_or(rest);
    match rest.strip_prefix(' ') {
        Some(value) => value,
        None => line,
    }
}

/// Remove one pair of surrounding double quotes.
fn strip_quotes(line: &str) -> &str {
    if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
        &line[1..line.len() - 1]
    } else {
        line
    }
}
