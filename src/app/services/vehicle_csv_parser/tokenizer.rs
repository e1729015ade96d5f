//! Quote-aware CSV tokenization
//!
//! Lines are split strictly on `\n` and blank lines are dropped, so row
//! numbers count non-blank lines only. Each line is scanned with a two-state
//! machine (inside or outside quotes). Malformed quoting never fails: the
//! scanner just keeps going with whatever state it is in.

/// Split document text into non-blank lines
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Split one line into unquoted, trimmed fields
///
/// `""` inside a quoted section yields a literal quote. The final field is
/// always emitted, so `a,` produces two fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(finish_field(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(finish_field(&current));
    fields
}

/// Trim a field and strip one remaining layer of surrounding quotes
fn finish_field(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}
