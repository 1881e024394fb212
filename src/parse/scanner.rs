use super::types::{Operator, Segment};

/// Split a command at shell control operators (`&&`, `||`, `;`, `|`),
/// respecting single and double quotes.
///
/// Single left-to-right pass with one character of lookahead. Operators
/// inside quotes are never split on, so `echo "a && b"` stays one
/// segment. Total function: malformed input (unbalanced quotes, doubled
/// or trailing operators) degrades to a best-effort segmentation — an
/// unterminated quote swallows the rest of the input as quoted text.
pub fn scan(command: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut pending: Option<Operator> = None;

    let chars: Vec<char> = command.chars().collect();
    let len = chars.len();
    let mut i = 0;
    let mut in_quote: Option<char> = None;

    while i < len {
        let c = chars[i];

        // Quote toggling. A quote escaped by an immediately preceding
        // backslash is literal; so is a quote of the other kind inside
        // a quoted span. Quote characters stay in the segment text.
        if (c == '"' || c == '\'') && (i == 0 || chars[i - 1] != '\\') {
            match in_quote {
                Some(q) if q == c => in_quote = None,
                None => in_quote = Some(c),
                Some(_) => {}
            }
            buf.push(c);
            i += 1;
            continue;
        }

        if in_quote.is_some() {
            buf.push(c);
            i += 1;
            continue;
        }

        // Two-char operators first, so && and || are never misread as
        // single-char operators.
        if i + 1 < len {
            let op = match (c, chars[i + 1]) {
                ('&', '&') => Some(Operator::And),
                ('|', '|') => Some(Operator::Or),
                _ => None,
            };
            if let Some(op) = op {
                let text = buf.trim();
                if !text.is_empty() {
                    segments.push(Segment {
                        operator: pending,
                        text: text.to_string(),
                    });
                }
                pending = Some(op);
                buf.clear();
                i += 2;
                continue;
            }
        }

        // Single-char operators. `|` followed by another `|` is the
        // start of `||`, not a pipe.
        if c == ';' || (c == '|' && !(i + 1 < len && chars[i + 1] == '|')) {
            let op = if c == ';' {
                Operator::Semi
            } else {
                Operator::Pipe
            };
            let text = buf.trim();
            if !text.is_empty() {
                segments.push(Segment {
                    operator: pending,
                    text: text.to_string(),
                });
            }
            pending = Some(op);
            buf.clear();
            i += 1;
            continue;
        }

        buf.push(c);
        i += 1;
    }

    let text = buf.trim();
    if !text.is_empty() {
        segments.push(Segment {
            operator: pending,
            text: text.to_string(),
        });
    }

    segments
}
