//! Placeholder substitution for message templates.
//!
//! Templates use numbered placeholders (`{0}`, `{1}`, ...). A single quote starts or
//! ends a literal section in which braces are not interpreted, and two consecutive
//! single quotes render one quote, so translated templates can spell `l''argument`.

/// Substitute `{n}` in `template` with `args[n]`.
///
/// Placeholders whose index is out of range, or which are not a plain number, are left
/// in the output unchanged. An unterminated literal section runs to the end.
///
/// # Examples
///
/// ```rust
/// use memberscope::i18n::format_message;
///
/// let text = format_message("Method {0} takes {1} argument(s)", &["add", "2"]);
/// assert_eq!(text, "Method add takes 2 argument(s)");
///
/// let quoted = format_message("L''argument '{0}' vaut {0}", &["x"]);
/// assert_eq!(quoted, "L'argument {0} vaut x");
/// ```
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            '{' if !quoted => {
                let mut inner = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    inner.push(next);
                }

                let arg = inner
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index));
                match (arg, closed) {
                    (Some(arg), true) => out.push_str(arg),
                    _ => {
                        out.push('{');
                        out.push_str(&inner);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_substitution() {
        assert_eq!(format_message("{1} before {0}", &["a", "b"]), "b before a");
        assert_eq!(format_message("{0}{0}", &["x"]), "xx");
        assert_eq!(format_message("no placeholders", &["unused"]), "no placeholders");
    }

    #[test]
    fn test_missing_and_invalid_placeholders() {
        assert_eq!(format_message("{3}", &["a"]), "{3}");
        assert_eq!(format_message("{name}", &["a"]), "{name}");
        assert_eq!(format_message("open {0", &["a"]), "open {0");
    }

    #[test]
    fn test_quotes() {
        assert_eq!(format_message("d''arguments {0}", &["[]"]), "d'arguments []");
        assert_eq!(format_message("'{0}' = {0}", &["v"]), "{0} = v");
        assert_eq!(format_message("it''s '' here", &[]), "it's ' here");
    }
}
