/// Shell quoting for values embedded into the instance startup commands.
///
/// The install script is invoked with positional arguments; several of them
/// (bucket name, Duck DNS domain and token) are operator-controlled, and two
/// may legitimately be empty. Quoting keeps embedded metacharacters inert
/// and keeps an empty value an explicit `''` so the positional arity the
/// script expects is preserved.

/// Escape a string for safe use in a POSIX shell command.
///
/// Uses single-quote escaping: wraps the string in single quotes and
/// escapes any embedded single quotes using the `'\''` pattern. Values made
/// only of characters that are inert unquoted are passed through as-is.
///
/// # Examples
/// ```
/// use gamehost::shell::escape;
/// assert_eq!(escape("my-bucket"), "my-bucket");
/// assert_eq!(escape("it's"), "'it'\\''s'");
/// assert_eq!(escape(""), "''");
/// ```
pub fn escape(s: &str) -> String {
    // An empty argument must still occupy its positional slot
    if s.is_empty() {
        return "''".to_string();
    }

    let needs_escaping = s.chars().any(|c| {
        !c.is_ascii_alphanumeric() && c != '_' && c != '-' && c != '.' && c != '/' && c != ':'
    });

    if !needs_escaping {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 10);
    result.push('\'');
    for c in s.chars() {
        if c == '\'' {
            result.push_str("'\\''");
        } else {
            result.push(c);
        }
    }
    result.push('\'');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_values_pass_through() {
        assert_eq!(escape("my-bucket"), "my-bucket");
        assert_eq!(escape("true"), "true");
        assert_eq!(escape("factory.duckdns.org"), "factory.duckdns.org");
    }

    #[test]
    fn test_escape_empty_keeps_positional_slot() {
        assert_eq!(escape(""), "''");
    }

    #[test]
    fn test_escape_with_special_chars() {
        assert_eq!(escape("hello world"), "'hello world'");
        assert_eq!(escape("$HOME"), "'$HOME'");
        assert_eq!(escape("token&x"), "'token&x'");
    }

    #[test]
    fn test_escape_with_single_quote() {
        assert_eq!(escape("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_escape_dangerous_input() {
        assert_eq!(escape("; rm -rf /"), "'; rm -rf /'");
        assert_eq!(escape("$(whoami)"), "'$(whoami)'");
        assert_eq!(escape("`id`"), "'`id`'");
        assert_eq!(escape("a && b"), "'a && b'");
    }
}
