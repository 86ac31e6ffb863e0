/// Match a value against a vocabulary pattern.
///
/// A trailing `*` makes the pattern a prefix match; otherwise the comparison
/// is exact.
#[must_use]
pub fn matches_value(value: &str, pattern: &str) -> bool {
    pattern.strip_suffix('*').map_or_else(
        || value == pattern,
        |prefix| value.starts_with(prefix),
    )
}

/// Match a value against any pattern in a list, with [`matches_value`]
/// semantics per entry.
pub fn matches_any<'a, I>(value: &str, patterns: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    patterns.into_iter().any(|p| matches_value(value, p))
}

#[cfg(test)]
#[path = "matchers_tests.rs"]
mod tests;
