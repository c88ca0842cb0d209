/// Returns the first `<...>` group whose trimmed interior is non-empty.
///
/// A group runs from a `<` to the next `>`; the interior may itself contain
/// `<`. Scanning resumes after each closed group.
pub fn bracketed(line: &str) -> Option<&str> {
    let mut rest = line;
    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let close = after_open.find('>')?;
        if close == 0 {
            // `<>` never forms a group; retry from the next `<`.
            rest = after_open;
            continue;
        }
        let inner = after_open[..close].trim();
        if !inner.is_empty() {
            return Some(inner);
        }
        rest = &after_open[close + 1..];
    }
    None
}

/// Returns the first `"..."` group that is not blank, untrimmed.
pub fn quoted(line: &str) -> Option<&str> {
    let mut rest = line;
    while let Some(open) = rest.find('"') {
        let after_open = &rest[open + 1..];
        let close = after_open.find('"')?;
        let inner = &after_open[..close];
        if !inner.trim().is_empty() {
            return Some(inner);
        }
        rest = &after_open[close + 1..];
    }
    None
}
