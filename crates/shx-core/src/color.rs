use once_cell::sync::Lazy;
use std::collections::HashMap;

static COLOR_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("darkgray", "#555555"),
        ("darkgrey", "#555555"),
        ("gray", "#888888"),
        ("grey", "#888888"),
        ("lightgray", "#cccccc"),
        ("lightgrey", "#cccccc"),
        ("purple", "purple"),
        ("black", "black"),
        ("white", "white"),
        ("red", "red"),
        ("yellow", "yellow"),
        ("blue", "blue"),
        ("green", "green"),
        ("cyan", "cyan"),
        ("orange", "orange"),
        ("pink", "pink"),
        ("brown", "brown"),
        ("magenta", "magenta"),
    ])
});

/// Maps a color token to a CSS color value.
///
/// Hyphens and spaces are dropped and lookup ignores case (`Dark-Gray`
/// finds `darkgray`). Tokens outside the alias table come back with the
/// separators still dropped but their case kept: `rgb(1, 2, 3)` becomes
/// `rgb(1,2,3)`, hex codes pass straight through.
pub fn normalize_color(token: &str) -> String {
    let compact: String = token
        .trim()
        .chars()
        .filter(|ch| *ch != '-' && *ch != ' ')
        .collect();
    if compact.is_empty() {
        return compact;
    }
    match COLOR_ALIASES.get(compact.to_lowercase().as_str()) {
        Some(value) => (*value).to_string(),
        None => compact,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_color;

    #[test]
    fn gray_family_aliases_resolve_to_hex() {
        assert_eq!(normalize_color("dark-gray"), "#555555");
        assert_eq!(normalize_color("Dark Grey"), "#555555");
        assert_eq!(normalize_color("GRAY"), "#888888");
        assert_eq!(normalize_color("light-grey"), "#cccccc");
    }

    #[test]
    fn named_colors_are_lowercased() {
        assert_eq!(normalize_color("Purple"), "purple");
        assert_eq!(normalize_color("  MAGENTA "), "magenta");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(normalize_color("#3B82F6"), "#3B82F6");
        assert_eq!(normalize_color("Teal"), "Teal");
    }

    #[test]
    fn unknown_tokens_lose_separators() {
        assert_eq!(normalize_color(" rgb(1, 2, 3) "), "rgb(1,2,3)");
        assert_eq!(normalize_color("Dark-Teal"), "DarkTeal");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize_color(""), "");
        assert_eq!(normalize_color("   "), "");
        assert_eq!(normalize_color(" - "), "");
    }
}
