use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for URL-safe slugs (category slugs, badge codes, etc.)
    /// Must be lowercase alphanumeric with single hyphens between segments
    /// - Valid: "magic", "yu-gi-oh", "one-piece-2024"
    /// - Invalid: "-magic", "magic-", "yu--gi-oh", "Magic", "yu_gi_oh"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}
