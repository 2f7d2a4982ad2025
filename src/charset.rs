use serde::Deserialize;



pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ALPHABETIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const NUMERIC: &str = "0123456789";
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const HEX: &str = "0123456789abcdef";
pub const SYMBOLS: &str = r#"`~!@#$%^&*()-_+={}[]|\;:"<>,./?"#;



/// Named predefined character sets, as they appear in `config.json`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    Uppercase,
    Lowercase,
    Alphabetic,
    Numeric,
    Alphanumeric,
    Hex,
    Symbols,
}


impl Charset {
    pub fn as_str(self) -> &'static str {
        match self {
            Charset::Uppercase => UPPERCASE,
            Charset::Lowercase => LOWERCASE,
            Charset::Alphabetic => ALPHABETIC,
            Charset::Numeric => NUMERIC,
            Charset::Alphanumeric => ALPHANUMERIC,
            Charset::Hex => HEX,
            Charset::Symbols => SYMBOLS,
        }
    }
}


/// Concatenates every supplied set into one flat pool of symbols.
///
/// Symbols shared by several sets are kept once per set, so they are drawn
/// proportionally more often. An empty union falls back to [`ALPHANUMERIC`].
pub fn union(charsets: &[&str]) -> Vec<char> {
    let pool: Vec<char> = charsets.iter().flat_map(|set| set.chars()).collect();

    if pool.is_empty() {
        ALPHANUMERIC.chars().collect()
    } else {
        pool
    }
}
