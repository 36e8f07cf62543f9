use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse numeric form text into an amount.
/// Accepts plain decimals (`"3.50"`, `"-3"`, `"+2"`) and scientific
/// notation (`"1e3"`). Returns `None` for empty or non-numeric text.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Budget field semantics: the longest leading run of the text that is a
/// number, so half-typed input like `"1e"` or `"2."` keeps its value while
/// the field is edited. Text with no numeric prefix counts as zero.
pub(crate) fn parse_budget(raw: &str) -> Decimal {
    let s = raw.trim_start();
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| parse_amount(&s[..end]))
        .unwrap_or(Decimal::ZERO)
}

/// Price field semantics: the amount must parse and must not be negative.
pub(crate) fn parse_price(raw: &str) -> Option<Decimal> {
    parse_amount(raw).filter(|p| *p >= Decimal::ZERO)
}

/// Characters a numeric form field will accept while typing.
pub(crate) fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
