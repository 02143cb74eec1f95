//! Price Formatting
//!
//! Presentation-only adapter between numeric prices and display strings.

/// Group digits in threes with commas: 390500 -> "390,500"
pub fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "Rs. 79,999"
pub fn format_price(prefix: &str, amount: u32) -> String {
    format!("{} {}", prefix, group_thousands(amount))
}

/// Accept the legacy string form ("Rs. 79,999") at the data boundary
pub fn parse_price(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
