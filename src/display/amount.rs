//! Amount formatting in the app's single fixed locale
//!
//! Two decimals, comma thousands separators, currency symbol in front:
//! `$1,200.00`, `-$3.50`.

/// Format an amount with a currency symbol
///
/// Works on the decimal text of the value, so magnitudes beyond any integer
/// type keep every digit.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = whole.bytes().chain(cents.bytes()).all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
