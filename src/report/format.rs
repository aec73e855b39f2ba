//! Currency formatting shared by all report renderers

/// Currency symbol prefixed to every displayed amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as currency: two decimal places and thousands
/// separators, e.g. `₹15,529.69`.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 {
        format!("-{}{}.{}", CURRENCY_SYMBOL, grouped, frac_part)
    } else {
        format!("{}{}.{}", CURRENCY_SYMBOL, grouped, frac_part)
    }
}
