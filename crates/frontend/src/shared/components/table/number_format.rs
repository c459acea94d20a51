//! Number formatting for table cells

/// Thousands separated with commas, fixed decimals: `1234.567, 2` -> `"1,234.57"`
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Catalog prices: "Rs. 1,250"
pub fn format_rupees(value: f64) -> String {
    format!("Rs. {}", format_number_with_decimals(value, 0))
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
