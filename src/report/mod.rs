use std::{
    fmt,
    io::{self, Write},
};

use crate::domain::summary::Summary;

const RULE_WIDTH: usize = 50;

/// Fixed-width terminal rendering of a [`Summary`].
pub struct Report<'a>(pub &'a Summary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "Costs Summary by Date:")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{:<12} {:<15} {:<10} {:<10}", "Date", "Cost", "Count", "RowCost")?;
        writeln!(f, "{rule}")?;

        for day in self.0.dates() {
            writeln!(
                f,
                "{:<12} ${:<14} {:<10} ${:<9}",
                day.date,
                grouped(day.total_cost),
                day.count,
                cents(day.row_cost()),
            )?;
        }

        if !self.0.is_empty() {
            writeln!(f, "{rule}")?;
            writeln!(f, "Total records: {}", self.0.total_records())?;
            writeln!(f, "Total cost: ${}", grouped(self.0.total_cost()))?;
        }

        Ok(())
    }
}

pub fn render(summary: &Summary, mut writer: impl Write) -> io::Result<()> {
    write!(writer, "{}", Report(summary))?;
    writer.flush()
}

/// Two decimal places, ties to even on the exact binary value.
pub fn cents(amount: f64) -> String {
    if amount.is_finite() {
        format!("{amount:.2}")
    } else {
        amount.to_string().to_lowercase()
    }
}

/// [`cents`] with a comma between each group of three integer digits.
fn grouped(amount: f64) -> String {
    let text = cents(amount);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.as_str()),
    };
    let Some((int, frac)) = digits.split_once('.') else {
        return text;
    };

    let mut out = String::with_capacity(text.len() + int.len() / 3);
    out.push_str(sign);
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(frac);
    out
}
