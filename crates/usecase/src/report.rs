// crates/usecase/src/report.rs
//! Fixed-width rendering shared by console and results-file output.

use line_tools_domain::{
    IntegerRecord, Mode, ResultLines,
    analytics::{FrequencyTable, Summary, to_binary, to_hex},
};

pub const ITEM_WIDTH: usize = 6;
pub const NUMBER_WIDTH: usize = 12;
pub const BINARY_WIDTH: usize = 28;
pub const HEX_WIDTH: usize = 10;

pub const WORD_WIDTH: usize = 20;
pub const COUNT_WIDTH: usize = 8;

pub const ELAPSED_KEY: &str = "TIME_ELAPSED_SECONDS";
pub const GRAND_TOTAL_LABEL: &str = "Grand Total";

/// Decimal exponents outside this range switch to scientific notation.
const FIXED_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Shortest round-trip rendering: integral values keep a trailing `.0`, and
/// very large or very small magnitudes use `1.5e+300` / `1e-05` notation.
pub fn format_decimal(value: f64) -> String {
    let scientific = format!("{value:e}");
    let split = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));

    if let Some((mantissa, exp)) = split {
        if value != 0.0 && !FIXED_EXPONENTS.contains(&exp) {
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
    }

    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn key_value(key: &str, value: impl std::fmt::Display) -> String {
    format!("{key}\t{value}")
}

pub fn elapsed_row(seconds: f64) -> String {
    key_value(ELAPSED_KEY, format_decimal(seconds))
}

fn format_mode(mode: Mode) -> String {
    match mode {
        Mode::Value(v) => format_decimal(v),
        Mode::NotApplicable => Mode::NOT_APPLICABLE_LABEL.to_owned(),
    }
}

pub fn statistics_rows(summary: &Summary) -> ResultLines {
    let mut lines = ResultLines::with_capacity(7);
    lines.push(key_value("COUNT", summary.count));
    lines.push(key_value("MEAN", format_decimal(summary.mean)));
    lines.push(key_value("MEDIAN", format_decimal(summary.median)));
    lines.push(key_value("MODE", format_mode(summary.mode)));
    lines.push(key_value("SD", format_decimal(summary.std_dev)));
    lines.push(key_value("VARIANCE", format_decimal(summary.variance)));
    lines
}

fn conversion_row(item: &str, number: &str, binary: &str, hex: &str) -> String {
    format!(
        "{item:<ITEM_WIDTH$}{number:<NUMBER_WIDTH$}{binary:<BINARY_WIDTH$}{hex:<HEX_WIDTH$}"
    )
}

pub fn conversion_rows(numbers: &[IntegerRecord]) -> ResultLines {
    let mut lines = ResultLines::with_capacity(numbers.len() + 2);
    lines.push(conversion_row("ITEM", "NUMBER", "BINARY", "HEX"));

    for (index, record) in numbers.iter().enumerate() {
        let n = record.value();
        lines.push(conversion_row(
            &(index + 1).to_string(),
            &n.to_string(),
            &to_binary(n),
            &to_hex(n),
        ));
    }
    lines
}

pub fn frequency_rows(table: &FrequencyTable) -> ResultLines {
    let ranking = table.ranking();
    let mut lines = ResultLines::with_capacity(ranking.len() + 2);

    for entry in &ranking {
        lines.push(format!(
            "{:<WORD_WIDTH$}{:>COUNT_WIDTH$}",
            entry.token, entry.count
        ));
    }
    lines.push(format!(
        "{GRAND_TOTAL_LABEL:<WORD_WIDTH$}{:>COUNT_WIDTH$}",
        table.grand_total()
    ));
    lines
}
