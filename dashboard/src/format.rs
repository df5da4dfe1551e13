use jiff::Zoned;
use jiff::civil::Date;
use payloads::responses::Trend;

/// Whole percentage, e.g. `35%`.
pub fn percentage(value: f64) -> String {
    format!("{value:.0}%")
}

/// Short date, e.g. `Jun 10`.
pub fn format_date(date: Date) -> String {
    date.strftime("%b %-d").to_string()
}

/// e.g. `Jun 10, 2024 at 2:30 PM`
pub fn format_date_time(zoned: &Zoned) -> String {
    zoned.strftime("%b %-d, %Y at %-I:%M %p").to_string()
}

pub fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Stable => "stable",
        Trend::Increasing => "rising",
        Trend::Decreasing => "falling",
    }
}
