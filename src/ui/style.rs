use console::style;
use std::fmt::Display;

/// Green bold — success toasts, submit confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold — screen titles, section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim — subtitles, counters, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow — warnings, stale-guidance notes, limit hints
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green — confirmed values, vibe labels, peer names
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold — step numbers, list bullets
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan — field labels, theme names
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Cyan underlined — URLs, endpoints
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Green dim — secondary stats, trend deltas
pub fn dim_value<D: Display>(text: D) -> String {
    style(text).green().dim().to_string()
}

/// Red — validation failures, tone fallback notices
pub fn error<D: Display>(text: D) -> String {
    style(text).red().to_string()
}
