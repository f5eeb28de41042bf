//! Short currency labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SYMBOL: &str = "$";

/// Magnitude bands, largest first.
const BANDS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Format a value as a short dollar string: `$999`, `$1.5K`, `$2.5M`, `$3.2B`.
///
/// Bands are chosen on the magnitude and the sign is put back in front of the
/// symbol (`-$1.5K`). Values that round to `$0` never carry a sign. NaN is
/// shown as `$0` and infinities as `$∞`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{SYMBOL}0");
    }
    let magnitude = value.abs();
    let body = if magnitude.is_infinite() {
        "∞".to_owned()
    } else if let Some((divisor, suffix)) = BANDS.iter().find(|(threshold, _)| magnitude >= *threshold) {
        format!("{:.1}{suffix}", magnitude / divisor)
    } else {
        format!("{magnitude:.0}")
    };

    if value < 0.0 && body != "0" {
        format!("-{SYMBOL}{body}")
    } else {
        format!("{SYMBOL}{body}")
    }
}
