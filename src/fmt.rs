//! Shared formatting and rounding helpers.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.
//! Memory figures are rendered in GB with 3 decimals, percentages as
//! integers, disk free space with 1 decimal.

/// Rendered in place of any metric the host could not answer.
pub const PLACEHOLDER: &str = "n/a";

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Rounds to 3 decimal places.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Converts a byte count to GiB rounded to 3 decimals.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round3(bytes as f64 / GIB)
}

/// Converts a byte count to MiB (unrounded, used by the memory gauge).
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MIB
}

/// Converts a byte count to GiB rounded to 1 decimal (disk free space).
pub fn bytes_to_gb1(bytes: u64) -> f64 {
    (bytes as f64 / GIB * 10.0).round() / 10.0
}

/// Total RAM in whole GB, the way vendors label modules
/// (MiB divided by 1000, rounded).
pub fn total_ram_gb(bytes: u64) -> u64 {
    (bytes as f64 / MIB / 1000.0).round() as u64
}

/// Formats a GB figure with up to 3 decimals, always keeping at least one
/// (`3.0`, `2.456`).
pub fn format_gb(v: f64) -> String {
    let s = format!("{:.3}", v);
    let trimmed = s.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Formats an optional GB figure, substituting the placeholder.
pub fn format_opt_gb(v: Option<f64>) -> String {
    v.map(format_gb).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Formats an optional integer percentage, substituting the placeholder.
pub fn format_opt_pct(v: Option<u8>) -> String {
    v.map(|p| p.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Formats an optional count, substituting the placeholder.
pub fn format_opt_count(v: Option<usize>) -> String {
    v.map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(0.0004), 0.0);
        assert_eq!(round3(2.5), 2.5);
    }

    #[test]
    fn test_bytes_to_gb_exact_3_gib() {
        // 3 GiB exactly must render as "3.0"
        let gb = bytes_to_gb(3_221_225_472);
        assert_eq!(gb, 3.0);
        assert_eq!(format_gb(gb), "3.0");
    }

    #[test]
    fn test_format_gb_keeps_decimals() {
        assert_eq!(format_gb(2.456), "2.456");
        assert_eq!(format_gb(11.718), "11.718");
        assert_eq!(format_gb(0.5), "0.5");
    }

    #[test]
    fn test_total_ram_gb() {
        // 16 GiB module reads as 16 GB
        assert_eq!(total_ram_gb(16 * 1024 * 1024 * 1024), 16);
        // 8 GiB module reads as 8 GB
        assert_eq!(total_ram_gb(8 * 1024 * 1024 * 1024), 8);
    }

    #[test]
    fn test_bytes_to_gb1() {
        assert_eq!(bytes_to_gb1(50 * 1024 * 1024 * 1024), 50.0);
        assert_eq!(bytes_to_gb1(1_610_612_736), 1.5);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(format_opt_gb(None), PLACEHOLDER);
        assert_eq!(format_opt_pct(None), PLACEHOLDER);
        assert_eq!(format_opt_count(Some(120)), "120");
    }
}
