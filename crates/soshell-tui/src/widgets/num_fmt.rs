//! Compact count and relative-time formatting helpers.

use chrono::{DateTime, Utc};

/// Format an engagement count the way feeds do: "450", "1.2K", "3.4M".
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn fmt_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Relative timestamp: "just now", "5m ago", "2h ago", "3d ago".
pub fn fmt_relative(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - posted_at).num_seconds().max(0);
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".into()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_are_compacted() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(450), "450");
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(1_000), "1.0K");
        assert_eq!(fmt_count(1_234), "1.2K");
        assert_eq!(fmt_count(3_400_000), "3.4M");
    }

    #[test]
    fn relative_times() {
        let now = Utc::now();
        assert_eq!(fmt_relative(now, now), "just now");
        assert_eq!(fmt_relative(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(fmt_relative(now - Duration::hours(2), now), "2h ago");
        assert_eq!(fmt_relative(now - Duration::days(3), now), "3d ago");
        // Clock skew never yields negative ages.
        assert_eq!(fmt_relative(now + Duration::hours(1), now), "just now");
    }
}
