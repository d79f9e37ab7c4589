use chrono::{DateTime, Duration, Utc};

/// How often the uptime label is refreshed.
pub const UPTIME_REFRESH_MS: u32 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    started_at: DateTime<Utc>,
}

impl Uptime {
    pub fn since(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    /// The page has no access to the real boot time, so the start is placed
    /// `hours_back`/`minutes_back` before `now`.
    pub fn simulated(now: DateTime<Utc>, hours_back: u32, minutes_back: u32) -> Self {
        let offset = Duration::hours(i64::from(hours_back)) + Duration::minutes(i64::from(minutes_back));
        Self::since(now - offset)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn label(&self, now: DateTime<Utc>) -> String {
        format_uptime(now - self.started_at)
    }
}

/// Formats as `"{hours}h {minutes}m"`. Negative spans read as zero.
pub fn format_uptime(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_uptime(Duration::seconds(59)), "0h 0m");
        assert_eq!(format_uptime(Duration::minutes(61)), "1h 1m");
        assert_eq!(format_uptime(Duration::hours(23) + Duration::minutes(59)), "23h 59m");
        assert_eq!(format_uptime(Duration::hours(49)), "49h 0m");
        assert_eq!(format_uptime(Duration::minutes(-5)), "0h 0m");
    }

    #[test]
    fn simulated_uptime_advances_with_the_clock() {
        let now = Utc::now();
        let uptime = Uptime::simulated(now, 5, 30);
        assert_eq!(uptime.label(now), "5h 30m");
        assert_eq!(uptime.label(now + Duration::minutes(45)), "6h 15m");
    }
}
