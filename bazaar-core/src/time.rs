use chrono::{DateTime, Duration, Utc};

/// How far back the listings feed reaches.
pub const LISTING_WINDOW_DAYS: i64 = 30;

// The backend expects `startTime`/`endTime` in this exact shape, UTC.
const QUERY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trailing time window for the listings query. Derived per call, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of the trailing [`LISTING_WINDOW_DAYS`] days ending now.
    pub fn last_30_days() -> Self {
        Self::trailing_days(LISTING_WINDOW_DAYS)
    }

    /// Window of the trailing `days` days ending now.
    pub fn trailing_days(days: i64) -> Self {
        Self::ending_at(Utc::now(), days)
    }

    pub fn ending_at(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// `startTime` query parameter value.
    pub fn start_param(&self) -> String {
        self.start.format(QUERY_FORMAT).to_string()
    }

    /// `endTime` query parameter value.
    pub fn end_param(&self) -> String {
        self.end.format(QUERY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_params_for_a_fixed_end() {
        let end = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let window = TimeWindow::ending_at(end, LISTING_WINDOW_DAYS);

        assert_eq!(window.start_param(), "2024-05-16 12:00:00");
        assert_eq!(window.end_param(), "2024-06-15 12:00:00");
    }

    #[test]
    fn window_spans_the_requested_days() {
        let end = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let window = TimeWindow::ending_at(end, 30);
        assert_eq!(window.end() - window.start(), Duration::days(30));
        assert!(window.start() < window.end());
    }

    #[test]
    fn trailing_window_ends_now_ish() {
        let before = Utc::now();
        let window = TimeWindow::last_30_days();
        let after = Utc::now();
        assert!(window.end() >= before && window.end() <= after);
    }
}
