use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Format of the `since` timestamp in report lines.
pub const SINCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Last raw value of one quantity and when it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementState {
    label: &'static str,

    value: i32,

    since: DateTime<Utc>,
}

impl MeasurementState {
    pub fn new(label: &'static str, since: DateTime<Utc>) -> Self {
        Self {
            label,
            value: 0,
            since,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn since(&self) -> DateTime<Utc> {
        self.since
    }

    pub fn reset(&mut self) {
        self.value = 0;
        self.since = Utc::now();
    }

    pub(crate) fn update(&mut self, value: i32) {
        self.value = value;
        self.since = Utc::now();
    }

    /// `\t<label>\t<converted><unit> (since <timestamp>)\n`, with the timestamp in `timezone`.
    pub fn render(&self, converted: &str, unit: &str, timezone: Tz) -> String {
        let since = self.since.with_timezone(&timezone).format(SINCE_FORMAT);
        format!("\t{}\t{converted}{unit} (since {since})\n", self.label)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use chrono_tz::Asia::Tokyo;

    use super::*;

    #[test]
    fn renders_in_requested_timezone() {
        let since = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let state = MeasurementState::new("Humidity", since);

        assert_eq!(
            state.render("55.00", "%", Tokyo),
            "\tHumidity\t55.00% (since 2024-03-01 21:30:00 JST)\n"
        );
        assert_eq!(
            state.render("55.00", "%", Tz::UTC),
            "\tHumidity\t55.00% (since 2024-03-01 12:30:00 UTC)\n"
        );
    }

    #[test]
    fn reset_zeroes_value_and_moves_since() {
        let since = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut state = MeasurementState::new("Altitude", since);
        state.update(120);
        assert_eq!(state.value(), 120);

        let before = Utc::now();
        state.reset();

        assert_eq!(state.value(), 0);
        assert!(state.since() >= before);
    }
}
