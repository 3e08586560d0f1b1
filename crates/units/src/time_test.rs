mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, SECONDS_PER_DAY, SECONDS_PER_YEAR};

    #[test]
    fn test_time_conversions() {
        let year = Time::from_years(1.0);
        assert_relative_eq!(year.to_seconds(), SECONDS_PER_YEAR);
        assert_relative_eq!(year.to_days(), 365.25);

        let day = Time::from_days(1.0);
        assert_relative_eq!(day.to_seconds(), SECONDS_PER_DAY);
        assert_relative_eq!(day.to_hours(), 24.0);

        assert_relative_eq!(Time::from_minutes(6.0).to_seconds(), 360.0);
        assert_relative_eq!(Time::from_hours(2.0).to_seconds(), 7200.0);
        assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR * 10.0).to_years(), 10.0);
    }

    #[test]
    fn test_time_arithmetic() {
        let a = Time::from_days(10.0);
        let b = Time::from_days(5.0);

        assert_relative_eq!((a + b).to_days(), 15.0);
        assert_relative_eq!((a - b).to_days(), 5.0);
        assert_relative_eq!((a * 2.0).to_days(), 20.0);
        assert_relative_eq!((3.0 * b).to_days(), 15.0);
        assert_relative_eq!((a / 4.0).to_days(), 2.5);
        assert_relative_eq!(a / b, 2.0);
    }

    #[test]
    fn test_steps_per_julian_year() {
        // 6-minute steps: the interactive default
        let steps = Time::from_years(1.0) / Time::from_minutes(6.0);
        assert_relative_eq!(steps, 87_660.0);
    }
}
