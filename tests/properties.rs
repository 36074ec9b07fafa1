use chrono::{DateTime, Utc};
use epochal::{Duration, Instant, TimeFields};
use proptest::prelude::*;

// Roughly years 1560..2380, across several century leap rules.
const SPAN: i64 = 13_000_000_000_000;

proptest! {
    #[test]
    fn add_then_sub_is_identity(t in any::<i64>(), d in -1e15f64..1e15) {
        let t = Instant::from_epoch_millis(t);
        let d = Duration::milliseconds(d);
        prop_assert!((t + d - d).equal(t));
    }

    #[test]
    fn exactly_one_ordering_holds(a in any::<i64>(), b in any::<i64>()) {
        let (a, b) = (Instant::from_epoch_millis(a), Instant::from_epoch_millis(b));
        let holds = [a.before(b), a.equal(b), a.after(b)];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        prop_assert_eq!(a.before_or_equal(b), a.before(b) || a.equal(b));
        prop_assert_eq!(a.after_or_equal(b), a.after(b) || a.equal(b));
    }

    #[test]
    fn unix_round_trips(s in -9_000_000_000_000i64..9_000_000_000_000) {
        prop_assert_eq!(Instant::from_unix(s as f64).unix(), s);
    }

    #[test]
    fn unix_is_monotonic(ms in -SPAN..SPAN) {
        let t = Instant::from_epoch_millis(ms);
        let next = Instant::from_epoch_millis(ms + 1);
        prop_assert!(t.unix() <= next.unix());
        prop_assert_eq!(t.unix() * 1_000 + i64::from(t.millisecond()), ms);
    }

    #[test]
    fn duration_addition_commutes_and_associates(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000,
    ) {
        let (a, b, c) = (
            Duration::milliseconds(a as f64),
            Duration::milliseconds(b as f64),
            Duration::milliseconds(c as f64),
        );
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn fields_reconstruct_the_instant(ms in -SPAN..SPAN) {
        let t = Instant::from_epoch_millis(ms);
        let rebuilt = Instant::from_fields(
            TimeFields::new()
                .year(i64::from(t.year()))
                .month(i64::from(t.month()))
                .day(i64::from(t.day()))
                .hour(i64::from(t.hour()))
                .minute(i64::from(t.minute()))
                .second(i64::from(t.second()))
                .millisecond(i64::from(t.millisecond())),
        );
        prop_assert_eq!(rebuilt, t);
    }

    #[test]
    fn display_round_trips(ms in -SPAN..SPAN) {
        let t = Instant::from_epoch_millis(ms);
        prop_assert_eq!(t.to_string().parse::<Instant>().unwrap(), t);
    }

    #[test]
    fn display_round_trips_across_calendar_range(
        ms in DateTime::<Utc>::MIN_UTC.timestamp_millis()..=DateTime::<Utc>::MAX_UTC.timestamp_millis()
    ) {
        let t = Instant::from_epoch_millis(ms);
        let text = t.to_string();
        prop_assert_eq!(Instant::from_iso_string(&text), Ok(t), "{}", text);
    }

    #[test]
    fn week_is_in_range(ms in -SPAN..SPAN) {
        let week = Instant::from_epoch_millis(ms).week();
        prop_assert!((1..=53).contains(&week));
    }
}
