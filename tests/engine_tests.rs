use rpunchcalc::core::extract::{extract_rows, normalize_strict};
use rpunchcalc::core::logic::Core;
use rpunchcalc::core::sessions::{SessionDefaults, SessionList};
use rpunchcalc::core::time_token::{
    MINUTES_PER_DAY, format_token, parse_to_minutes, to_twelve_hour, to_twenty_four_hour,
};
use rpunchcalc::models::clock_format::ClockFormat;
use rpunchcalc::models::quota::Quota;
use rpunchcalc::models::session::{PunchOut, Session};
use rpunchcalc::utils::format_duration;

fn fixed(id: u64, i: &str, o: &str) -> Session {
    Session::new(id, i, PunchOut::Fixed(o.to_string()))
}

#[test]
fn test_round_trip_law_both_conventions() {
    for m in 0..MINUTES_PER_DAY {
        for clock in [ClockFormat::TwelveHour, ClockFormat::TwentyFourHour] {
            assert_eq!(parse_to_minutes(&format_token(m, clock)), m);
        }
    }
}

#[test]
fn test_canonical_twenty_four_hour_form() {
    for t in ["12:00 AM", "12:59 PM", "07:05 PM", "00:00", "13:30", "23:59"] {
        assert_eq!(to_twenty_four_hour(&to_twelve_hour(t)), to_twenty_four_hour(t));
    }
}

#[test]
fn test_duration_formatting_contract() {
    assert_eq!(format_duration(0), "0h 0m");
    assert_eq!(format_duration(45), "45m");
    assert_eq!(format_duration(120), "2h");
    assert_eq!(format_duration(125), "2h 5m");
}

#[test]
fn test_nine_hour_day_against_eight_hour_quota() {
    let sessions = vec![fixed(1, "09:00 AM", "06:00 PM")];
    let s = Core::build_daily_summary(&sessions, &Quota::new(8.0), 0);

    assert_eq!(s.worked(), 540);
    assert_eq!(s.break_minutes(), 0);
    assert_eq!(s.remaining, -60);
    assert_eq!(s.total_span, 540);
    assert_eq!(s.remaining_label(), "Overtime");
}

#[test]
fn test_two_sessions_with_lunch() {
    let sessions = vec![
        fixed(1, "09:00 AM", "12:00 PM"),
        fixed(2, "01:00 PM", "06:00 PM"),
    ];
    let s = Core::build_daily_summary(&sessions, &Quota::new(8.0), 0);

    assert_eq!(s.worked(), 480);
    assert_eq!(s.break_minutes(), 60);
    assert_eq!(s.remaining, 0);
    assert_eq!(s.total_span, 540);
    assert_eq!(s.remaining_label(), "Remaining to work");
}

#[test]
fn test_totals_never_negative_for_messy_input() {
    let sessions = vec![
        fixed(1, "05:00 PM", "08:00 AM"),
        fixed(2, "10:00 AM", "02:00 PM"),
        fixed(3, "09:00 AM", "11:00 AM"),
        Session::new(4, "01:00 PM", PunchOut::Open),
    ];

    for now in [0, 8 * 60, 12 * 60, MINUTES_PER_DAY - 1] {
        let s = Core::build_daily_summary(&sessions, &Quota::default(), now);
        assert!(s.worked() >= 0);
        assert!(s.break_minutes() >= 0);
        assert!(s.total_span >= 0);
        assert!(
            s.timeline
                .intervals
                .windows(2)
                .all(|w| w[0].in_minutes <= w[1].in_minutes)
        );
    }
}

#[test]
fn test_bulk_scenario_extracts_two_rows() {
    let rows = extract_rows("9:00 AM, 5:00 PM\n09:00,17:00\nnotaline");
    assert_eq!(rows.len(), 2);
    for r in &rows {
        assert_eq!(r.in_time, "09:00 AM");
        assert_eq!(r.out_time, "05:00 PM");
    }
}

#[test]
fn test_compact_strict_forms() {
    assert_eq!(normalize_strict("1500").as_deref(), Some("03:00 PM"));
    assert_eq!(normalize_strict("930").as_deref(), Some("09:30 AM"));
    assert_eq!(normalize_strict("2500"), None);
}

#[test]
fn test_import_then_compute() {
    let mut list = SessionList::new(SessionDefaults::default());
    let rows = extract_rows("08:00\t12:00\n12:30 PM 4:30 PM\n");
    list.replace_all(&rows).unwrap();

    let s = Core::build_daily_summary(list.sessions(), &Quota::new(8.0), 0);
    assert_eq!(s.worked(), 480);
    assert_eq!(s.break_minutes(), 30);
    assert_eq!(s.total_span, 510);
}

#[test]
fn test_removing_only_interval_leaves_one() {
    let mut list = SessionList::new(SessionDefaults::default());
    let id = list.sessions()[0].id;
    list.remove(id).unwrap();
    assert_eq!(list.len(), 1);
}
