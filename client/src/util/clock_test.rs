use super::*;

#[test]
fn clock_label_pads_to_two_digits() {
    assert_eq!(clock_label(9, 5), "09:05");
    assert_eq!(clock_label(23, 59), "23:59");
}

#[test]
fn clock_label_wraps_out_of_range_values() {
    assert_eq!(clock_label(24, 60), "00:00");
}

#[test]
fn utc_hours_minutes_epoch_is_midnight() {
    assert_eq!(utc_hours_minutes(0.0), (0, 0));
}

#[test]
fn utc_hours_minutes_reads_time_of_day() {
    // 2024-01-01T13:37:42Z
    assert_eq!(utc_hours_minutes(1_704_116_262_000.0), (13, 37));
}

#[test]
fn utc_hours_minutes_clamps_negative() {
    assert_eq!(utc_hours_minutes(-1.0), (0, 0));
}

#[test]
fn local_clock_label_on_server_uses_utc() {
    assert_eq!(local_clock_label(1_704_116_262_000.0), "13:37");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
