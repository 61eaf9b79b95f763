use stopwatch_board::format::{format_duration, parse_duration, HourScale};

#[test]
fn one_hour_one_minute_one_second() {
    assert_eq!(format_duration(3_661_000, HourScale::Plain), "1:01:01");
}

#[test]
fn sub_second_remainder_is_dropped() {
    assert_eq!(format_duration(0, HourScale::Plain), "0:00:00");
    assert_eq!(format_duration(59_999, HourScale::Plain), "0:00:59");
    assert_eq!(format_duration(36_000_000, HourScale::Plain), "10:00:00");
}

#[test]
fn plain_format_parses_back_to_whole_seconds() {
    let samples = [
        0u64,
        999,
        1_000,
        61_500,
        3_599_999,
        3_661_000,
        86_400_123,
        1_234_567_890,
        3_600_000 * 2_000_000 + 59_000,
    ];
    for ms in samples {
        let text = format_duration(ms, HourScale::Plain);
        assert_eq!(parse_duration(&text), Some(ms / 1000 * 1000), "{text}");
    }
}

#[test]
fn abbreviated_keeps_small_values_unchanged() {
    assert_eq!(format_duration(3_661_000, HourScale::Abbreviated), "1:01:01");
}
