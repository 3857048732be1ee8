use super::*;

#[test]
fn sixty_fps_for_two_seconds_is_120_frames() {
    assert_eq!(total_frames(), 120);
}

#[test]
fn ease_out_quart_endpoints() {
    assert!((ease_out_quart(0.0)).abs() < 1e-12);
    assert!((ease_out_quart(1.0) - 1.0).abs() < 1e-12);
    assert!(ease_out_quart(0.5) > 0.9);
}

#[test]
fn format_number_inserts_separators() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1_234_567), "1,234,567");
    assert_eq!(format_number(100_000), "100,000");
}

#[test]
fn parse_target_takes_leading_digits() {
    assert_eq!(parse_target("250"), Some(250));
    assert_eq!(parse_target("  42%"), Some(42));
    assert_eq!(parse_target("1,200"), Some(1));
    assert_eq!(parse_target("n/a"), None);
    assert_eq!(parse_target(""), None);
}

#[test]
fn count_up_runs_exactly_total_frames() {
    let mut c = CountUp::new(5000);
    let mut frames = Vec::new();
    while let Some(text) = c.tick() {
        frames.push(text);
    }
    assert_eq!(frames.len(), 120);
    assert_eq!(frames.last().map(String::as_str), Some("5,000+"));
    assert!(c.is_done());
    assert!(c.tick().is_none());
}

#[test]
fn count_up_values_never_decrease() {
    let mut c = CountUp::new(12_000);
    let mut prev = 0_u64;
    for _ in 0..119 {
        let text = c.tick().unwrap_or_default();
        let value: u64 = text.replace(',', "").parse().unwrap();
        assert!(value >= prev);
        prev = value;
    }
}
