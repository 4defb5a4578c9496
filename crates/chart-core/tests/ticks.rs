// File: crates/chart-core/tests/ticks.rs
// Purpose: Nice-number tick layout and tick label formatting.

use chart_core::grid::{decimals_for, format_tick, nice_step, ticks};

#[test]
fn headroom_range_gets_quarter_steps() {
    let t = ticks(0.0, 1.5, 6);
    assert_eq!(t.len(), 7);
    assert_eq!(t.first().copied(), Some(0.0));
    assert!((t.last().copied().unwrap() - 1.5).abs() < 1e-12);
    assert_eq!(decimals_for(nice_step(1.5, 6)), 2);
}

#[test]
fn integer_steps() {
    assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(nice_step(1000.0, 8), 200.0);
    assert_eq!(decimals_for(200.0), 0);
}

#[test]
fn ticks_start_inside_the_range() {
    let t = ticks(-7.0, 107.0, 8);
    assert_eq!(t.first().copied(), Some(0.0));
    assert_eq!(t.last().copied(), Some(100.0));
}

#[test]
fn degenerate_ranges() {
    assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(ticks(f64::NAN, 1.0, 5).is_empty());
    assert_eq!(nice_step(0.0, 5), 1.0);
}

#[test]
fn tick_labels() {
    assert_eq!(format_tick(0.30000000000000004, 1), "0.3");
    assert_eq!(format_tick(-0.0, 2), "0.00");
    assert_eq!(format_tick(1500.0, 0), "1500");
    assert_eq!(format_tick(-2.5, 1), "-2.5");
}
