use super::*;
use time::macros::date;

fn totals(amounts: &[f64]) -> Vec<DailyTotal> {
    let mut day = date!(2024 - 03 - 01);
    amounts
        .iter()
        .map(|&amount| {
            let total = DailyTotal { day, amount };
            day = day.next_day().unwrap();
            total
        })
        .collect()
}

#[test]
fn empty_totals_produce_no_bars() {
    assert!(layout_bars(&[], 100.0, 50.0).is_empty());
}

#[test]
fn tallest_bar_fills_height() {
    let bars = layout_bars(&totals(&[5.0, 10.0, 0.0]), 300.0, 100.0);
    assert_eq!(bars.len(), 3);
    assert!((bars[1].height - 100.0).abs() < 1e-9);
    assert!((bars[1].y).abs() < 1e-9);
    assert!((bars[0].height - 50.0).abs() < 1e-9);
    assert!(bars[2].height.abs() < 1e-9);
}

#[test]
fn bars_are_evenly_spaced() {
    let bars = layout_bars(&totals(&[1.0, 1.0, 1.0, 1.0]), 400.0, 10.0);
    assert!((bars[0].x).abs() < 1e-9);
    assert!((bars[3].x - 300.0).abs() < 1e-9);
    assert!((bars[0].width - (100.0 - BAR_GAP)).abs() < 1e-9);
}

#[test]
fn all_zero_days_stay_flat() {
    let bars = layout_bars(&totals(&[0.0, 0.0]), 100.0, 40.0);
    assert!(bars.iter().all(|b| b.height.abs() < f64::EPSILON && (b.y - 40.0).abs() < f64::EPSILON));
}

#[test]
fn bar_label_shows_day_and_amount() {
    let bars = layout_bars(&totals(&[12.5]), 100.0, 40.0);
    assert_eq!(bars[0].label, "2024-03-01: $12.50");
}
