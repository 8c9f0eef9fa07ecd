//! Performance benchmarks for the timesheet payroll engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Clock-time duration: < 1μs mean
//! - Hourly rate derivation: < 10μs mean
//! - Full shift derivation: < 50μs mean
//! - Month aggregation over 31 records: < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use timesheet_engine::calculation::{
    calculate_duration, derive_hourly_rate, derive_shift, month_pay_summary, summarize_week,
};
use timesheet_engine::config::{EngineSettings, load_holidays};
use timesheet_engine::models::{HolidaySet, ShiftRecord};

/// Loads the shipped holiday calendars, as the application would at startup.
fn load_calendar() -> HolidaySet {
    load_holidays("./config/holidays").expect("Failed to load holiday calendars")
}

/// Derives one weekday record per working day of March 2025, plus one
/// overtime evening, mirroring a realistic filled month.
fn filled_month(settings: &EngineSettings, holidays: &HolidaySet) -> Vec<ShiftRecord> {
    let mut records = Vec::new();
    let mut day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

    while day <= last {
        if timesheet_engine::calculation::is_working_day(day, holidays) {
            let end = if records.len() == 7 { "20:00" } else { "18:00" };
            records.push(
                derive_shift(day, Some("09:00"), Some(end), "", settings, holidays)
                    .expect("Failed to derive shift"),
            );
        }
        day = day.succ_opt().unwrap();
    }
    records
}

/// Benchmark: duration from a pair of clock times.
///
/// Target: < 1μs mean
fn bench_duration(c: &mut Criterion) {
    c.bench_function("duration_same_day", |b| {
        b.iter(|| calculate_duration(black_box(Some("09:00")), black_box(Some("18:00"))))
    });
    c.bench_function("duration_midnight_crossing", |b| {
        b.iter(|| calculate_duration(black_box(Some("22:00")), black_box(Some("06:00"))))
    });
}

/// Benchmark: hourly rate derivation (counts the month's working days).
///
/// Target: < 10μs mean
fn bench_hourly_rate(c: &mut Criterion) {
    let holidays = load_calendar();
    let salary = Decimal::new(906105, 1);

    c.bench_function("hourly_rate", |b| {
        b.iter(|| derive_hourly_rate(black_box(2025), black_box(3), &holidays, black_box(salary)))
    });
}

/// Benchmark: full shift derivation for a single day.
///
/// Target: < 50μs mean
fn bench_derive_shift(c: &mut Criterion) {
    let holidays = load_calendar();
    let settings = EngineSettings::default();
    let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();

    c.bench_function("derive_shift_weekday", |b| {
        b.iter(|| {
            derive_shift(
                black_box(monday),
                black_box(Some("09:00")),
                black_box(Some("19:30")),
                "",
                &settings,
                &holidays,
            )
        })
    });
    c.bench_function("derive_shift_weekend", |b| {
        b.iter(|| {
            derive_shift(
                black_box(saturday),
                black_box(Some("10:00")),
                black_box(Some("14:00")),
                "",
                &settings,
                &holidays,
            )
        })
    });
}

/// Benchmark: weekly and semimonthly aggregation over a filled month.
///
/// Target: < 100μs mean
fn bench_aggregation(c: &mut Criterion) {
    let holidays = load_calendar();
    let settings = EngineSettings::default();
    let records = filled_month(&settings, &holidays);

    c.bench_function("month_pay_summary", |b| {
        b.iter(|| month_pay_summary(black_box(2025), black_box(3), &records))
    });
    c.bench_function("summarize_week", |b| {
        b.iter(|| summarize_week(black_box(&records[..5]), black_box(540)))
    });
}

/// Benchmark: deriving a whole month of shifts, to understand scaling.
fn bench_scaling(c: &mut Criterion) {
    let holidays = load_calendar();
    let settings = EngineSettings::default();
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();

    let mut group = c.benchmark_group("scaling");

    for day_count in [1usize, 5, 21, 62] {
        group.throughput(Throughput::Elements(day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), &day_count, |b, &n| {
            b.iter(|| {
                let mut records = Vec::with_capacity(n);
                let mut day = start;
                for _ in 0..n {
                    records.push(
                        derive_shift(day, Some("09:00"), Some("18:00"), "", &settings, &holidays)
                            .unwrap(),
                    );
                    day = day.succ_opt().unwrap();
                }
                black_box(records)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_duration,
    bench_hourly_rate,
    bench_derive_shift,
    bench_aggregation,
    bench_scaling,
);
criterion_main!(benches);
