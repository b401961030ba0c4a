//! Performance benchmarks for the salary engine.
//!
//! Covers the pure calculation pipeline, the `/calculate` endpoint and the
//! settlement path over the in-memory store.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;
use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_engine::api::{AppState, create_router};
use salary_engine::calculation::calculate_salary;
use salary_engine::config::ConfigLoader;
use salary_engine::models::{AppliedLeaveSet, SalaryMonth};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::in_memory(&config)
}

/// Every weekday in January 2025, Friday/Monday pairs included.
const JANUARY_WEEKDAYS: [&str; 23] = [
    "2025-01-01", "2025-01-02", "2025-01-03", "2025-01-06", "2025-01-07", "2025-01-08",
    "2025-01-09", "2025-01-10", "2025-01-13", "2025-01-14", "2025-01-15", "2025-01-16",
    "2025-01-17", "2025-01-20", "2025-01-21", "2025-01-22", "2025-01-23", "2025-01-24",
    "2025-01-27", "2025-01-28", "2025-01-29", "2025-01-30", "2025-01-31",
];

/// Picks every other weekday so the set contains gaps for the sandwich scan.
fn leave_dates(count: usize) -> Vec<&'static str> {
    JANUARY_WEEKDAYS.iter().step_by(2).take(count).copied().collect()
}

/// Benchmark: the pure pipeline for growing leave sets.
fn bench_calculate_salary(c: &mut Criterion) {
    let month: SalaryMonth = "2025-01".parse().unwrap();
    let holidays = ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .public_holidays();
    let base_salary = Decimal::from_str("3100").unwrap();

    let mut group = c.benchmark_group("calculate_salary");
    for count in [0usize, 2, 6, 12] {
        let leave = AppliedLeaveSet::parse(month, leave_dates(count)).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("leave_dates", count), &leave, |b, leave| {
            b.iter(|| calculate_salary(black_box(base_salary), black_box(leave), &holidays))
        });
    }
    group.finish();
}

/// Benchmark: POST /calculate through the router.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "base_salary": "3100",
        "month": "2025-01",
        "leave_dates": ["2025-01-03", "2025-01-06", "2025-01-08"],
    })
    .to_string();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: settling 100 employee-months, then hitting the settled path.
fn bench_settlement(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let body = serde_json::json!({
        "month": "2025-01",
        "leave_dates": ["2025-01-03", "2025-01-06"],
    })
    .to_string();

    let mut group = c.benchmark_group("settlement");
    group.throughput(Throughput::Elements(100));
    group.sample_size(20);

    group.bench_function("already_settled_100", |b| {
        let router = create_router(create_test_state());
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for _ in 0..100 {
                let response = router
                    .clone()
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/employees/emp_001/salaries")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_calculate_salary,
    bench_calculate_endpoint,
    bench_settlement,
);
criterion_main!(benches);
