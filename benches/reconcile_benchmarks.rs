//! Performance benchmarks for the payroll coverage engine.
//!
//! Measures reconciliation across roster sizes with a year of monthly
//! paystubs per employee, plus month-range expansion on its own.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_coverage::models::{Employee, PaystubRecord, StubPeriod};
use payroll_coverage::reconciliation::{check_coverage, expand_months, reconcile};

/// Creates a roster of `count` employees.
fn create_roster(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee::new(format!("EMP{:05}", i), format!("Employee {}", i)))
        .collect()
}

/// Creates one paystub per month of 2024 for every employee, leaving every
/// tenth employee without a December stub.
fn create_paystubs(employees: &[Employee]) -> Vec<PaystubRecord> {
    let mut paystubs = Vec::with_capacity(employees.len() * 12);
    for (i, employee) in employees.iter().enumerate() {
        let last_month = if i % 10 == 0 { 11 } else { 12 };
        for month in 1..=last_month {
            paystubs.push(PaystubRecord {
                emp_id: Some(employee.employee_id.clone()),
                pay_period: StubPeriod {
                    start: NaiveDate::from_ymd_opt(2024, month, 1),
                    end: NaiveDate::from_ymd_opt(2024, month, 28),
                },
                ..PaystubRecord::default()
            });
        }
    }
    paystubs
}

fn bench_expand_months(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2000, 1, 15).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap();

    c.bench_function("expand_months_25_years", |b| {
        b.iter(|| expand_months(black_box(start), black_box(end)))
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_full_year");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let months = expand_months(start, end);

    for size in [10usize, 100, 1000] {
        let employees = create_roster(size);
        let paystubs = create_paystubs(&employees);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| reconcile(black_box(&months), black_box(&employees), black_box(&paystubs)))
        });
    }

    group.finish();
}

fn bench_check_coverage(c: &mut Criterion) {
    let employees = create_roster(1000);
    let paystubs = create_paystubs(&employees);
    let start = NaiveDate::from_ymd_opt(2024, 6, 1);
    let end = NaiveDate::from_ymd_opt(2024, 12, 31);

    c.bench_function("check_coverage_1000_employees_7_months", |b| {
        b.iter(|| check_coverage(black_box(start), black_box(end), &employees, &paystubs))
    });
}

criterion_group!(benches, bench_expand_months, bench_reconcile, bench_check_coverage);
criterion_main!(benches);
