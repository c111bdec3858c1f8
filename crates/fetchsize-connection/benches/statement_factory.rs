//! Overhead of the fetch-size decorator over direct statement creation.
//!
//! Run with: cargo bench --bench statement_factory --features test-utils

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fetchsize_connection::mock::MockConnection;
use fetchsize_connection::{Connection, FetchSize, FetchSizeConnection, Statement};

const SQL: &str = "SELECT ID, AMOUNT FROM ORDERS WHERE CUSTOMER_ID = ?";

fn bench_prepare_statement(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_statement");

    let direct = MockConnection::new();
    group.bench_function("direct", |b| {
        b.iter(|| {
            let mut stmt = direct.prepare_statement(black_box(SQL)).unwrap();
            stmt.set_fetch_size(FetchSize::new(1000)).unwrap();
            direct.clear_calls();
            black_box(stmt)
        });
    });

    let wrapped = FetchSizeConnection::new(MockConnection::new(), FetchSize::new(1000));
    group.bench_function("wrapped", |b| {
        b.iter(|| {
            let stmt = wrapped.prepare_statement(black_box(SQL)).unwrap();
            wrapped.get_ref().clear_calls();
            black_box(stmt)
        });
    });

    group.finish();
}

fn bench_session_forwarding(c: &mut Criterion) {
    let wrapped = FetchSizeConnection::new(MockConnection::new(), FetchSize::new(1000));
    c.bench_function("auto_commit_forwarded", |b| {
        b.iter(|| {
            let value = wrapped.auto_commit().unwrap();
            wrapped.get_ref().clear_calls();
            black_box(value)
        });
    });
}

criterion_group!(benches, bench_prepare_statement, bench_session_forwarding);
criterion_main!(benches);
