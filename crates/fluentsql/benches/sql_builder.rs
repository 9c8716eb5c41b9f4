use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluentsql::{QueryBuilder, WhereBuilder};

/// A select with `n` AND leaves, `n` OR leaves and one nested group per ten leaves.
fn build_query(n: usize) -> QueryBuilder {
    let mut qb = QueryBuilder::new("t");
    qb.add_select((0..n).map(|i| format!("col{i}")));
    for i in 0..n {
        qb.and_eq(format!("col{i}"), i as i64)
            .or_where(format!("alt{i}"), ">", i as i64);
        if i % 10 == 0 {
            qb.and_group(|g| {
                g.and_in("id", vec![1_i64, 2, 3]).or_is_null("deleted_at");
            });
        }
    }
    qb.order_by_desc("col0").limit(20);
    qb
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_query(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_query(n).to_sql()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut qb = QueryBuilder::new("t");
                qb.and_in("id", values.clone());
                black_box(qb.to_sql())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_sql, bench_build_and_render, bench_in_list);
criterion_main!(benches);
