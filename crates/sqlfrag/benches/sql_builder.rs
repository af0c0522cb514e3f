use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlfrag::{Arg, FragmentSet, Query};

/// Build a query with `n` filters, each a nested sub-query with one parameter:
/// SELECT * FROM t WHERE col0 = @p0 AND col1 = @p1 ...
fn build_filtered(n: usize) -> Query {
    let mut filters = FragmentSet::with_prefix(" WHERE ", " AND ");
    for i in 0..n {
        let template = format!("col{i} = {{0}}");
        filters.add(Query::build(&template, [i as i64]).unwrap());
    }
    Query::build("SELECT * FROM t{0}", [Arg::from(filters)]).unwrap()
}

/// Nest a query `depth` levels deep, adding one parameter per level.
fn build_nested(depth: usize) -> Query {
    let mut q = Query::build("x = {0}", [0_i64]).unwrap();
    for i in 1..depth {
        q = Query::build("({0} OR y = {1})", vec![Arg::from(q), Arg::from(i as i64)]).unwrap();
    }
    q
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/text");

    for n in [1, 5, 10, 50, 100] {
        let q = build_filtered(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.text()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let q = build_filtered(n);
                black_box(q.text());
            });
        });
    }

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/nesting");

    for depth in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(build_nested(depth).params()));
        });
    }

    group.finish();
}

fn bench_list_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/list_expansion");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let q = Query::build("SELECT * FROM t WHERE id IN ({0})", [Arg::from(values)])
                    .unwrap();
                black_box(q.text());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text,
    bench_build_and_render,
    bench_nesting,
    bench_list_expansion
);
criterion_main!(benches);
