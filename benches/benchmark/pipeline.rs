use crate::common::{configure_criterion, UserData};
use criterion::{criterion_group, Criterion};
use outcome_rail::{ensure, OptionExt, Outcome};
use std::hint::black_box;

fn find_user(pk: &str) -> Outcome<Option<UserData>> {
    Outcome::valid(pk.parse::<u64>().ok().map(UserData::new))
}

fn load_user(pk: &str) -> Outcome<UserData> {
    ensure::not_blank(pk, "pk empty")
        .bind(find_user)
        .bind(|row| row.null_to_failed("not found"))
        .bind(|user| ensure::that_by(user, |u| !u.email.is_empty(), "email required"))
}

pub fn bench_bind_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/bind_chain");

    group.bench_function("success_path", |b| b.iter(|| black_box(load_user(black_box("42")))));
    group.bench_function("not_found_path", |b| b.iter(|| black_box(load_user(black_box("x")))));
    group.bench_function("short_circuit", |b| b.iter(|| black_box(load_user(black_box("")))));

    group.finish();
}

pub fn bench_try_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/try_map");

    group.bench_function("ok", |b| {
        b.iter(|| black_box(Outcome::valid(black_box("8080")).try_map(|s| s.parse::<u16>())))
    });
    group.bench_function("fault_capture", |b| {
        b.iter(|| black_box(Outcome::valid(black_box("port")).try_map(|s| s.parse::<u16>())))
    });

    group.finish();
}

pub fn bench_collect(c: &mut Criterion) {
    c.bench_function("pipeline/collect_with_failures", |b| {
        b.iter(|| {
            let collected: Outcome<Vec<u64>> = (0..100_u64)
                .map(|i| {
                    ensure::that(i, i % 10 != 0, "multiple of ten").map(|i| UserData::new(i).user_id)
                })
                .collect();
            black_box(collected)
        })
    });
}

criterion_group! {
    name = pipeline_benches;
    config = configure_criterion();
    targets =
        bench_bind_chain,
        bench_try_map,
        bench_collect,
}
