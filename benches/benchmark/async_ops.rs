use crate::common::{configure_criterion, UserData};
use criterion::{criterion_group, Criterion};
use outcome_rail::prelude_async::*;
use tokio::runtime::Runtime;

async fn fetch_user(id: u64) -> Outcome<UserData> {
    Outcome::valid(UserData::new(id))
}

pub fn bench_async_pipeline_overhead(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("async/pipeline");

    group.bench_function("success_path", |b| {
        b.iter(|| {
            rt.block_on(async {
                let _ = async_ensure::that(7_u64, true, "id required")
                    .bind_valid_async(fetch_user)
                    .await
                    .map(|user| user.username);
            })
        })
    });

    group.bench_function("error_path", |b| {
        b.iter(|| {
            rt.block_on(async {
                let _ = async_ensure::that(0_u64, false, "id required")
                    .bind_valid_async(fetch_user)
                    .await
                    .map(|user| user.username);
            })
        })
    });

    group.finish();
}

pub fn bench_lift(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("async/lift_map_valid", |b| {
        b.iter(|| rt.block_on(fetch_user(1).map_valid(|user| user.email.len())))
    });
}

criterion_group! {
    name = async_ops_benches;
    config = configure_criterion();
    targets =
        bench_async_pipeline_overhead,
        bench_lift,
}
