// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::analytic::{Black76Call, Black76Put, FuturesOption};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_black76_pricing);
criterion_main!(benches);

pub fn criterion_black76_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Black 76 futures option pricing");

    group.bench_function("call value and delta", |b| {
        b.iter(|| price_call(black_box((100.0, 110.0, 0.2, 0.97))))
    });
    group.bench_function("put value and delta", |b| {
        b.iter(|| price_put(black_box((100.0, 110.0, 0.2, 0.97))))
    });

    group.finish()
}

fn price_call((f, x, sd, df): (f64, f64, f64, f64)) {
    let call = Black76Call::new(f, x, sd, df);
    let value = call.value();
    let delta = call.delta();
    assert!(value.is_finite() && delta.is_finite());
}

fn price_put((f, x, sd, df): (f64, f64, f64, f64)) {
    let put = Black76Put::new(f, x, sd, df);
    let value = put.value();
    let delta = put.delta();
    assert!(value.is_finite() && delta.is_finite());
}
