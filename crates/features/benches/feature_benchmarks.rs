//! Benchmarks for tsfeat feature application.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use polars::prelude::*;
use rand::Rng;
use tsfeat_features::{
    GreaterOrEqualFeature, LagFeature, LeafFeature, ReturnFeature, SimpleAverageFeature,
    VolatilityFeature, WeightedAverageFeature,
};
use tsfeat_traits::{Feature, WindowType};

fn random_market(n: usize) -> DataFrame {
    let mut rng = rand::thread_rng();
    let mut price = 100.0;
    let close: Vec<f64> = (0..n)
        .map(|_| {
            price *= 1.0 + rng.r#gen::<f64>() * 0.02 - 0.01;
            price
        })
        .collect();
    let volume: Vec<f64> = (0..n).map(|_| rng.gen_range(1_000.0..10_000.0)).collect();

    df! { "close" => close, "volume" => volume }.unwrap()
}

fn bench_return(c: &mut Criterion) {
    let mut group = c.benchmark_group("return");

    for size in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let df = random_market(size);
            let feature = ReturnFeature::new(LeafFeature::new("close"));
            b.iter(|| feature.apply(black_box(&df)).unwrap());
        });
    }

    group.finish();
}

fn bench_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("volatility");

    for window in [None, Some(WindowType::Hann)] {
        let label = window.map_or("flat", |w| w.as_str());
        group.bench_with_input(BenchmarkId::new("window", label), &window, |b, &window| {
            let df = random_market(10000);
            let feature = VolatilityFeature::new(LeafFeature::new("close"), 20);
            let feature = match window {
                Some(w) => feature.with_win_type(w),
                None => feature,
            };
            b.iter(|| feature.apply(black_box(&df)).unwrap());
        });
    }

    group.finish();
}

fn bench_weighted_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_average");

    for duration in [5, 20, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(duration), &duration, |b, &duration| {
            let df = random_market(10000);
            let feature = WeightedAverageFeature::new(
                LeafFeature::new("close"),
                LeafFeature::new("volume"),
                duration,
            )
            .unwrap();
            b.iter(|| feature.apply(black_box(&df)).unwrap());
        });
    }

    group.finish();
}

fn bench_feature_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_chain");
    group.sample_size(50);

    let close = LeafFeature::new("close");
    let lag = LagFeature::new(close.clone(), 1);
    let avg = SimpleAverageFeature::new(close.clone(), 20).unwrap();
    let chain: Vec<Box<dyn Feature>> = vec![
        Box::new(lag.clone()),
        Box::new(ReturnFeature::new(lag)),
        Box::new(avg.clone()),
        Box::new(GreaterOrEqualFeature::new(close, avg)),
    ];

    group.bench_function("fold_10000", |b| {
        let df = random_market(10000);
        b.iter(|| {
            chain.iter().try_fold(df.clone(), |acc, f| f.apply(black_box(&acc))).unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_return,
    bench_volatility,
    bench_weighted_average,
    bench_feature_chain,
);

criterion_main!(benches);
