//! Example: Building a Feature Graph over Synthetic Market Data
//!
//! This example demonstrates how tsfeat features compose:
//! - Each feature derives its column name from the features it wraps
//! - `apply` computes one column and expects its dependencies to exist
//! - `materialize` walks the graph and fills in missing dependencies
//!
//! Run with `RUST_LOG=debug` to see each column as it is materialized.

use polars::prelude::*;
use rand::Rng;
use tracing_subscriber::EnvFilter;
use tsfeat::{
    features::{
        GreaterOrEqualFeature, LagFeature, LeafFeature, ReturnFeature, SimpleAverageFeature,
        VolatilityFeature, WeightedAverageFeature,
    },
    primitives::WindowType,
    traits::{Feature, FeatureError, FeatureRef},
    utils::{apply_features, materialize_all, source_columns},
};

const N_DAYS: usize = 120;

fn synthetic_market() -> PolarsResult<DataFrame> {
    let mut rng = rand::thread_rng();
    let mut price = 100.0;
    let mut close = Vec::with_capacity(N_DAYS);
    let mut volume = Vec::with_capacity(N_DAYS);

    for _ in 0..N_DAYS {
        price *= 1.0 + rng.r#gen::<f64>() * 0.04 - 0.02;
        close.push(price);
        volume.push(rng.gen_range(1_000.0..10_000.0));
    }

    df! { "close" => close, "volume" => volume }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    println!("=== tsfeat Feature Graph ===\n");

    let df = synthetic_market()?;

    // =========================================================================
    // BUILD THE GRAPH
    // =========================================================================

    let close = FeatureRef::new(LeafFeature::new("close"));
    let volume = FeatureRef::new(LeafFeature::new("volume"));

    let daily_return = FeatureRef::new(ReturnFeature::new(close.clone()));
    let vol_20 = VolatilityFeature::new(daily_return.clone(), 20);
    let vwap_10 = WeightedAverageFeature::new(close.clone(), volume, 10)?;
    let sma_20 = SimpleAverageFeature::new(close.clone(), 20)?.with_win_type(WindowType::Triang);
    let above_vwap = GreaterOrEqualFeature::new(close.clone(), vwap_10.clone());
    let next_return = ReturnFeature::new(close.clone()).with_duration(-5);
    let prev_close = LagFeature::new(close, 1);

    let graph: Vec<&dyn Feature> =
        vec![&vol_20, &vwap_10, &sma_20, &above_vwap, &next_return, &prev_close];

    println!("Derived columns:");
    for feature in &graph {
        println!("  {:<45} <- {}", feature.column_name(), describe(*feature));
    }
    println!("\nSource columns: {:?}\n", source_columns(&above_vwap));

    // =========================================================================
    // APPLY OUT OF ORDER
    // =========================================================================

    match apply_features(&df, &[&vol_20]) {
        Err(FeatureError::MissingDependencyColumn(column)) => {
            println!("Applying volatility first fails: `{column}` is not materialized yet\n");
        }
        other => println!("Unexpected result: {other:?}\n"),
    }

    // =========================================================================
    // MATERIALIZE THE WHOLE GRAPH
    // =========================================================================

    let out = materialize_all(&df, &graph)?;
    println!("Materialized {} columns over {} rows:\n", out.width(), out.height());
    println!("{}", out.tail(Some(5)));

    Ok(())
}

fn describe(feature: &dyn Feature) -> String {
    feature.statement().computation().map_or_else(|| "source".to_string(), ToString::to_string)
}
