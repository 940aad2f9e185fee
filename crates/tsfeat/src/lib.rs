//! # tsfeat
//!
//! Composable, self-naming time-series features over polars DataFrames.
//!
//! This crate provides a unified interface to the tsfeat workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Column names and window shapes
//! - `math`: Window kernels, rolling expressions and computation descriptors
//! - `traits`: The `Feature` contract
//! - `features`: Leaf, comparison, lag, return, average and volatility features
//! - `utils`: Application drivers
//!
//! ## Example
//!
//! ```rust,ignore
//! use tsfeat::features::{LagFeature, LeafFeature, ReturnFeature};
//! use tsfeat::traits::Feature;
//!
//! let ret = ReturnFeature::new(LagFeature::new(LeafFeature::new("price"), 1));
//! assert_eq!(ret.column_name(), "price_1b_lag_1b_return");
//!
//! let out = tsfeat::utils::materialize(&df, &ret)?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use tsfeat_primitives as primitives;
#[cfg(feature = "math")]
#[doc(inline)]
pub use tsfeat_math as math;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use tsfeat_traits as traits;
#[cfg(feature = "features")]
#[doc(inline)]
pub use tsfeat_features as features;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use tsfeat_utils as utils;
