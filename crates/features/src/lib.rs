#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tsfeat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod naming;

mod leaf;
pub use leaf::LeafFeature;

mod comparison;
pub use comparison::GreaterOrEqualFeature;

mod lag;
pub use lag::LagFeature;

mod returns;
pub use returns::ReturnFeature;

mod average;
pub use average::{SimpleAverageFeature, WeightedAverageFeature};

mod volatility;
pub use volatility::VolatilityFeature;
