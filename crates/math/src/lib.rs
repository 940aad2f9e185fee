#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tsfeat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod window;
pub use window::window_weights;

mod rolling;
pub use rolling::{rolling_mean, rolling_population_std, rolling_sum, shift};

mod computation;
pub use computation::Computation;
