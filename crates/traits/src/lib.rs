#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tsfeat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::FeatureError;

mod statement;
pub use statement::Statement;

mod feature;
pub use feature::{Feature, FeatureRef};

pub use tsfeat_math::Computation;
pub use tsfeat_primitives::{ColumnName, WindowType};
