//! Miscellaneous components used in the library.

mod framework_stats;
pub use framework_stats::FrameworkStats;

mod label;
pub use label::Label;
pub use label::LabelSet;
pub use label::LabelType;
