//! Metrics for connection handles
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! application installs a recorder. Every metric carries the datastore
//! family as its `family` label.

pub mod counters;
pub mod histograms;
pub mod labels;
