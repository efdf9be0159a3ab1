mod performance;
mod snapshots;

pub use performance::performance_now;
pub use snapshots::FlatRobotCache;
