pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod robot;
pub mod snapshot;

pub use coord::Coord;
pub use direction::{parse_moves, Direction};
pub use error::{ModelError, ModelResult};
pub use grid::{HouseGrid, RobotPresence, Tile};
pub use metrics::BenchmarkMetrics;
pub use robot::{Robot, RobotPosition};
pub use snapshot::{HouseEntry, MoveOutcome, SimulationState};
