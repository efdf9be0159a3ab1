mod grid_handler;
mod sim_handler;

pub use grid_handler::{derive_house_grid, project_robot};
pub use sim_handler::SimulationHandler;
