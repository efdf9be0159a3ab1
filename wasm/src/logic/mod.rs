use tracing::info;

use crate::config::SimulationConfig;
use crate::data::{BenchmarkMetricBuilder, DeliveryUpdater, HouseGridBuilder, SimulationData};
use crate::types::{Coord, HouseGrid, ModelResult, MoveOutcome, RobotPosition, SimulationState};

pub struct SimulationLogic {
    data: SimulationData,
    delivery_updater: DeliveryUpdater,
    grid_builder: HouseGridBuilder,
    benchmark_builder: BenchmarkMetricBuilder,
}

impl SimulationLogic {
    pub fn new(config: SimulationConfig) -> ModelResult<Self> {
        info!(
            robot_count = config.robot_count,
            tick_rate = config.tick_rate,
            "loading delivery run"
        );
        let grid_builder = HouseGridBuilder::with_tile_limit(config.max_grid_tiles);
        Ok(Self {
            data: SimulationData::new(config)?,
            delivery_updater: DeliveryUpdater::new(),
            grid_builder,
            benchmark_builder: BenchmarkMetricBuilder::new(),
        })
    }

    pub fn with_robots(robot_count: usize, moves: &str) -> ModelResult<Self> {
        Self::new(SimulationConfig::new(robot_count, moves))
    }

    /// Applies the next move. `Ok(None)` when the route is finished.
    pub fn step(&mut self) -> ModelResult<Option<MoveOutcome>> {
        let (outcome, duration) = self
            .benchmark_builder
            .measure(|| self.delivery_updater.apply_next(&mut self.data));
        if duration > 0.0 {
            self.data.metrics_mut().update_step(duration);
        }
        outcome
    }

    /// Applies up to `count` moves and returns how many were applied.
    pub fn step_n(&mut self, count: usize) -> ModelResult<usize> {
        let mut applied = 0;
        while applied < count && self.step()?.is_some() {
            applied += 1;
        }
        Ok(applied)
    }

    pub fn run_to_end(&mut self) -> ModelResult<usize> {
        self.step_n(self.data.remaining_moves())
    }

    /// Frame hook: steps only while running; stops at the end of the route or on a failed move.
    pub fn update(&mut self) -> ModelResult<Option<MoveOutcome>> {
        if !self.data.running() {
            return Ok(None);
        }
        let outcome = self.step();
        if outcome.is_err() || self.data.is_finished() {
            self.data.set_running(false);
        }
        outcome
    }

    pub fn start(&mut self) {
        if !self.data.is_finished() {
            self.data.set_running(true);
        }
    }

    pub fn pause(&mut self) {
        self.data.set_running(false);
    }

    pub fn resume(&mut self) {
        self.start();
    }

    pub fn reset(&mut self) {
        self.data.set_running(false);
        self.data.reset_robots();
    }

    pub fn load_moves(&mut self, moves: &str) -> ModelResult<()> {
        self.data.set_running(false);
        self.data.load_moves(moves)
    }

    pub fn config(&self) -> &SimulationConfig {
        self.data.config()
    }

    pub fn running(&self) -> bool {
        self.data.running()
    }

    pub fn move_index(&self) -> u64 {
        self.data.move_index()
    }

    pub fn move_count(&self) -> usize {
        self.data.move_count()
    }

    pub fn remaining_moves(&self) -> usize {
        self.data.remaining_moves()
    }

    pub fn is_finished(&self) -> bool {
        self.data.is_finished()
    }

    pub fn tick_rate(&self) -> u32 {
        self.data.tick_rate()
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.data.set_tick_rate(tick_rate);
    }

    pub fn robot_count(&self) -> usize {
        self.data.robots().len()
    }

    pub fn robot_positions(&self) -> Vec<RobotPosition> {
        self.data.robots().iter().map(RobotPosition::from).collect()
    }

    pub fn total_presents(&self) -> u64 {
        self.data.total_presents()
    }

    pub fn house_count(&self) -> usize {
        self.data.house_count()
    }

    pub fn presents_at(&self, coord: Coord) -> u32 {
        self.data.presents_at(coord)
    }

    pub fn houses_with_at_least(&self, presents: u32) -> usize {
        self.data.houses_with_at_least(presents)
    }

    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.data.last_move()
    }

    pub fn state(&self) -> SimulationState {
        self.data.build_state()
    }

    /// The current state if anything changed since the last request.
    pub fn request_snapshot(&mut self) -> Option<SimulationState> {
        if !self.data.snapshot_dirty() {
            return None;
        }
        Some(self.data.build_public_snapshot())
    }

    /// Grid for the current state, derived from a copy taken up front.
    pub fn request_grid(&mut self) -> ModelResult<HouseGrid> {
        let state = self.data.build_state();
        let (grid, duration) = self
            .benchmark_builder
            .measure(|| self.grid_builder.build(&state));
        if duration > 0.0 {
            self.data.metrics_mut().update_grid(duration);
        }
        grid
    }

    #[cfg(target_arch = "wasm32")]
    pub fn request_flat_robots(&mut self) -> &[i32] {
        self.data.ensure_flat_robots_ready();
        self.data.flat_robots_slice()
    }

    pub fn last_step_duration(&self) -> f64 {
        self.data.metrics().last_step_duration_ms
    }

    pub fn last_grid_duration(&self) -> f64 {
        self.data.metrics().last_grid_duration_ms
    }

    pub fn destroy(&mut self) {
        self.data.destroy();
    }
}
