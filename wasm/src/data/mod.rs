mod benchmark_metric_builder;
mod delivery_updater;
mod grid_builder;

pub use benchmark_metric_builder::BenchmarkMetricBuilder;
pub use delivery_updater::DeliveryUpdater;
pub use grid_builder::HouseGridBuilder;

use std::collections::HashMap;

use tracing::info;

use crate::config::SimulationConfig;
use crate::dependency::FlatRobotCache;
use crate::types::{
    BenchmarkMetrics, Coord, Direction, ModelResult, MoveOutcome, Robot, SimulationState,
};

pub struct SimulationData {
    move_index: u64,
    running: bool,
    tick_rate: u32,
    config: SimulationConfig,
    moves: Vec<Direction>,
    robots: Vec<Robot>,
    houses: Vec<(Coord, u32)>, // First-delivery order
    house_index: HashMap<Coord, usize>,
    last_move: Option<MoveOutcome>,
    snapshot_dirty: bool,
    flat_robots: FlatRobotCache,
    flat_robots_dirty: bool,
    metrics: BenchmarkMetrics,
}

impl SimulationData {
    pub fn new(config: SimulationConfig) -> ModelResult<Self> {
        let moves = config.validate()?;
        let mut data = Self {
            move_index: 0,
            running: false,
            tick_rate: config.tick_rate,
            moves,
            robots: Vec::with_capacity(config.robot_count),
            houses: Vec::new(),
            house_index: HashMap::new(),
            last_move: None,
            snapshot_dirty: true,
            flat_robots: FlatRobotCache::with_capacity(config.robot_count),
            flat_robots_dirty: true,
            metrics: BenchmarkMetrics::default(),
            config,
        };
        data.reset_robots();
        Ok(data)
    }

    pub fn move_index(&self) -> u64 {
        self.move_index
    }

    pub fn increment_move_index(&mut self) {
        self.move_index += 1;
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.tick_rate = tick_rate.max(1);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn remaining_moves(&self) -> usize {
        self.moves.len().saturating_sub(self.move_index as usize)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_moves() == 0
    }

    /// Robot index and direction of the move at `move_index`, if any is left.
    pub fn next_move(&self) -> Option<(usize, Direction)> {
        if self.robots.is_empty() {
            return None;
        }
        let direction = *self.moves.get(self.move_index as usize)?;
        let robot_index = (self.move_index % self.robots.len() as u64) as usize;
        Some((robot_index, direction))
    }

    /// Robots back to the origin, houses cleared, index rewound.
    pub fn reset_robots(&mut self) {
        self.robots = self.config.build_robots();
        self.refresh_collisions();
        self.houses.clear();
        self.house_index.clear();
        self.last_move = None;
        self.move_index = 0;
        self.mark_snapshots_dirty();
        info!(
            robots = self.robots.len(),
            moves = self.moves.len(),
            "delivery run reset"
        );
    }

    pub fn load_moves(&mut self, moves: &str) -> ModelResult<()> {
        let mut config = self.config.clone();
        config.moves = moves.to_string();
        self.moves = config.validate()?;
        self.config = config;
        self.reset_robots();
        Ok(())
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot_mut(&mut self, index: usize) -> Option<&mut Robot> {
        self.robots.get_mut(index)
    }

    pub fn occupancy(&self, coord: Coord) -> usize {
        self.robots.iter().filter(|r| r.coord() == coord).count()
    }

    /// Recomputes every robot's collision flag from the current positions.
    pub fn refresh_collisions(&mut self) {
        let mut counts: HashMap<Coord, usize> = HashMap::with_capacity(self.robots.len());
        for robot in &self.robots {
            *counts.entry(robot.coord()).or_insert(0) += 1;
        }
        for robot in &mut self.robots {
            let sharing = counts.get(&robot.coord()).copied().unwrap_or(0);
            robot.collision = Some(sharing >= 2);
        }
    }

    pub fn deliver_present(&mut self, coord: Coord) {
        match self.house_index.get(&coord) {
            Some(&index) => {
                let presents = &mut self.houses[index].1;
                *presents = presents.saturating_add(1);
            }
            None => {
                self.house_index.insert(coord, self.houses.len());
                self.houses.push((coord, 1));
            }
        }
    }

    pub fn presents_at(&self, coord: Coord) -> u32 {
        self.house_index
            .get(&coord)
            .map_or(0, |&index| self.houses[index].1)
    }

    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    pub fn total_presents(&self) -> u64 {
        self.houses.iter().map(|(_, p)| u64::from(*p)).sum()
    }

    pub fn houses_with_at_least(&self, presents: u32) -> usize {
        self.houses.iter().filter(|(_, p)| *p >= presents).count()
    }

    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.last_move.as_ref()
    }

    pub fn set_last_move(&mut self, outcome: MoveOutcome) {
        self.last_move = Some(outcome);
    }

    pub fn mark_snapshots_dirty(&mut self) {
        self.snapshot_dirty = true;
        self.flat_robots_dirty = true;
    }

    pub fn snapshot_dirty(&self) -> bool {
        self.snapshot_dirty
    }

    pub fn metrics(&self) -> &BenchmarkMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut BenchmarkMetrics {
        &mut self.metrics
    }

    /// Owned copy of the current state; derived views built from it never see
    /// a later move.
    pub fn build_state(&self) -> SimulationState {
        SimulationState {
            houses: self
                .houses
                .iter()
                .map(|(coord, presents)| (coord.key(), *presents))
                .collect(),
            robots: self.robots.clone(),
            move_index: self.move_index,
        }
    }

    pub fn build_public_snapshot(&mut self) -> SimulationState {
        self.snapshot_dirty = false;
        self.build_state()
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn ensure_flat_robots_ready(&mut self) {
        if self.flat_robots_dirty {
            self.flat_robots.rebuild(&self.robots);
            self.flat_robots_dirty = false;
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn flat_robots_slice(&self) -> &[i32] {
        self.flat_robots.data()
    }

    pub fn destroy(&mut self) {
        self.running = false;
        self.robots.clear();
        self.houses.clear();
        self.house_index.clear();
        self.last_move = None;
        self.flat_robots.clear();
        self.snapshot_dirty = true;
        self.flat_robots_dirty = true;
        self.move_index = 0;
    }
}
