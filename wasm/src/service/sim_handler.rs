use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

use crate::config::SimulationConfig;
use crate::logic::SimulationLogic;

#[wasm_bindgen]
pub struct SimulationHandler {
    logic: SimulationLogic,
}

#[wasm_bindgen]
impl SimulationHandler {
    #[wasm_bindgen(constructor)]
    pub fn new(robot_count: usize, moves: &str) -> Result<SimulationHandler, JsError> {
        Ok(Self {
            logic: SimulationLogic::with_robots(robot_count, moves)?,
        })
    }

    /// Builds a handler from a plain `SimulationConfig` object.
    #[wasm_bindgen]
    pub fn from_config(config: JsValue) -> Result<SimulationHandler, JsError> {
        let config: SimulationConfig = serde_wasm_bindgen::from_value(config)?;
        Ok(Self {
            logic: SimulationLogic::new(config)?,
        })
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.logic.start();
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.logic.pause();
    }

    #[wasm_bindgen]
    pub fn resume(&mut self) {
        self.logic.resume();
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.logic.reset();
    }

    /// Returns false once the route is finished.
    #[wasm_bindgen]
    pub fn step(&mut self) -> Result<bool, JsError> {
        Ok(self.logic.step()?.is_some())
    }

    #[wasm_bindgen]
    pub fn step_n(&mut self, count: usize) -> Result<usize, JsError> {
        Ok(self.logic.step_n(count)?)
    }

    #[wasm_bindgen]
    pub fn run_to_end(&mut self) -> Result<usize, JsError> {
        Ok(self.logic.run_to_end()?)
    }

    #[wasm_bindgen]
    pub fn update(&mut self) -> Result<bool, JsError> {
        Ok(self.logic.update()?.is_some())
    }

    #[wasm_bindgen]
    pub fn load_moves(&mut self, moves: &str) -> Result<(), JsError> {
        Ok(self.logic.load_moves(moves)?)
    }

    #[wasm_bindgen]
    pub fn get_move_index(&self) -> u64 {
        self.logic.move_index()
    }

    #[wasm_bindgen]
    pub fn get_move_count(&self) -> usize {
        self.logic.move_count()
    }

    #[wasm_bindgen]
    pub fn get_remaining_moves(&self) -> usize {
        self.logic.remaining_moves()
    }

    #[wasm_bindgen]
    pub fn is_finished(&self) -> bool {
        self.logic.is_finished()
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.logic.running()
    }

    #[wasm_bindgen]
    pub fn get_robot_count(&self) -> usize {
        self.logic.robot_count()
    }

    #[wasm_bindgen]
    pub fn get_house_count(&self) -> usize {
        self.logic.house_count()
    }

    #[wasm_bindgen]
    pub fn get_total_presents(&self) -> u64 {
        self.logic.total_presents()
    }

    #[wasm_bindgen]
    pub fn count_houses_with_at_least(&self, presents: u32) -> usize {
        self.logic.houses_with_at_least(presents)
    }

    #[wasm_bindgen]
    pub fn get_tick_rate(&self) -> u32 {
        self.logic.tick_rate()
    }

    #[wasm_bindgen]
    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.logic.set_tick_rate(tick_rate);
    }

    /// `null` when nothing changed since the previous call.
    #[wasm_bindgen]
    pub fn get_snapshot(&mut self) -> JsValue {
        match self.logic.request_snapshot() {
            Some(snapshot) => serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.logic.state())?)
    }

    #[wasm_bindgen]
    pub fn get_house_grid(&mut self) -> Result<JsValue, JsError> {
        let grid = self.logic.request_grid()?;
        Ok(serde_wasm_bindgen::to_value(&grid)?)
    }

    #[wasm_bindgen]
    pub fn get_robot_positions(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.logic.robot_positions())?)
    }

    #[wasm_bindgen]
    pub fn get_last_move(&self) -> JsValue {
        match self.logic.last_move() {
            Some(outcome) => serde_wasm_bindgen::to_value(outcome).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn get_flat_robots(&mut self) -> js_sys::Int32Array {
        js_sys::Int32Array::from(self.logic.request_flat_robots())
    }

    #[wasm_bindgen]
    pub fn get_last_step_duration(&self) -> f64 {
        self.logic.last_step_duration()
    }

    #[wasm_bindgen]
    pub fn get_last_grid_duration(&self) -> f64 {
        self.logic.last_grid_duration()
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.logic.destroy();
    }
}

#[cfg(test)]
impl SimulationHandler {
    pub fn logic(&self) -> &SimulationLogic {
        &self.logic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(robot_count: usize, moves: &str) -> SimulationHandler {
        match SimulationHandler::new(robot_count, moves) {
            Ok(handler) => handler,
            Err(_) => panic!("handler should accept {robot_count} robots and {moves:?}"),
        }
    }

    #[test]
    fn creates_run_with_robots_at_origin() {
        let handler = handler(3, "^>v");
        assert_eq!(handler.get_robot_count(), 3);
        assert_eq!(handler.get_move_index(), 0);
        assert_eq!(handler.get_move_count(), 3);
        assert_eq!(handler.get_house_count(), 0);
        assert!(!handler.is_running());
    }

    #[test]
    fn steps_and_advances_move_index() {
        let mut handler = handler(2, "^^");
        assert!(matches!(handler.step(), Ok(true)));
        assert_eq!(handler.get_move_index(), 1);
        assert_eq!(handler.get_total_presents(), 1);
        assert!(matches!(handler.step(), Ok(true)));
        assert!(matches!(handler.step(), Ok(false)));
        assert!(handler.is_finished());
    }

    #[test]
    fn toggles_running_state() {
        let mut handler = handler(2, "^^^");
        handler.start();
        assert!(handler.is_running());
        handler.pause();
        assert!(!handler.is_running());
        handler.resume();
        assert!(handler.is_running());
    }

    #[test]
    fn reset_rewinds_the_route() {
        let mut handler = handler(1, "^^^");
        assert!(matches!(handler.run_to_end(), Ok(3)));
        handler.reset();
        assert_eq!(handler.get_move_index(), 0);
        assert_eq!(handler.get_remaining_moves(), 3);
        assert_eq!(handler.get_house_count(), 0);
        assert!(!handler.is_running());
    }

    #[test]
    fn counts_busy_houses() {
        let mut handler = handler(1, "<><>");
        assert!(matches!(handler.step_n(4), Ok(4)));
        assert_eq!(handler.count_houses_with_at_least(2), 2);
        assert_eq!(handler.logic().state().houses.len(), 2);
    }
}
