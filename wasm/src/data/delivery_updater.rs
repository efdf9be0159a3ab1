use tracing::debug;

use crate::types::{ModelError, ModelResult, MoveOutcome};

use super::SimulationData;

/// Applies one route move: the robot whose turn it is steps one tile, and the
/// house it lands on gets a present unless another robot is already there.
pub struct DeliveryUpdater;

impl DeliveryUpdater {
    pub fn new() -> Self {
        Self
    }

    /// `Ok(None)` once the route is used up.
    pub fn apply_next(&self, data: &mut SimulationData) -> ModelResult<Option<MoveOutcome>> {
        let Some((robot_index, direction)) = data.next_move() else {
            return Ok(None);
        };
        let Some(robot) = data.robot_mut(robot_index) else {
            return Ok(None);
        };

        let robot_id = robot.id;
        let from = robot.coord();
        let to = from
            .checked_step(direction)
            .ok_or_else(|| ModelError::CoordinateOverflow {
                robot_id,
                direction: direction.glyph(),
                from: from.key(),
            })?;
        robot.move_to(to);

        data.refresh_collisions();
        let collision = data.occupancy(to) >= 2;
        if !collision {
            data.deliver_present(to);
        }

        let outcome = MoveOutcome {
            move_index: data.move_index(),
            robot_id,
            direction,
            from: from.key(),
            to: to.key(),
            delivered: !collision,
            collision,
        };
        debug!(
            move_index = outcome.move_index,
            robot_id,
            to = %outcome.to,
            delivered = outcome.delivered,
            "applied move"
        );

        data.increment_move_index();
        data.set_last_move(outcome.clone());
        data.mark_snapshots_dirty();
        Ok(Some(outcome))
    }
}

impl Default for DeliveryUpdater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::types::{Coord, Direction, Robot};

    fn data(robot_count: usize, moves: &str) -> SimulationData {
        SimulationData::new(SimulationConfig::new(robot_count, moves)).unwrap()
    }

    #[test]
    fn lone_robot_delivers_where_it_lands() {
        let mut data = data(1, ">");
        let outcome = DeliveryUpdater::new().apply_next(&mut data).unwrap().unwrap();

        assert_eq!(outcome.robot_id, 1);
        assert_eq!(outcome.direction, Direction::East);
        assert_eq!(outcome.from, "0,0");
        assert_eq!(outcome.to, "1,0");
        assert!(outcome.delivered);
        assert!(!outcome.collision);
        assert_eq!(data.presents_at(Coord::new(1, 0)), 1);
        assert_eq!(data.move_index(), 1);
        assert_eq!(data.last_move(), Some(&outcome));
    }

    #[test]
    fn landing_on_another_robot_blocks_delivery() {
        // Robot 1 goes east, robot 2 follows onto the same tile.
        let mut data = data(2, ">>");
        let updater = DeliveryUpdater::new();
        updater.apply_next(&mut data).unwrap();
        let second = updater.apply_next(&mut data).unwrap().unwrap();

        assert_eq!(second.robot_id, 2);
        assert!(second.collision);
        assert!(!second.delivered);
        assert_eq!(data.presents_at(Coord::new(1, 0)), 1);
        assert!(data.robots().iter().all(|r| r.collision == Some(true)));
    }

    #[test]
    fn leaving_a_shared_tile_clears_collision() {
        let mut data = data(2, "^");
        DeliveryUpdater::new().apply_next(&mut data).unwrap();
        assert!(data.robots().iter().all(|r| r.collision == Some(false)));
        assert_eq!(data.presents_at(Coord::new(0, -1)), 1);
    }

    #[test]
    fn exhausted_route_is_a_no_op() {
        let mut data = data(1, "");
        assert_eq!(DeliveryUpdater::new().apply_next(&mut data), Ok(None));
        assert_eq!(data.move_index(), 0);
    }

    #[test]
    fn stepping_off_the_integer_edge_is_an_error() {
        let mut data = data(1, ">");
        if let Some(robot) = data.robot_mut(0) {
            *robot = Robot::new(1, "Edge", "bg-red-500").with_position(i32::MAX, 0);
        }
        let result = DeliveryUpdater::new().apply_next(&mut data);
        assert!(matches!(
            result,
            Err(ModelError::CoordinateOverflow { robot_id: 1, direction: '>', .. })
        ));
        assert_eq!(data.move_index(), 0);
    }
}
