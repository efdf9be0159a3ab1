use crate::constants::FLAT_ROBOT_FIELD_COUNT;
use crate::types::Robot;

/// Robots packed as `[id, x, y, collision]` quadruples for typed-array transfer.
/// `collision` is 1 for a shared tile, 0 otherwise and -1 when not computed.
pub struct FlatRobotCache {
    data: Vec<i32>,
}

impl FlatRobotCache {
    pub fn with_capacity(robot_count: usize) -> Self {
        Self {
            data: Vec::with_capacity(
                robot_count
                    .checked_mul(FLAT_ROBOT_FIELD_COUNT)
                    .unwrap_or(0),
            ),
        }
    }

    pub fn rebuild(&mut self, robots: &[Robot]) {
        self.data.clear();
        for robot in robots {
            self.data.push(robot.id as i32);
            self.data.push(robot.x);
            self.data.push(robot.y);
            self.data.push(match robot.collision {
                Some(true) => 1,
                Some(false) => 0,
                None => -1,
            });
        }
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_four_fields_per_robot() {
        let mut shared = Robot::new(2, "R2", "blue").with_position(-4, 9);
        shared.collision = Some(true);
        let robots = vec![Robot::new(1, "R1", "red"), shared];

        let mut cache = FlatRobotCache::with_capacity(robots.len());
        cache.rebuild(&robots);
        assert_eq!(cache.data(), &[1, 0, 0, -1, 2, -4, 9, 1]);

        cache.rebuild(&robots[..1]);
        assert_eq!(cache.data().len(), FLAT_ROBOT_FIELD_COUNT);
    }

    #[test]
    fn oversized_capacity_request_does_not_overflow() {
        let mut cache = FlatRobotCache::with_capacity(usize::MAX);
        cache.rebuild(&[Robot::new(1, "R1", "red")]);
        assert_eq!(cache.data(), &[1, 0, 0, -1]);
    }
}
