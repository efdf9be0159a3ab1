use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("house key {key:?} is not a canonical \"x,y\" coordinate")]
    InvalidHouseKey { key: String },

    #[error("house key {key:?} appears more than once")]
    DuplicateHouseKey { key: String },

    #[error("robot id {id} appears more than once")]
    DuplicateRobotId { id: u32 },

    #[error("grid of {width}x{height} tiles exceeds the limit of {limit} tiles")]
    GridTooLarge { width: u64, height: u64, limit: usize },

    #[error("invalid move {glyph:?} at position {position}")]
    InvalidMove { glyph: char, position: usize },

    #[error("robot {robot_id} cannot move {direction} from {from}: coordinate out of range")]
    CoordinateOverflow {
        robot_id: u32,
        direction: char,
        from: String,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
