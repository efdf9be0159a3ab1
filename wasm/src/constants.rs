// Shared simulation constants

pub const DEFAULT_ROBOT_COUNT: usize = 2;
pub const MAX_ROBOTS: usize = 10_000;
pub const DEFAULT_TICK_RATE: u32 = 10; // Moves per second while running

// Default upper bound on tiles in a derived grid (4096 x 4096). The grid is
// dense, so a single far-off robot can otherwise demand an enormous allocation.
pub const MAX_GRID_TILES: usize = 16_777_216;

// Tailwind background classes handed out to robots in order, wrapping around
pub const DEFAULT_COLOR_CLASSES: [&str; 6] = [
    "bg-red-500",
    "bg-green-500",
    "bg-blue-500",
    "bg-yellow-500",
    "bg-purple-500",
    "bg-orange-500",
];

// Fields per robot in the flat robot buffer: id, x, y, collision
pub const FLAT_ROBOT_FIELD_COUNT: usize = 4;
