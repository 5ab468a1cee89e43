pub const LEVEL_WIDTH: i32 = 96;
pub const LEVEL_HEIGHT: i32 = 64;

pub const MIN_ROOM_WIDTH: i32 = 8;
pub const MIN_ROOM_HEIGHT: i32 = 10;
pub const MAX_ROOM_WIDTH: i32 = 24;
pub const MAX_ROOM_HEIGHT: i32 = 16;
/// Chance that the partitioner tries a vertical cut (split on x) first.
pub const SPLIT_X_PROBABILITY: f64 = 0.5;

/// Rooms narrower and shorter than this may be filled solid.
pub const SMALL_ROOM_WIDTH: i32 = 12;
pub const SMALL_ROOM_HEIGHT: i32 = 12;
pub const FILL_PROBABILITY: f64 = 0.35;

pub const MIN_FLOOR_HEIGHT: i32 = 1;
pub const MAX_FLOOR_HEIGHT: i32 = 4;
pub const MIN_CEILING_HEIGHT: i32 = 1;
pub const MAX_CEILING_HEIGHT: i32 = 3;
/// Minimum open rows between a room's floor and ceiling.
pub const MIN_WALKABLE_GAP: i32 = 4;

pub const WALL_PROBABILITY: f64 = 0.5;
pub const MIN_WALL_WIDTH: i32 = 1;
pub const MAX_WALL_WIDTH: i32 = 3;
/// Openings between rooms shorter than this are walled off.
pub const MIN_DOORWAY_HEIGHT: i32 = 3;

pub const STAIR_PROBABILITY: f64 = 0.6;
pub const MAX_STAIR_HEIGHT: i32 = 8;

/// Minimum open rows beneath the solid band a ladder passes through.
pub const MIN_LADDER_GAP: i32 = 2;
pub const MAX_LADDER_HEIGHT: i32 = 12;
/// Ladders placed per valid ladder candidate.
pub const LADDER_DENSITY: f64 = 0.04;
pub const LADDER_EXCLUSION_X: i32 = 4;
pub const LADDER_EXCLUSION_Y: i32 = 0;

pub const MAX_FALL_HEIGHT: i32 = 6;
