use serde::{Deserialize, Serialize};

/// Wire object served on `/get_occupancy` and consumed by the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStatus {
    pub occupancy: u32,
    pub max_occupancy: u32,
}

impl OccupancyStatus {
    /// The alert condition: the count has reached the threshold.
    pub fn at_capacity(&self) -> bool {
        self.occupancy >= self.max_occupancy
    }
}

/// Body of `PUT /update_occupancy`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OccupancyUpdate {
    pub occupancy: u32,
}
