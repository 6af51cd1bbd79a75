//! Plain data row types written by output backends.

/// One dispatch assignment as written to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRow {
    pub wave:           u64,
    pub firefighter_id: u32,
    pub fire_x:         i32,
    pub fire_y:         i32,
    /// Taxicab distance of this leg.
    pub distance:       u64,
}

/// Summary statistics for one wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSummaryRow {
    pub wave:           u64,
    pub fires:          u64,
    /// Distance traveled by the fleet within this wave.
    pub wave_distance:  u64,
    /// Cumulative fleet distance after this wave.
    pub fleet_distance: u64,
}
