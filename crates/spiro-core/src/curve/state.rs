#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveState {
    /// Still drawing; `advance` moves the pen.
    Active,
    /// Reached 360 * nRot degrees. Frozen until `restart`.
    Complete,
}

impl CurveState {
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, CurveState::Complete)
    }
}
