use crate::model::DetectorKind;

/// Loop detector setback by approach speed: (mph, feet from stop line)
const LOOP_SETBACKS: [(u8, u16); 7] = [
    (30, 80),
    (35, 200),
    (40, 300),
    (45, 330),
    (50, 370),
    (55, 445),
    (60, 485),
];

/// Speed to advance-detector distance lookup for one detector kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetbackTable {
    kind: DetectorKind,
    entries: &'static [(u8, u16)],
}

impl SetbackTable {
    /// Video and radar advance zones are placed at the loop distances.
    pub fn for_kind(kind: DetectorKind) -> Self {
        let entries: &'static [(u8, u16)] = match kind {
            DetectorKind::Loop | DetectorKind::Video | DetectorKind::Radar => &LOOP_SETBACKS,
        };
        Self { kind, entries }
    }

    pub fn kind(&self) -> DetectorKind {
        self.kind
    }

    /// The only legal setback at `speed_limit`, or `None` when the speed is unsupported
    pub fn distance_for(&self, speed_limit: u8) -> Option<u16> {
        self.entries
            .iter()
            .find(|(speed, _)| *speed == speed_limit)
            .map(|(_, feet)| *feet)
    }

    pub fn supported_speeds(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|(speed, _)| *speed)
    }
}
