//! Slot numbering and label formatting.

/// Number of slots in a full scaffold (one per puzzle day).
pub const DAY_COUNT: u32 = 25;

/// Largest slot index whose label still fits in two digits.
pub const MAX_DAYS: u32 = 99;

/// Fixed prefix of every slot label.
pub const LABEL_PREFIX: &str = "Day";

/// Zero-pad width of the slot number. Fixed, never derived from the day count.
pub const LABEL_WIDTH: usize = 2;

/// One numbered unit of the scaffold, in `1..=MAX_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u32);

impl Slot {
    pub fn new(index: u32) -> Option<Self> {
        (1..=MAX_DAYS).contains(&index).then_some(Self(index))
    }

    pub fn index(self) -> u32 {
        self.0
    }

    /// `Day` followed by the two-digit index, e.g. `Day03`.
    pub fn label(self) -> String {
        format!("{LABEL_PREFIX}{:0width$}", self.0, width = LABEL_WIDTH)
    }
}

/// Iterate slots `1..=days` in ascending order.
///
/// `days` is clamped to [`MAX_DAYS`]; callers validate it beforehand.
pub fn slots(days: u32) -> impl Iterator<Item = Slot> {
    (1..=days.min(MAX_DAYS)).map(Slot)
}
