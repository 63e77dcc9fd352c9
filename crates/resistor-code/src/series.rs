//! Preferred-value series, as two-digit mantissas `(first, second)`.

use serde::{Deserialize, Serialize};

use crate::Tolerance;

/// E24 mantissas, manufactured at ±5%.
pub const E24: [(u8, u8); 24] = [
    (1, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 5),
    (1, 6),
    (1, 8),
    (2, 0),
    (2, 2),
    (2, 4),
    (2, 7),
    (3, 0),
    (3, 3),
    (3, 6),
    (3, 9),
    (4, 3),
    (4, 7),
    (5, 1),
    (5, 6),
    (6, 2),
    (6, 8),
    (7, 5),
    (8, 2),
    (9, 1),
];

/// E12 mantissas, manufactured at ±10%.
pub const E12: [(u8, u8); 12] = [
    (1, 0),
    (1, 2),
    (1, 5),
    (1, 8),
    (2, 2),
    (2, 7),
    (3, 3),
    (3, 9),
    (4, 7),
    (5, 6),
    (6, 8),
    (8, 2),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    E12,
    E24,
}

impl Series {
    pub fn for_tolerance(tolerance: Tolerance) -> Self {
        match tolerance {
            Tolerance::TenPercent => Series::E12,
            Tolerance::FivePercent => Series::E24,
        }
    }

    pub fn tolerance(self) -> Tolerance {
        match self {
            Series::E12 => Tolerance::TenPercent,
            Series::E24 => Tolerance::FivePercent,
        }
    }

    pub fn mantissas(self) -> &'static [(u8, u8)] {
        match self {
            Series::E12 => &E12,
            Series::E24 => &E24,
        }
    }

    pub fn contains(self, digits: (u8, u8)) -> bool {
        self.mantissas().contains(&digits)
    }
}
