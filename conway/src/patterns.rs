// patterns.rs - Preset pattern catalog
//
// Offsets are (dx, dy) from the anchor cell, i.e. (column, row).

use crate::error::{Error, Result};

#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Width and height of the bounding box of the offsets, measured from
    /// the anchor (an empty pattern is 0x0).
    pub fn bounds(&self) -> (i32, i32) {
        let w = self.cells.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0);
        (w, h)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Small Exploder",
        cells: &[(1, 0), (0, 1), (1, 1), (2, 1), (0, 2), (2, 2), (1, 3)],
    },
    Pattern {
        name: "Exploder",
        cells: &[
            (0, 0), (2, 0), (4, 0),
            (0, 1), (4, 1),
            (0, 2), (4, 2),
            (0, 3), (4, 3),
            (0, 4), (2, 4), (4, 4),
        ],
    },
    Pattern {
        name: "10 Cell Row",
        cells: &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
            (5, 0), (6, 0), (7, 0), (8, 0), (9, 0),
        ],
    },
    Pattern {
        name: "LWSS",
        cells: &[(1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (4, 1), (4, 2), (0, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "Pentadecathlon",
        cells: &[
            (4, 2), (4, 3), (3, 4), (5, 4), (4, 5), (4, 6),
            (4, 7), (4, 8), (3, 9), (5, 9), (4, 10), (4, 11),
        ],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Catalog names in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

pub fn get(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| Error::PatternNotFound(name.to_string()))
}
