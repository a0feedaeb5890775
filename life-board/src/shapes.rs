//! Built-in seed patterns, each a list of `(row, col)` offsets from the
//! anchor cell a shape is placed at.

use std::collections::HashMap;

pub type Offsets = &'static [(usize, usize)];

const CATALOG: &[(&str, Offsets)] = &[
    // Still lifes
    ("block", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
    ("beehive", &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)]),
    (
        "loaf",
        &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)],
    ),
    ("boat", &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)]),
    ("tub", &[(0, 1), (1, 0), (1, 2), (2, 1)]),
    // Oscillators
    ("blinker", &[(0, 1), (1, 1), (2, 1)]),
    ("toad", &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)]),
    ("beacon", &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)]),
    // Spaceships
    ("glider", &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
    (
        "LWS",
        &[
            (0, 0),
            (0, 3),
            (1, 4),
            (2, 0),
            (2, 4),
            (3, 1),
            (3, 2),
            (3, 3),
            (3, 4),
        ],
    ),
    // Methuselahs
    ("r-pentomino", &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]),
    (
        "diehard",
        &[(0, 6), (1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7)],
    ),
    (
        "acorn",
        &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
    ),
];

pub(crate) fn catalog() -> HashMap<&'static str, Offsets> {
    CATALOG.iter().copied().collect()
}
