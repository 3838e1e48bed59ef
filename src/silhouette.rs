//! ASCII skyline clues.
//!
//! The round-start clue is a hand-authored skyline per city, the terminal
//! stand-in for the original artwork. Content, not logic: a fixed table
//! keyed by city, all entries the same height.

use crate::catalog::{City, CITY_COUNT};

/// Number of rows in every skyline.
pub const SKYLINE_ROWS: usize = 6;

const SKYLINES: [[&str; SKYLINE_ROWS]; CITY_COUNT] = [
    // København: spire over a dense waterfront.
    [
        "            |                   ",
        "           /|\\      __          ",
        "    __    / | \\ ___|  |__  /\\   ",
        " __|  |__|  |  |   |  |  |/  \\__",
        "|  |  |  |  |  |   |  |  |   |  ",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    ],
    // Aarhus: stepped blocks around one tall tower.
    [
        "              __                ",
        "         __  |  |      __       ",
        "    __  |  |_|  |  ___|  |      ",
        "   |  |_|  | |  |_|   |  |___   ",
        " __|  | |  | |  | |   |  |   |__",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    ],
    // Odense: low rooflines with a single steeple.
    [
        "                 ^              ",
        "        /\\      /|\\             ",
        "   ____/  \\____/ | \\   /\\  ___  ",
        "  |    |  |    | | |  /  \\|   | ",
        " _|    |  |    | | |_|    |   |_",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    ],
    // Aalborg: twin chimneys over flat industry.
    [
        "     ||      ||                 ",
        "     ||      ||       __        ",
        "   __||______||___   |  |  /\\   ",
        "  |               |__|  | /  \\  ",
        " _|               |  |  |/    \\_",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    ],
    // Esbjerg: harbour cranes on an open shoreline.
    [
        "    __/\\__                      ",
        "      ||        __/\\__          ",
        "      ||  __      ||     ___    ",
        "  ____||_|  |_____||____|   |   ",
        " |     | |  |     ||    |   |___",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    ],
];

/// Returns the skyline rows for a city, top to bottom.
pub fn skyline(city: City) -> &'static [&'static str; SKYLINE_ROWS] {
    &SKYLINES[city as usize]
}
