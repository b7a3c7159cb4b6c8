//! Shared fixture construction for Veil benchmarks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use veil_core::{Orientation, RoomCoord, RoomKind};
use veil_test_utils::{GridMap, ScriptedDoors};

/// Build a `side × side` single-floor map with every passage open.
///
/// Room kinds alternate so a curated table exercises both the known
/// and default paths.
pub fn open_grid(side: i32) -> (GridMap, ScriptedDoors) {
    let mut map = GridMap::new();
    let mut doors = ScriptedDoors::new();
    for x in 0..side {
        for z in 0..side {
            let kind = RoomKind(((x + z) % 2) as u16);
            map.add_room(kind, Orientation::Deg0, RoomCoord::new(x, 0, z));
        }
    }
    for x in 0..side {
        for z in 0..side {
            let here = RoomCoord::new(x, 0, z);
            if x + 1 < side {
                doors.connect(here, RoomCoord::new(x + 1, 0, z));
            }
            if z + 1 < side {
                doors.connect(here, RoomCoord::new(x, 0, z + 1));
            }
        }
    }
    (map, doors)
}
