//! Per-room-kind propagation direction configuration.

use indexmap::IndexMap;
use smallvec::SmallVec;
use veil_core::{BuildError, Direction, DirectionSet, Room, RoomKind};

/// Curated propagation directions per room kind, plus a default set.
///
/// This is configuration data, owned explicitly and passed into the
/// builder — not ambient global state. Entries arrive as raw
/// `[dx, dy, dz]` triples (the shape a config file produces) and are
/// validated into [`Direction`]s at construction, so a malformed
/// entry fails fast before any index exists and can never surface at
/// query time.
///
/// Canonical directions are authored for a room's unrotated placement;
/// [`search_directions`](DirectionTable::search_directions) rotates
/// them into world orientation on the fly.
#[derive(Clone, Debug)]
pub struct DirectionTable {
    curated: IndexMap<RoomKind, DirectionSet>,
    default: DirectionSet,
}

impl DirectionTable {
    /// Build a table from raw configuration triples.
    ///
    /// `default` is used for room kinds without a curated entry; pass
    /// [`Direction::AXES`] components for the usual all-six-axes
    /// behavior, or use [`all_axes_default`](Self::all_axes_default).
    ///
    /// Fails with [`BuildError`] on a non-unit triple or a room kind
    /// listed twice.
    pub fn new(
        default: &[[i32; 3]],
        curated: &[(RoomKind, Vec<[i32; 3]>)],
    ) -> Result<Self, BuildError> {
        let mut default_set = DirectionSet::new();
        for (index, [dx, dy, dz]) in default.iter().copied().enumerate() {
            let d = Direction::new(dx, dy, dz)
                .map_err(|source| BuildError::InvalidDefaultDirection { index, source })?;
            default_set.push(d);
        }

        let mut curated_map: IndexMap<RoomKind, DirectionSet> =
            IndexMap::with_capacity(curated.len());
        for (kind, triples) in curated {
            let mut set = DirectionSet::new();
            for (index, [dx, dy, dz]) in triples.iter().copied().enumerate() {
                let d = Direction::new(dx, dy, dz).map_err(|source| {
                    BuildError::InvalidCuratedDirection {
                        kind: *kind,
                        index,
                        source,
                    }
                })?;
                set.push(d);
            }
            if curated_map.insert(*kind, set).is_some() {
                return Err(BuildError::DuplicateKind { kind: *kind });
            }
        }

        Ok(Self {
            curated: curated_map,
            default: default_set,
        })
    }

    /// Build a table whose default set is all six axis directions.
    pub fn all_axes_default(
        curated: &[(RoomKind, Vec<[i32; 3]>)],
    ) -> Result<Self, BuildError> {
        let axes: Vec<[i32; 3]> = Direction::AXES
            .iter()
            .map(|d| [d.dx(), d.dy(), d.dz()])
            .collect();
        Self::new(&axes, curated)
    }

    /// Resolve the search directions for one room.
    ///
    /// Returns the curated set rotated into the room's world
    /// orientation with `is_known = true`, or the default set
    /// unrotated with `is_known = false`. `is_known` certifies only
    /// the *first* hop in each direction as an open connection; every
    /// later hop still needs an explicit connectivity check.
    pub fn search_directions(&self, room: &Room) -> (DirectionSet, bool) {
        match self.curated.get(&room.kind) {
            Some(canonical) => {
                let rotated: DirectionSet = canonical
                    .iter()
                    .map(|d| d.rotated(room.orientation))
                    .collect();
                (rotated, true)
            }
            None => (self.default.clone(), false),
        }
    }

    /// Number of room kinds with a curated entry.
    pub fn curated_kinds(&self) -> usize {
        self.curated.len()
    }

    /// The default direction set used for uncurated kinds.
    pub fn default_directions(&self) -> &[Direction] {
        &self.default
    }
}

impl Default for DirectionTable {
    fn default() -> Self {
        Self {
            curated: IndexMap::new(),
            default: SmallVec::from_slice(&Direction::AXES),
        }
    }
}
