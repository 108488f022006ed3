//! Divider snapping for interactive layout editing.
//!
//! A [`SnapTrack`] follows one edge (or one whole zone) along a single axis
//! while the user drags it. [`MagneticSnap`] pulls the tracked position toward
//! nearby zone and screen edges; [`PlainSnap`] only clamps.
//!
//! All values are whole pixels relative to the work area's origin on the
//! axis.

use tile_geom::InternalRect;

/// Minimum zone width kept by edge resizes.
pub const MIN_ZONE_WIDTH: i64 = 64;
/// Minimum zone height kept by edge resizes.
pub const MIN_ZONE_HEIGHT: i64 = 72;

/// Magnetic zones never exceed this fraction of the axis extent.
const MAGNET_MAX_FRACTION: f64 = 0.08;

/// Axis a track moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Smallest extent an edge resize may shrink a zone to.
    pub const fn min_size(self) -> i64 {
        match self {
            Self::X => MIN_ZONE_WIDTH,
            Self::Y => MIN_ZONE_HEIGHT,
        }
    }

    /// Leading edge and extent of `r` on this axis, truncated to pixels.
    fn span(self, r: &InternalRect) -> (i64, i64) {
        match self {
            Self::X => (r.x as i64, r.w as i64),
            Self::Y => (r.y as i64, r.h as i64),
        }
    }
}

/// Which part of the zone is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeMode {
    /// The near (leading) edge moves; the far edge stays put.
    BottomEdge,
    /// The far (trailing) edge moves; the near edge stays put.
    TopEdge,
    /// The whole zone moves, keeping its size.
    BothEdges,
}

/// Candidate positions and bounds for one drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapTrack {
    /// Sorted, de-duplicated snap candidates.
    snaps: Vec<i64>,
    /// Lowest reachable position.
    min: i64,
    /// Highest reachable position.
    max: i64,
    /// Current reported position.
    position: i64,
    /// Axis extent of the work area.
    extent: i64,
    /// Drag mode the track was built for.
    mode: ResizeMode,
}

impl SnapTrack {
    /// Build the track for `zones[index]`. `None` when `index` is out of range.
    pub fn new(
        zones: &[InternalRect],
        index: usize,
        axis: Axis,
        mode: ResizeMode,
        extent: i64,
    ) -> Option<Self> {
        let (pos, size) = axis.span(zones.get(index)?);
        let both = mode == ResizeMode::BothEdges;

        let mut snaps = Vec::with_capacity(zones.len() * 4 + 4);
        for (_, other) in zones.iter().enumerate().filter(|(i, _)| *i != index) {
            let (op, os) = axis.span(other);
            snaps.extend([op, op + os]);
            if both {
                snaps.extend([op - size, op + os - size]);
            }
        }
        snaps.extend([0, extent]);
        if both {
            snaps.extend([-size, extent - size]);
        }
        snaps.sort_unstable();
        snaps.dedup();

        let min_size = axis.min_size();
        let (min, max, position) = match mode {
            ResizeMode::BottomEdge => (0, pos + size - min_size, pos),
            ResizeMode::TopEdge => (pos + min_size, extent, pos + size),
            ResizeMode::BothEdges => (0, extent - size, pos),
        };
        Some(Self {
            snaps,
            min,
            max,
            position,
            extent,
            mode,
        })
    }

    /// Snap candidates in ascending order.
    pub fn snaps(&self) -> &[i64] {
        &self.snaps
    }

    /// Lower bound.
    pub fn min_value(&self) -> i64 {
        self.min
    }

    /// Upper bound.
    pub fn max_value(&self) -> i64 {
        self.max
    }

    /// Current position.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Resize mode the candidates were built for.
    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    /// Clamp into `[min, max]`. An inverted range pins to `min`.
    fn clamp(&self, v: i64) -> i64 {
        v.min(self.max).max(self.min)
    }
}

/// Moves a tracked position in response to drag deltas.
pub trait SnapMove {
    /// Apply a pointer delta and return the new reported position.
    fn move_by(&mut self, delta: i64) -> i64;

    /// Current reported position.
    fn position(&self) -> i64;
}

/// Clamped movement with no attraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainSnap {
    /// Underlying track.
    track: SnapTrack,
}

impl PlainSnap {
    /// Wrap a track.
    pub fn new(track: SnapTrack) -> Self {
        Self { track }
    }

    /// The tracked state.
    pub fn track(&self) -> &SnapTrack {
        &self.track
    }
}

impl SnapMove for PlainSnap {
    fn move_by(&mut self, delta: i64) -> i64 {
        self.track.position = self.track.clamp(self.track.position + delta);
        self.track.position
    }

    fn position(&self) -> i64 {
        self.track.position
    }
}

/// Movement that is attracted to snap candidates.
///
/// Each candidate owns a magnetic radius of half the smallest of: the gap to
/// its lower neighbour, the gap to its upper neighbour, and 8% of the extent.
/// Inside the inner dead zone (half the radius, rounded up) the position sits
/// exactly on the candidate; between the dead zone and the radius it moves at
/// twice the pointer's rate, so it meets the free position at the radius and
/// the candidate at the dead-zone boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagneticSnap {
    /// Underlying track.
    track: SnapTrack,
    /// Magnetic radius per candidate.
    magnets: Vec<i64>,
    /// Unsnapped position accumulated from pointer deltas.
    free: i64,
}

impl MagneticSnap {
    /// Wrap a track and compute each candidate's magnetic radius.
    pub fn new(track: SnapTrack) -> Self {
        let cap = (MAGNET_MAX_FRACTION * track.extent as f64) as i64;
        let snaps = &track.snaps;
        let magnets = snaps
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let prev = if i == 0 { 0 } else { snaps[i - 1] };
                let next = snaps.get(i + 1).copied().unwrap_or(track.extent);
                (s - prev).min(next - s).min(cap) / 2
            })
            .collect();
        let free = track.position;
        Self {
            track,
            magnets,
            free,
        }
    }

    /// The tracked state.
    pub fn track(&self) -> &SnapTrack {
        &self.track
    }

    /// Magnetic radius of each candidate, parallel to [`SnapTrack::snaps`].
    pub fn magnets(&self) -> &[i64] {
        &self.magnets
    }

    /// Dead-zone half-width for the candidate at `index`.
    pub fn dead_zone(&self, index: usize) -> Option<i64> {
        self.magnets.get(index).map(|m| (m + 1) / 2)
    }

    /// The unsnapped position.
    pub fn free_position(&self) -> i64 {
        self.free
    }

    /// Position reported for a given free position.
    fn attract(&self, free: i64) -> i64 {
        let hit = self
            .track
            .snaps
            .iter()
            .zip(&self.magnets)
            .find(|(snap, magnet)| (free - **snap).abs() <= **magnet);
        let Some((&snap, &magnet)) = hit else {
            return free;
        };
        let dead = (magnet + 1) / 2;
        if (free - snap).abs() <= dead {
            snap
        } else if free < snap {
            let edge = snap - magnet;
            free + (free - edge)
        } else {
            let edge = snap + magnet;
            free - (edge - free)
        }
    }
}

impl SnapMove for MagneticSnap {
    fn move_by(&mut self, delta: i64) -> i64 {
        self.free = self.track.clamp(self.free + delta);
        self.track.position = self.track.clamp(self.attract(self.free));
        self.track.position
    }

    fn position(&self) -> i64 {
        self.track.position
    }
}
