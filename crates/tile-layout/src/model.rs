//! Layout data model and its persisted JSON shape.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tile_geom::InternalRect;

use crate::Error;

/// Fixed-point scale of grid percentages: 10000 is the whole axis.
pub const PERCENT_TOTAL: u32 = 10_000;

/// Identifier of a logical zone within one layout.
pub type ZoneId = u32;

/// A percentage grid whose cells are grouped into zones by id.
///
/// `cell_child_map[r][c]` names the zone owning cell `(r, c)`. A zone covers
/// the rectangular run of equal ids starting at its top-left-most cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayoutInfo {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Height of each row, summing to [`PERCENT_TOTAL`].
    pub rows_percents: Vec<u32>,
    /// Width of each column, summing to [`PERCENT_TOTAL`].
    pub columns_percents: Vec<u32>,
    /// Zone id per cell, `rows` vectors of `columns` entries.
    pub cell_child_map: Vec<Vec<ZoneId>>,
}

impl GridLayoutInfo {
    /// True when every dimension agrees with `rows` and `columns` and both
    /// are non-zero.
    pub fn is_well_formed(&self) -> bool {
        self.rows > 0
            && self.columns > 0
            && self.rows_percents.len() == self.rows
            && self.columns_percents.len() == self.columns
            && self.cell_child_map.len() == self.rows
            && self.cell_child_map.iter().all(|row| row.len() == self.columns)
    }

    /// True when both percent axes sum to [`PERCENT_TOTAL`].
    pub fn percents_balanced(&self) -> bool {
        let sum = |v: &[u32]| v.iter().map(|p| u64::from(*p)).sum::<u64>();
        sum(&self.rows_percents) == u64::from(PERCENT_TOTAL)
            && sum(&self.columns_percents) == u64::from(PERCENT_TOTAL)
    }

    /// Largest zone id in the map.
    pub fn max_id(&self) -> Option<ZoneId> {
        self.cell_child_map.iter().flatten().copied().max()
    }

    /// Distinct zone ids present in the map.
    pub fn zone_ids(&self) -> BTreeSet<ZoneId> {
        self.cell_child_map.iter().flatten().copied().collect()
    }
}

/// One freeform zone in a canvas layout's reference space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasZone {
    /// Zone id, unique within the layout.
    pub id: ZoneId,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Freeform zones captured against a reference work-area size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasLayoutInfo {
    /// Zones in back-to-front order.
    pub zones: Vec<CanvasZone>,
    /// Reference width the zone coordinates were captured against.
    pub last_work_area_width: i32,
    /// Reference height the zone coordinates were captured against.
    pub last_work_area_height: i32,
}

impl CanvasLayoutInfo {
    /// Largest zone id, if any zones exist.
    pub fn max_id(&self) -> Option<ZoneId> {
        self.zones.iter().map(|z| z.id).max()
    }
}

/// The geometry payload of a zone set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Percentage grid with spanning cells.
    Grid(GridLayoutInfo),
    /// Freeform rectangles.
    Canvas(CanvasLayoutInfo),
}

impl Layout {
    /// Persisted `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Canvas(_) => "canvas",
        }
    }
}

/// A named layout that produces zones for a work area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawZoneSet", into = "RawZoneSet")]
pub struct ZoneSet {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Gap between grid zones, in work-area units. Ignored by canvas layouts.
    pub spacing: u32,
    /// Geometry payload.
    pub layout: Layout,
}

impl ZoneSet {
    /// A grid zone set.
    pub fn grid(
        id: impl Into<String>,
        name: impl Into<String>,
        grid: GridLayoutInfo,
        spacing: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spacing,
            layout: Layout::Grid(grid),
        }
    }

    /// A canvas zone set.
    pub fn canvas(
        id: impl Into<String>,
        name: impl Into<String>,
        canvas: CanvasLayoutInfo,
        spacing: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spacing,
            layout: Layout::Canvas(canvas),
        }
    }

    /// Grid payload, if this is a grid layout.
    pub fn grid_info(&self) -> Option<&GridLayoutInfo> {
        match &self.layout {
            Layout::Grid(g) => Some(g),
            Layout::Canvas(_) => None,
        }
    }

    /// Canvas payload, if this is a canvas layout.
    pub fn canvas_info(&self) -> Option<&CanvasLayoutInfo> {
        match &self.layout {
            Layout::Canvas(c) => Some(c),
            Layout::Grid(_) => None,
        }
    }
}

/// A concrete zone rectangle in a screen's internal space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Id of the logical zone this rectangle realises.
    pub id: ZoneId,
    /// Rectangle in internal coordinates.
    pub rect: InternalRect,
}

impl Zone {
    /// Construct a zone.
    pub const fn new(id: ZoneId, rect: InternalRect) -> Self {
        Self { id, rect }
    }

    /// Positive width and height.
    pub fn is_valid(&self) -> bool {
        self.rect.w > 0.0 && self.rect.h > 0.0
    }
}

/// Persisted `type` values. Older stores used several grid flavours; all of
/// them carry a grid payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum LayoutKind {
    /// Plain grid.
    Grid,
    /// Legacy grid flavour.
    PriorityGrid,
    /// Legacy grid flavour.
    Rows,
    /// Legacy grid flavour.
    Columns,
    /// Legacy grid flavour.
    Focus,
    /// Freeform canvas.
    Canvas,
}

/// Wire form of [`ZoneSet`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawZoneSet {
    /// Stable id.
    id: String,
    /// Display name.
    name: String,
    /// Persisted layout kind.
    #[serde(rename = "type")]
    kind: LayoutKind,
    /// Gap between zones, in pixels.
    #[serde(default)]
    spacing: u32,
    /// Grid payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grid_info: Option<GridLayoutInfo>,
    /// Canvas payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    canvas_info: Option<CanvasLayoutInfo>,
}

impl TryFrom<RawZoneSet> for ZoneSet {
    type Error = Error;

    fn try_from(raw: RawZoneSet) -> Result<Self, Self::Error> {
        let layout = match raw.kind {
            LayoutKind::Canvas => raw.canvas_info.map(Layout::Canvas),
            LayoutKind::Grid
            | LayoutKind::PriorityGrid
            | LayoutKind::Rows
            | LayoutKind::Columns
            | LayoutKind::Focus => raw.grid_info.map(Layout::Grid),
        };
        let Some(layout) = layout else {
            let kind = if raw.kind == LayoutKind::Canvas {
                "canvas"
            } else {
                "grid"
            };
            return Err(Error::MissingPayload { id: raw.id, kind });
        };
        Ok(Self {
            id: raw.id,
            name: raw.name,
            spacing: raw.spacing,
            layout,
        })
    }
}

impl From<ZoneSet> for RawZoneSet {
    fn from(set: ZoneSet) -> Self {
        let (kind, grid_info, canvas_info) = match set.layout {
            Layout::Grid(g) => (LayoutKind::Grid, Some(g), None),
            Layout::Canvas(c) => (LayoutKind::Canvas, None, Some(c)),
        };
        Self {
            id: set.id,
            name: set.name,
            kind,
            spacing: set.spacing,
            grid_info,
            canvas_info,
        }
    }
}
