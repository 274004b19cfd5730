//! Query construction.

use element_catalog::{default_interest, ElementId};
use grid_sample::InterpMethod;
use probe_common::{ProbePoint, TimeWindow};
use wx_codes::TableVersion;

/// The locations one query probes.
#[derive(Debug, Clone)]
pub enum PointSet {
    /// An explicit list of points, geographic or grid-space.
    List(Vec<ProbePoint>),
    /// Every cell of each matched grid, in storage order.
    AllCells,
}

impl PointSet {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(points) if points.is_empty())
    }
}

/// Everything one probe query needs besides its inputs.
#[derive(Debug, Clone)]
pub struct ProbeQuery {
    pub points: PointSet,
    /// User-supplied element list; empty means no preference.
    pub elements: Vec<ElementId>,
    /// Caller interest weights feeding the filter-set rule.
    pub interest: Vec<(ElementId, u8)>,
    pub window: TimeWindow,
    pub method: InterpMethod,
    /// Average the valid bilinear corners instead of going missing when
    /// one to three corners are missing.
    pub average_partial: bool,
    /// Priority-table generation for coded weather/hazard cells.
    pub table_version: TableVersion,
    /// Single-element mode: the filter must resolve to exactly one
    /// element, checked before any I/O.
    pub expect_single: bool,
}

impl ProbeQuery {
    pub fn new(points: PointSet) -> Self {
        Self {
            points,
            elements: Vec::new(),
            interest: default_interest(),
            window: TimeWindow::unbounded(),
            method: InterpMethod::default(),
            average_partial: false,
            table_version: TableVersion::default(),
            expect_single: false,
        }
    }
}
