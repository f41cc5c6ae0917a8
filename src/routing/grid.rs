// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{GridPoint, Rect};

use super::config::BLOCKED_COST;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    walkable: bool,
    cost: u32,
}

impl GridCell {
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

/// Dense cost/obstacle grid covering a rectangular window of the canvas.
///
/// Local cell `(0, 0)` is the absolute coordinate `origin`. All public accessors
/// take absolute coordinates. Search state lives in the path finder's own arena,
/// never in the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    origin: GridPoint,
    width: usize,
    height: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    pub fn new(origin: GridPoint, width: usize, height: usize, base_cost: u32) -> Self {
        let len = width.saturating_mul(height);
        Self { origin, width, height, cells: vec![GridCell { walkable: true, cost: base_cost }; len] }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The covered window in absolute coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x(), self.origin.y(), self.width as i32, self.height as i32)
    }

    pub fn cell(&self, point: GridPoint) -> Option<&GridCell> {
        self.idx_of(point).map(|idx| &self.cells[idx])
    }

    pub(crate) fn cell_at(&self, idx: usize) -> GridCell {
        self.cells[idx]
    }

    pub(crate) fn idx_of(&self, point: GridPoint) -> Option<usize> {
        let x = point.x() - self.origin.x();
        let y = point.y() - self.origin.y();
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub(crate) fn point_of(&self, idx: usize) -> GridPoint {
        let x = (idx % self.width) as i32 + self.origin.x();
        let y = (idx / self.width) as i32 + self.origin.y();
        GridPoint::new(x, y)
    }

    /// Raises the cost of every cell in `area` to at least `cost`.
    ///
    /// Stamping never lowers a cost and never makes a blocked cell walkable again,
    /// so overlapping footprints compose regardless of order.
    pub(crate) fn raise(&mut self, area: Rect, cost: u32, walkable: bool) {
        let Some(area) = area.clip(&self.bounds()) else {
            return;
        };
        let x0 = (area.x - self.origin.x()) as usize;
        let y0 = (area.y - self.origin.y()) as usize;
        for y in y0..y0 + area.h as usize {
            let row = y * self.width;
            for cell in &mut self.cells[row + x0..row + x0 + area.w as usize] {
                cell.cost = cell.cost.max(cost);
                cell.walkable &= walkable;
            }
        }
    }

    pub(crate) fn block(&mut self, area: Rect) {
        self.raise(area, BLOCKED_COST, false);
    }
}
