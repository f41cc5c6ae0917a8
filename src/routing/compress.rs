// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::{GridPoint, Waypoints};

/// Corner points of a routed path. Most routes have only a handful.
pub type Polyline = SmallVec<[GridPoint; 8]>;

/// Keeps the endpoints and every point where the heading changes.
///
/// Steps may be longer than one cell; only their sign matters. Repeated points
/// are dropped.
pub fn collapse_collinear(path: &[GridPoint]) -> Polyline {
    let mut points = Polyline::new();
    for &point in path {
        if points.last() == Some(&point) {
            continue;
        }
        if let [.., a, b] = points.as_slice() {
            if heading(*a, *b) == heading(*b, point) {
                points.pop();
            }
        }
        points.push(point);
    }
    points
}

/// Collapses `path` and scales it into real-world coordinates.
///
/// A path that does not describe at least one segment becomes a zero-length
/// segment at `destination`, so the output always has two points.
pub fn compress(path: &[GridPoint], destination: GridPoint, cell_size: f64) -> Waypoints {
    let polyline = collapse_collinear(path);
    if polyline.len() < 2 {
        return scale(&[destination, destination], cell_size);
    }
    scale(&polyline, cell_size)
}

pub(crate) fn scale(points: &[GridPoint], cell_size: f64) -> Waypoints {
    Waypoints::from_points(
        points.iter().map(|p| (f64::from(p.x()) * cell_size, f64::from(p.y()) * cell_size)),
    )
}

fn heading(from: GridPoint, to: GridPoint) -> (i32, i32) {
    ((to.x() - from.x()).signum(), (to.y() - from.y()).signum())
}
