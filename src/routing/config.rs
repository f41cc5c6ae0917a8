// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::model::AnchorSide;

/// Cost of an ordinary, unobstructed cell.
pub const BASE_CELL_COST: u32 = 100;
/// Fixed cost added to every single-cell step.
pub const BASE_STEP_COST: u32 = 100;
/// Manhattan heuristic weight, commensurate with [`BASE_STEP_COST`].
pub const HEURISTIC_WEIGHT: u32 = 100;
/// Numerator of the turn penalty: `max(1, TURN_PENALTY_SCALE / distance)`.
pub const TURN_PENALTY_SCALE: u32 = 1000;
/// Cost stamped on node cores. Such cells are also unwalkable.
pub const BLOCKED_COST: u32 = u32::MAX / 4;

/// Geometry and cost tiers of the router.
///
/// All distances are in grid cells. Defaults match the reference canvas, where one
/// cell is 5 logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Real-world units per grid cell.
    pub cell_size: f64,
    /// Unwalkable margin stamped around every node footprint.
    pub core_margin: i32,
    /// Width of the inner buffer ring around a core.
    pub near_width: i32,
    /// Width of the outer buffer ring around the inner one.
    pub far_width: i32,
    pub near_cost: u32,
    pub far_cost: u32,
    /// Lower bound on the search window's side length.
    pub min_extent: i32,
    /// Slack added on every side of the search window.
    pub margin: i32,
    /// Manhattan radius around the target within which neighbor ordering favours
    /// the required final heading.
    pub approach_radius: u32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cell_size: 5.0,
            core_margin: 2,
            near_width: 3,
            far_width: 4,
            near_cost: 400,
            far_cost: 200,
            min_extent: 150,
            margin: 30,
            approach_radius: 3,
        }
    }
}

impl RouterConfig {
    /// Parses a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Distance from a `side` anchor to its port, the first cell outside the
    /// node's core on that side.
    pub fn port_distance(&self, side: AnchorSide) -> i32 {
        self.core_margin.max(0) + side.exit_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::RouterConfig;
    use crate::model::AnchorSide;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RouterConfig::from_json_str(r#"{ "cell_size": 8.0, "margin": 12 }"#).unwrap();
        assert_eq!(config.cell_size, 8.0);
        assert_eq!(config.margin, 12);
        assert_eq!(config.min_extent, RouterConfig::default().min_extent);
    }

    #[test]
    fn ports_are_the_first_cell_past_the_core_on_every_side() {
        let config = RouterConfig::default();
        assert_eq!(config.port_distance(AnchorSide::Top), 3);
        assert_eq!(config.port_distance(AnchorSide::Left), 3);
        assert_eq!(config.port_distance(AnchorSide::Right), 2);
        assert_eq!(config.port_distance(AnchorSide::Bottom), 2);
    }

    #[test]
    fn rejects_unparseable_config() {
        assert!(RouterConfig::from_json_str(r#"{ "margin": "wide" }"#).is_err());
    }
}
