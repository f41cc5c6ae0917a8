// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, GridPoint, Rect};
use super::ids::NodeId;

/// A placed component on the canvas grid.
///
/// `(x, y)` is the top-left cell; `width` and `height` are measured in cells
/// and are expected to be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Node {
    pub fn new(id: NodeId, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { id, x, y, width, height }
    }

    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> GridPoint {
        GridPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// The midpoint of the given side, lying on the node's outline.
    pub fn anchor(&self, side: AnchorSide) -> GridPoint {
        match side {
            AnchorSide::Top => GridPoint::new(self.x + self.width / 2, self.y),
            AnchorSide::Right => GridPoint::new(self.x + self.width, self.y + self.height / 2),
            AnchorSide::Bottom => GridPoint::new(self.x + self.width / 2, self.y + self.height),
            AnchorSide::Left => GridPoint::new(self.x, self.y + self.height / 2),
        }
    }
}

/// Compass side of a node that a connection leaves from or arrives at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl AnchorSide {
    /// Outward normal: the heading of a line leaving the node through this side.
    pub fn normal(self) -> Direction {
        match self {
            Self::Top => Direction::Up,
            Self::Right => Direction::Right,
            Self::Bottom => Direction::Down,
            Self::Left => Direction::Left,
        }
    }

    /// Heading of a line entering the node through this side.
    pub fn inward(self) -> Direction {
        self.normal().opposite()
    }

    /// Cells between the anchor and the first cell outside the node body, along
    /// [`AnchorSide::normal`]. Top and left anchors lie on the body's first
    /// row/column, right and bottom anchors just past its last one.
    pub fn exit_offset(self) -> i32 {
        match self {
            Self::Top | Self::Left => 1,
            Self::Right | Self::Bottom => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorSide, Node};
    use crate::model::geometry::{Direction, GridPoint};
    use crate::model::ids::NodeId;

    fn node(x: i32, y: i32, w: i32, h: i32) -> Node {
        Node::new(NodeId::new("n").unwrap(), x, y, w, h)
    }

    #[test]
    fn anchors_sit_on_side_midpoints() {
        let n = node(10, 20, 16, 8);
        assert_eq!(n.anchor(AnchorSide::Top), GridPoint::new(18, 20));
        assert_eq!(n.anchor(AnchorSide::Right), GridPoint::new(26, 24));
        assert_eq!(n.anchor(AnchorSide::Bottom), GridPoint::new(18, 28));
        assert_eq!(n.anchor(AnchorSide::Left), GridPoint::new(10, 24));
        assert_eq!(n.center(), GridPoint::new(18, 24));
    }

    #[test]
    fn inward_heading_points_into_the_node() {
        assert_eq!(AnchorSide::Left.inward(), Direction::Right);
        assert_eq!(AnchorSide::Top.inward(), Direction::Down);
    }

    #[test]
    fn exit_offset_reaches_the_first_cell_outside_the_body() {
        let n = node(10, 20, 16, 8);
        let body = n.footprint();
        for side in [AnchorSide::Top, AnchorSide::Right, AnchorSide::Bottom, AnchorSide::Left] {
            let exit = n.anchor(side).step(side.normal(), side.exit_offset());
            assert!(!body.contains(exit), "{side:?} exit {exit:?} is inside the body");
            assert!(body.contains(exit.step(side.inward(), 1)), "{side:?} exit {exit:?} is not adjacent");
        }
    }
}
