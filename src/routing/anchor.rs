// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{AnchorSide, Node};

/// Picks the side of `node` that faces `other`.
///
/// The axis with the larger top-left delta wins. When both deltas have the same
/// magnitude the vertical axis wins, so coincident nodes resolve to [`AnchorSide::Top`].
pub fn resolve_anchor(node: &Node, other: &Node) -> AnchorSide {
    let dx = other.x - node.x;
    let dy = other.y - node.y;

    if dx.abs() > dy.abs() {
        if dx > 0 {
            AnchorSide::Right
        } else {
            AnchorSide::Left
        }
    } else if dy > 0 {
        AnchorSide::Bottom
    } else {
        AnchorSide::Top
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::resolve_anchor;
    use crate::model::{AnchorSide, Node, NodeId};

    fn at(x: i32, y: i32) -> Node {
        Node::new(NodeId::new("n").unwrap(), x, y, 16, 16)
    }

    #[rstest]
    #[case((40, 0), AnchorSide::Right)]
    #[case((-40, 3), AnchorSide::Left)]
    #[case((2, 30), AnchorSide::Bottom)]
    #[case((-5, -30), AnchorSide::Top)]
    #[case((10, 10), AnchorSide::Bottom)]
    #[case((10, -10), AnchorSide::Top)]
    #[case((0, 0), AnchorSide::Top)]
    fn faces_the_dominant_axis(#[case] other: (i32, i32), #[case] expected: AnchorSide) {
        assert_eq!(resolve_anchor(&at(0, 0), &at(other.0, other.1)), expected);
    }
}
