// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{GridPoint, Node, NodeId, Rect};

use super::config::{RouterConfig, BASE_CELL_COST};
use super::grid::Grid;

/// The three stamped regions of a node, from the inside out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    /// Unwalkable: the node body plus `core_margin`.
    pub core: Rect,
    /// Walkable, `near_cost`.
    pub near: Rect,
    /// Walkable, `far_cost`.
    pub far: Rect,
}

impl Footprint {
    pub fn of(node: &Node, config: &RouterConfig) -> Self {
        let core = node.footprint().expand(config.core_margin.max(0));
        let near = core.expand(config.near_width.max(0));
        let far = near.expand(config.far_width.max(0));
        Self { core, near, far }
    }

    /// Like [`Footprint::of`], but only the node body is unwalkable; the core
    /// margin is stamped with `near_cost` instead.
    pub fn hugging(node: &Node, config: &RouterConfig) -> Self {
        Self { core: node.footprint(), ..Self::of(node, config) }
    }
}

/// Stamps node footprints onto a fresh [`Grid`].
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder<'a> {
    config: &'a RouterConfig,
    hugged: &'a [&'a NodeId],
}

impl<'a> GridBuilder<'a> {
    pub fn new(config: &'a RouterConfig) -> Self {
        Self { config, hugged: &[] }
    }

    /// Stamps the nodes in `ids` with [`Footprint::hugging`], so a path may run
    /// right along their bodies.
    pub fn hugging(self, ids: &'a [&'a NodeId]) -> Self {
        Self { hugged: ids, ..self }
    }

    /// Builds a `width × height` grid anchored at `origin` with every node in
    /// `nodes` stamped as an obstacle. Nodes entirely outside the window are skipped.
    pub fn build(&self, nodes: &[Node], origin: GridPoint, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(origin, width, height, BASE_CELL_COST);
        let bounds = grid.bounds();

        for node in nodes {
            let footprint = if self.hugged.contains(&&node.id) {
                Footprint::hugging(node, self.config)
            } else {
                Footprint::of(node, self.config)
            };
            if !footprint.far.overlaps(&bounds) {
                continue;
            }
            grid.raise(footprint.far, self.config.far_cost, true);
            grid.raise(footprint.near, self.config.near_cost, true);
            grid.block(footprint.core);
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::{Footprint, GridBuilder};
    use crate::model::{GridPoint, Node, NodeId, Rect};
    use crate::routing::config::{RouterConfig, BASE_CELL_COST};

    fn node(id: &str, x: i32, y: i32, w: i32, h: i32) -> Node {
        Node::new(NodeId::new(id).unwrap(), x, y, w, h)
    }

    #[test]
    fn footprint_tiers_nest_around_the_node() {
        let config = RouterConfig::default();
        let footprint = Footprint::of(&node("a", 10, 10, 4, 4), &config);
        assert_eq!(footprint.core, Rect::new(8, 8, 8, 8));
        assert_eq!(footprint.near, Rect::new(5, 5, 14, 14));
        assert_eq!(footprint.far, Rect::new(1, 1, 22, 22));
    }

    #[test]
    fn stamps_core_near_and_far_tiers() {
        let config = RouterConfig::default();
        let grid = GridBuilder::new(&config).build(
            &[node("a", 10, 10, 4, 4)],
            GridPoint::new(0, 0),
            30,
            30,
        );

        let core = grid.cell(GridPoint::new(8, 12)).unwrap();
        assert!(!core.is_walkable());

        let near = grid.cell(GridPoint::new(7, 12)).unwrap();
        assert!(near.is_walkable());
        assert_eq!(near.cost(), config.near_cost);

        let far = grid.cell(GridPoint::new(4, 12)).unwrap();
        assert_eq!(far.cost(), config.far_cost);

        let open = grid.cell(GridPoint::new(0, 12)).unwrap();
        assert_eq!(open.cost(), BASE_CELL_COST);
    }

    #[test]
    fn hugged_nodes_block_only_their_body() {
        let config = RouterConfig::default();
        let a = node("a", 10, 10, 4, 4);
        let b = node("b", 20, 10, 4, 4);
        let hugged = [&a.id];
        let grid = GridBuilder::new(&config).hugging(&hugged).build(
            &[a.clone(), b.clone()],
            GridPoint::new(0, 0),
            30,
            30,
        );

        let margin = grid.cell(GridPoint::new(14, 12)).unwrap();
        assert!(margin.is_walkable());
        assert_eq!(margin.cost(), config.near_cost);
        assert!(!grid.cell(GridPoint::new(13, 12)).unwrap().is_walkable());
        assert!(!grid.cell(GridPoint::new(18, 12)).unwrap().is_walkable());
        assert_eq!(Footprint::hugging(&b, &config).near, Footprint::of(&b, &config).near);
    }

    #[test]
    fn skips_nodes_outside_the_window() {
        let config = RouterConfig::default();
        let grid = GridBuilder::new(&config).build(
            &[node("far-away", 500, 500, 10, 10)],
            GridPoint::new(0, 0),
            20,
            20,
        );
        assert!((0..20).all(|y| (0..20).all(|x| {
            grid.cell(GridPoint::new(x, y)).is_some_and(|cell| cell.cost() == BASE_CELL_COST)
        })));
    }
}
