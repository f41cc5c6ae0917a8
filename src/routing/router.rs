// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{
    AnchorSide, ConnectionPointMeta, Endpoint, EndpointRole, GridPoint, Node, NodeId, Rect,
    RouteKind, RoutedConnection,
};

use super::anchor::resolve_anchor;
use super::builder::GridBuilder;
use super::compress::{collapse_collinear, compress, Polyline};
use super::config::RouterConfig;
use super::error::RouteError;
use super::grid::Grid;
use super::search::{PathFinder, SearchRequest};

/// One resolved end of a connection.
#[derive(Debug, Clone, Copy)]
struct Leg<'a> {
    node: &'a Node,
    side: AnchorSide,
}

impl Leg<'_> {
    fn anchor(&self) -> GridPoint {
        self.node.anchor(self.side)
    }

    /// First cell outside the node's own core, straight out from the anchor.
    fn port(&self, config: &RouterConfig) -> GridPoint {
        self.anchor().step(self.side.normal(), config.port_distance(self.side))
    }

    /// First cell outside the node body, straight out from the anchor.
    fn exit(&self) -> GridPoint {
        self.anchor().step(self.side.normal(), self.side.exit_offset())
    }
}

#[derive(Debug)]
enum SearchOutcome {
    Routed(Polyline),
    Unreachable,
    OutsideWindow { port: GridPoint, window: Rect },
}

/// Routes a single connection between two placed nodes.
///
/// Every call is self-contained: it builds its own grids and search state and
/// reads `nodes` only, so independent connections may be routed concurrently.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRouter {
    config: RouterConfig,
}

impl ConnectionRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Computes the polyline from `from` to `to` around every node in `nodes`.
    ///
    /// Only unknown endpoint ids are errors. When no orthogonal route exists the
    /// result is a straight segment between the node centers with
    /// [`RouteKind::Fallback`].
    pub fn route(
        &self,
        from: &Endpoint,
        to: &Endpoint,
        nodes: &[Node],
    ) -> Result<RoutedConnection, RouteError> {
        let from_node = find_node(nodes, &from.node, EndpointRole::From)?;
        let to_node = find_node(nodes, &to.node, EndpointRole::To)?;

        let source = Leg {
            node: from_node,
            side: from.side.unwrap_or_else(|| resolve_anchor(from_node, to_node)),
        };
        let sink =
            Leg { node: to_node, side: to.side.unwrap_or_else(|| resolve_anchor(to_node, from_node)) };

        let window = self.search_window(from_node, to_node);
        let mut finder = PathFinder::new(self.config.approach_radius);
        let forward = self.search(&mut finder, nodes, window, source, sink);
        let reverse = self.search(&mut finder, nodes, window, sink, source);

        let (polyline, kind) = match choose(forward, reverse) {
            Ok(chosen) => chosen,
            Err((forward, reverse)) => {
                tracing::warn!(
                    from = %from.node,
                    to = %to.node,
                    ?forward,
                    ?reverse,
                    "no orthogonal route, falling back to a straight segment"
                );
                let polyline: Polyline =
                    [from_node.center(), to_node.center()].into_iter().collect();
                (polyline, RouteKind::Fallback)
            }
        };
        tracing::debug!(from = %from.node, to = %to.node, ?kind, points = polyline.len(), "routed");

        let points = [
            self.endpoint_meta(source, EndpointRole::From, &polyline),
            self.endpoint_meta(sink, EndpointRole::To, &polyline),
        ];
        let destination = match kind {
            RouteKind::Fallback => to_node.center(),
            RouteKind::Forward | RouteKind::Reverse => sink.anchor(),
        };
        let waypoints = compress(&polyline, destination, self.config.cell_size);
        Ok(RoutedConnection { waypoints, points, kind })
    }

    /// The square grid window searched for a connection between `a` and `b`.
    ///
    /// Its side is the larger extent of both footprints (at least `min_extent`)
    /// plus `margin` on each side, centered on the footprints.
    pub fn search_window(&self, a: &Node, b: &Node) -> Rect {
        let bbox = a.footprint().union(&b.footprint());
        let span = bbox.w.max(bbox.h).max(self.config.min_extent);
        let margin = self.config.margin.max(0);
        let side = (span + 2 * margin).max(1);
        Rect::new(
            bbox.x - margin - (span - bbox.w) / 2,
            bbox.y - margin - (span - bbox.h) / 2,
            side,
            side,
        )
    }

    fn search(
        &self,
        finder: &mut PathFinder,
        nodes: &[Node],
        window: Rect,
        source: Leg<'_>,
        sink: Leg<'_>,
    ) -> SearchOutcome {
        let mut start = source.port(&self.config);
        let mut target = sink.port(&self.config);
        for port in [start, target] {
            if !window.contains(port) {
                return SearchOutcome::OutsideWindow { port, window };
            }
        }

        let builder = GridBuilder::new(&self.config);
        let origin = GridPoint::new(window.x, window.y);
        let (width, height) = (window.w as usize, window.h as usize);
        let mut grid = builder.build(nodes, origin, width, height);
        if !is_open(&grid, start) || !is_open(&grid, target) {
            // A port sits in another node's core: leave straight off the bodies instead.
            let hugged = [&source.node.id, &sink.node.id];
            grid = builder.hugging(&hugged).build(nodes, origin, width, height);
            (start, target) = (source.exit(), sink.exit());
            if !is_open(&grid, start) || !is_open(&grid, target) {
                return SearchOutcome::Unreachable;
            }
        }

        let request = SearchRequest {
            start,
            heading: source.side.normal(),
            target,
            arrival: sink.side.inward(),
        };
        let path = finder.find_path(&grid, &request);
        if path.is_empty() {
            return SearchOutcome::Unreachable;
        }

        let mut cells = Vec::with_capacity(path.len() + 2);
        cells.push(source.anchor());
        cells.extend(path);
        cells.push(sink.anchor());
        SearchOutcome::Routed(collapse_collinear(&cells))
    }

    fn endpoint_meta(
        &self,
        leg: Leg<'_>,
        role: EndpointRole,
        polyline: &[GridPoint],
    ) -> ConnectionPointMeta {
        let (end, neighbor) = match role {
            EndpointRole::From => (polyline.first(), polyline.get(1)),
            EndpointRole::To => {
                (polyline.last(), polyline.len().checked_sub(2).and_then(|idx| polyline.get(idx)))
            }
        };
        let heading = match (end, neighbor) {
            (Some(end), Some(neighbor)) if end != neighbor => {
                (f64::from(end.x() - neighbor.x()), f64::from(end.y() - neighbor.y()))
            }
            _ => {
                let (dx, dy) = leg.side.inward().delta();
                (f64::from(dx), f64::from(dy))
            }
        };

        let anchor = leg.anchor();
        let cell = self.config.cell_size;
        let at = (f64::from(anchor.x()) * cell, f64::from(anchor.y()) * cell);
        ConnectionPointMeta::new(leg.node.id.clone(), leg.side, at, heading)
    }
}

/// Prefers the route with fewer points; ties keep the forward one. A reverse
/// route is flipped back into `from -> to` order. Hands both outcomes back when
/// neither search succeeded.
fn choose(
    forward: SearchOutcome,
    reverse: SearchOutcome,
) -> Result<(Polyline, RouteKind), (SearchOutcome, SearchOutcome)> {
    match (forward, reverse) {
        (SearchOutcome::Routed(forward), SearchOutcome::Routed(reverse)) => {
            if reverse.len() < forward.len() {
                Ok((reverse.into_iter().rev().collect(), RouteKind::Reverse))
            } else {
                Ok((forward, RouteKind::Forward))
            }
        }
        (SearchOutcome::Routed(forward), _) => Ok((forward, RouteKind::Forward)),
        (_, SearchOutcome::Routed(reverse)) => {
            Ok((reverse.into_iter().rev().collect(), RouteKind::Reverse))
        }
        (forward, reverse) => Err((forward, reverse)),
    }
}

fn is_open(grid: &Grid, point: GridPoint) -> bool {
    grid.cell(point).is_some_and(|cell| cell.is_walkable())
}

fn find_node<'a>(nodes: &'a [Node], id: &NodeId, role: EndpointRole) -> Result<&'a Node, RouteError> {
    nodes
        .iter()
        .find(|node| &node.id == id)
        .ok_or_else(|| RouteError::UnknownNode { role, node_id: id.clone() })
}
