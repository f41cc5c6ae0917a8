// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use super::node::AnchorSide;

/// One end of a connection: a node, optionally pinned to a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub node: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<AnchorSide>,
}

impl Endpoint {
    pub fn new(node: NodeId) -> Self {
        Self { node, side: None }
    }

    pub fn pinned(node: NodeId, side: AnchorSide) -> Self {
        Self { node, side: Some(side) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    From,
    To,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::From => "from",
            Self::To => "to",
        })
    }
}

/// Flat `[x0, y0, x1, y1, ...]` polyline in real-world (pixel) coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Waypoints {
    coords: Vec<f64>,
}

impl Waypoints {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let points = points.into_iter();
        let mut coords = Vec::with_capacity(points.size_hint().0 * 2);
        for (x, y) in points {
            coords.push(x);
            coords.push(y);
        }
        Self { coords }
    }

    /// The flat coordinate list handed to renderers.
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Number of coordinates (twice the number of points).
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.coords.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points().next()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points().last()
    }
}

/// Per-endpoint rendering metadata.
///
/// `(x, y)` is the anchor in pixels. The flags describe the polyline segment
/// touching this endpoint, oriented in the direction the line travels as it
/// enters the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPointMeta {
    pub node: NodeId,
    pub side: AnchorSide,
    pub x: f64,
    pub y: f64,
    pub horizontal: bool,
    pub vertical: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ConnectionPointMeta {
    pub(crate) fn new(node: NodeId, side: AnchorSide, at: (f64, f64), heading: (f64, f64)) -> Self {
        let (dx, dy) = heading;
        Self {
            node,
            side,
            x: at.0,
            y: at.1,
            horizontal: dy == 0.0 && dx != 0.0,
            vertical: dx == 0.0 && dy != 0.0,
            left: dx < 0.0,
            right: dx > 0.0,
            up: dy < 0.0,
            down: dy > 0.0,
        }
    }
}

/// How a connection's polyline was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Searched from the `from` endpoint towards the `to` endpoint.
    Forward,
    /// Searched from `to` towards `from`, then reversed.
    Reverse,
    /// No search succeeded; straight segment between node centers.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedConnection {
    pub waypoints: Waypoints,
    pub points: [ConnectionPointMeta; 2],
    pub kind: RouteKind,
}

impl RoutedConnection {
    pub fn is_degraded(&self) -> bool {
        self.kind == RouteKind::Fallback
    }
}
