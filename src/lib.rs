// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthoroute: orthogonal connection routing for node canvases.
//!
//! Given rectangular nodes on an integer grid, [`routing::ConnectionRouter`]
//! computes an axis-aligned polyline between two of them that avoids every other
//! node, prefers straight runs and enters the destination from its anchor side.
//! [`scene::Scene`] caches routes and recomputes only connections marked dirty.

pub mod model;
pub mod routing;
pub mod scene;

pub use model::{
    AnchorSide, ConnectionId, ConnectionPointMeta, Endpoint, Node, NodeId, RouteKind,
    RoutedConnection, Waypoints,
};
pub use routing::{ConnectionRouter, RouteError, RouterConfig};
pub use scene::{Connection, Scene, SceneError};
