// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data types shared by the router and the scene cache.

pub mod connection;
pub mod geometry;
pub mod ids;
pub mod node;

pub use connection::{
    ConnectionPointMeta, Endpoint, EndpointRole, RouteKind, RoutedConnection, Waypoints,
};
pub use geometry::{Direction, GridPoint, Rect};
pub use ids::{ConnectionId, IdError, NodeId};
pub use node::{AnchorSide, Node};
