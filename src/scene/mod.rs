// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connection cache over a set of placed nodes.
//!
//! Routes are recomputed only for connections explicitly marked dirty: by moving
//! or resizing one of their endpoint nodes, or by [`Scene::invalidate`]. Every
//! other cached route is reused verbatim, even if a moved node now crosses it.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::{ConnectionId, Endpoint, Node, NodeId, RoutedConnection};
use crate::routing::{ConnectionRouter, RouteError, RouterConfig};

pub mod file;

pub use file::{ConnectionEntry, RoutedEntry, RoutedScene, SceneFile, SceneFileError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: Endpoint,
    pub to: Endpoint,
}

impl Connection {
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        Self { from, to }
    }

    pub fn touches(&self, node: &NodeId) -> bool {
        &self.from.node == node || &self.to.node == node
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("unknown connection {0}")]
    UnknownConnection(ConnectionId),
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),
    #[error("connection {0} already exists")]
    DuplicateConnection(ConnectionId),
    #[error("failed to route connection {id}: {source}")]
    Route {
        id: ConnectionId,
        #[source]
        source: RouteError,
    },
}

#[derive(Debug, Clone)]
struct Slot {
    connection: Connection,
    routed: Option<RoutedConnection>,
    dirty: bool,
}

#[derive(Debug, Default)]
pub struct Scene {
    router: ConnectionRouter,
    nodes: BTreeMap<NodeId, Node>,
    connections: BTreeMap<ConnectionId, Slot>,
    generation: u64,
}

impl Scene {
    pub fn new(config: RouterConfig) -> Self {
        Self { router: ConnectionRouter::new(config), ..Self::default() }
    }

    pub fn router(&self) -> &ConnectionRouter {
        &self.router
    }

    /// Bumped once by every [`Scene::refresh`] that re-routed something.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn insert_node(&mut self, node: Node) -> Result<(), SceneError> {
        if self.nodes.contains_key(&node.id) {
            return Err(SceneError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    pub fn move_node(&mut self, id: &NodeId, x: i32, y: i32) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or_else(|| SceneError::UnknownNode(id.clone()))?;
        if (node.x, node.y) != (x, y) {
            node.x = x;
            node.y = y;
            self.mark_touching(id);
        }
        Ok(())
    }

    pub fn resize_node(
        &mut self,
        id: &NodeId,
        width: i32,
        height: i32,
    ) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or_else(|| SceneError::UnknownNode(id.clone()))?;
        if (node.width, node.height) != (width, height) {
            node.width = width;
            node.height = height;
            self.mark_touching(id);
        }
        Ok(())
    }

    /// Removes the node together with every connection that references it.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<Node, SceneError> {
        let node = self.nodes.remove(id).ok_or_else(|| SceneError::UnknownNode(id.clone()))?;
        self.connections.retain(|_, slot| !slot.connection.touches(id));
        Ok(node)
    }

    /// Adds a connection. It starts dirty and is routed by the next refresh.
    pub fn connect(&mut self, id: ConnectionId, connection: Connection) -> Result<(), SceneError> {
        if self.connections.contains_key(&id) {
            return Err(SceneError::DuplicateConnection(id));
        }
        for endpoint in [&connection.from, &connection.to] {
            if !self.nodes.contains_key(&endpoint.node) {
                return Err(SceneError::UnknownNode(endpoint.node.clone()));
            }
        }
        self.connections.insert(id, Slot { connection, routed: None, dirty: true });
        Ok(())
    }

    pub fn disconnect(&mut self, id: &ConnectionId) -> Result<Connection, SceneError> {
        self.connections
            .remove(id)
            .map(|slot| slot.connection)
            .ok_or_else(|| SceneError::UnknownConnection(id.clone()))
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(id).map(|slot| &slot.connection)
    }

    /// Forces the connection to be re-routed by the next refresh.
    pub fn invalidate(&mut self, id: &ConnectionId) -> Result<(), SceneError> {
        let slot =
            self.connections.get_mut(id).ok_or_else(|| SceneError::UnknownConnection(id.clone()))?;
        slot.dirty = true;
        Ok(())
    }

    pub fn invalidate_all(&mut self) {
        for slot in self.connections.values_mut() {
            slot.dirty = true;
        }
    }

    pub fn is_dirty(&self, id: &ConnectionId) -> Option<bool> {
        self.connections.get(id).map(|slot| slot.dirty)
    }

    pub fn dirty_count(&self) -> usize {
        self.connections.values().filter(|slot| slot.dirty).count()
    }

    /// The last computed route, if the connection has been routed at least once.
    pub fn routed(&self, id: &ConnectionId) -> Option<&RoutedConnection> {
        self.connections.get(id).and_then(|slot| slot.routed.as_ref())
    }

    pub fn routes(&self) -> impl Iterator<Item = (&ConnectionId, &RoutedConnection)> {
        self.connections.iter().filter_map(|(id, slot)| slot.routed.as_ref().map(|r| (id, r)))
    }

    /// Re-routes every dirty connection and returns how many were routed.
    ///
    /// Node positions are snapshotted first and the connections are routed in
    /// parallel against that snapshot. On error nothing is updated.
    pub fn refresh(&mut self) -> Result<usize, SceneError> {
        let dirty = self
            .connections
            .iter()
            .filter(|(_, slot)| slot.dirty)
            .map(|(id, slot)| (id.clone(), slot.connection.clone()))
            .collect::<Vec<_>>();
        if dirty.is_empty() {
            return Ok(0);
        }

        let nodes = self.nodes.values().cloned().collect::<Vec<_>>();
        let router = &self.router;
        let results = dirty
            .into_par_iter()
            .map(|(id, connection)| {
                let result = router.route(&connection.from, &connection.to, &nodes);
                (id, result)
            })
            .collect::<Vec<_>>();

        let mut routed = Vec::with_capacity(results.len());
        for (id, result) in results {
            match result {
                Ok(route) => routed.push((id, route)),
                Err(source) => return Err(SceneError::Route { id, source }),
            }
        }

        let count = routed.len();
        let degraded = routed.iter().filter(|(_, route)| route.is_degraded()).count();
        for (id, route) in routed {
            if let Some(slot) = self.connections.get_mut(&id) {
                slot.routed = Some(route);
                slot.dirty = false;
            }
        }
        self.generation += 1;
        tracing::debug!(count, degraded, generation = self.generation, "refreshed connections");
        Ok(count)
    }

    fn mark_touching(&mut self, node: &NodeId) {
        for slot in self.connections.values_mut() {
            if slot.connection.touches(node) {
                slot.dirty = true;
            }
        }
    }
}
