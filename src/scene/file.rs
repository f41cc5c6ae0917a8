// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON scene documents: input for batch routing and the routed output.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{ConnectionId, Endpoint, Node, RoutedConnection};
use crate::routing::RouterConfig;

use super::{Connection, Scene, SceneError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub id: ConnectionId,
    pub from: Endpoint,
    pub to: Endpoint,
}

/// A scene as stored on disk.
///
/// ```json
/// {
///   "config": { "cell_size": 5.0 },
///   "nodes": [{ "id": "a", "x": 0, "y": 0, "width": 16, "height": 16 }],
///   "connections": [{ "id": "a-b", "from": { "node": "a" }, "to": { "node": "b", "side": "left" } }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub config: RouterConfig,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<ConnectionEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum SceneFileError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scene document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl SceneFile {
    pub fn from_json_str(raw: &str) -> Result<Self, SceneFileError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, SceneFileError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn read(path: &Path) -> Result<Self, SceneFileError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Builds a scene with every connection dirty and nothing routed yet.
    pub fn into_scene(self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(self.config);
        for node in self.nodes {
            scene.insert_node(node)?;
        }
        for entry in self.connections {
            scene.connect(entry.id, Connection::new(entry.from, entry.to))?;
        }
        Ok(scene)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedEntry {
    pub id: ConnectionId,
    #[serde(flatten)]
    pub route: RoutedConnection,
}

/// The routed output document: one entry per routed connection, in id order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedScene {
    pub generation: u64,
    pub connections: Vec<RoutedEntry>,
}

impl Scene {
    pub fn to_routed(&self) -> RoutedScene {
        RoutedScene {
            generation: self.generation(),
            connections: self
                .routes()
                .map(|(id, route)| RoutedEntry { id: id.clone(), route: route.clone() })
                .collect(),
        }
    }
}
