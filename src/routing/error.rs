// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{EndpointRole, NodeId};

/// Contract violations surfaced by [`ConnectionRouter::route`](super::ConnectionRouter::route).
///
/// Geometric failures never show up here: they degrade to a straight route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("{role} endpoint references unknown node {node_id}")]
    UnknownNode { role: EndpointRole, node_id: NodeId },
}
