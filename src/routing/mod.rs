// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal connection routing.
//!
//! [`ConnectionRouter`] stamps every node onto a fresh [`Grid`], resolves the
//! anchor sides of both endpoints, searches A→B and B→A with [`PathFinder`] and
//! keeps the cleaner result as a compressed polyline in real-world units.

pub mod anchor;
pub mod builder;
pub mod compress;
pub mod config;
pub mod error;
pub mod grid;
pub mod router;
pub mod search;

pub use anchor::resolve_anchor;
pub use builder::{Footprint, GridBuilder};
pub use compress::{collapse_collinear, compress, Polyline};
pub use config::RouterConfig;
pub use error::RouteError;
pub use grid::{Grid, GridCell};
pub use router::ConnectionRouter;
pub use search::{PathFinder, SearchRequest};
