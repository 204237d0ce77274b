#![warn(missing_docs)]

//! Scene data model and part reconstruction for windviz.
//!
//! The CAD exporter emits a flat scene of named nodes: one mesh-bearing
//! node per part plus zero or more `<name>Wire<N>` edge-overlay nodes.
//! This crate reassembles those nodes into [`Part`] values, groups
//! related parts into named composites, and provides name-based lookup
//! through one level of composite nesting.
//!
//! Rendering is out of scope: meshes and wire overlays are referenced
//! through opaque [`RenderHandle`]s owned by the hosting renderer. Wire
//! vertex positions are kept because downstream bounding-box analysis
//! reads wire geometry, not mesh geometry.

pub mod composite;
pub mod error;
pub mod grouper;
pub mod node;
pub mod part;
pub mod registry;

pub use composite::{array_group_configs, group_composites, GroupConfig};
pub use error::{Result, SceneError};
pub use grouper::group_wires;
pub use node::{ImportedNode, NodeTransform, RenderHandle};
pub use part::{Part, PartBody, WireOverlay};
pub use registry::{find_part, find_part_mut, Assembly, PartRegistry};
