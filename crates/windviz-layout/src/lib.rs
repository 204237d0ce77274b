#![warn(missing_docs)]

//! Explosion, furl, and ordering engines for windviz.
//!
//! This crate turns a reconstructed assembly into an interactive one:
//! it measures part bounding boxes (from wire geometry), derives a
//! deterministic stacking order, computes per-part explosion
//! displacements, and composes the tail-furl transform chain. All
//! per-frame entry points mutate part transforms in place and are
//! idempotent with respect to the controller value.
//!
//! # Example
//!
//! ```ignore
//! use windviz_layout::{SetupContext, ToolVisualizer, Visualizer};
//!
//! let mut visualizer = ToolVisualizer::new();
//! let ctx = SetupContext::default();
//! let display_order = visualizer.setup(&mut assembly, &ctx)?;
//! let mut controller = visualizer.initial_controller();
//! // per frame:
//! visualizer.explode(&mut assembly, &controller);
//! ```

pub mod bbox;
pub mod controller;
pub mod error;
pub mod explode;
pub mod furl;
pub mod order;
pub mod sort;
pub mod visualizer;

pub use bbox::{bounding_box_of, union_box_of};
pub use controller::{Controller, MAX_EXPLODE};
pub use error::{LayoutError, Result};
pub use explode::{
    TiltedAxisExplosion, ZStackedExplosion, ALTERNATOR_TILT_ANGLE, ANCHOR_FIRST_CHILD,
    REFERENCE_LENGTH_ALONG_X,
};
pub use furl::{transforms_to_matrix, FurlChain, FurlComposer, FurlTransform, HINGE_INDEX};
pub use order::{order_parts, xy_plane_area_of, z_extrema_of, Z_MIN_PART_NAMES};
pub use sort::{sort_by_float_criteria, SortCriterion, SortDirection};
pub use visualizer::{
    SetupContext, ToolVisualizer, Visualizer, WindTurbineVisualizer,
    TAIL_HINGE_EXPLOSION_FACTOR, TAIL_NAME,
};
