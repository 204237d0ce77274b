//! Assembly visualization for a locally manufactured wind turbine.
//!
//! Ties the scene and layout crates together with the turbine-specific
//! part tables: given the nodes of an exported Wavefront scene, builds
//! an [`Assembly`], picks the right [`Visualizer`] for the page, and
//! exposes the control state the panel drives between frames.
//!
//! ```
//! use windviz::{build_visualization, AssemblyKind, CancellationToken};
//! # use windviz::{SceneSource, Result, ImportedNode};
//! # struct Fetcher;
//! # impl SceneSource for Fetcher {
//! #     fn fetch_nodes(&mut self) -> Result<Vec<ImportedNode>> { Ok(Vec::new()) }
//! # }
//! # fn demo(mut source: Fetcher) -> Result<()> {
//! let token = CancellationToken::new();
//! let mut viz = build_visualization(AssemblyKind::Tool, &mut source, &token)?;
//! viz.controller_mut().explode = 50.0;
//! let opacity_updates = viz.render_tick();
//! # drop(opacity_updates);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod load;
pub mod material;
pub mod panel;
pub mod parts;
pub mod tooltip;

pub use error::{Result, VizError};
pub use load::{
    build_visualization, parse_furl_chain, AssemblyKind, CancellationToken, SceneSource,
    Visualization,
};
pub use material::{material_for, Material};
pub use panel::{
    apply_visibility, tool_visibility_groups, transparency_updates, turbine_transparency_groups,
    turbine_visibility_groups, LabelGroups,
};
pub use tooltip::{tool_tooltip_label, turbine_tooltip_label};

pub use windviz_layout::{
    Controller, FurlChain, FurlTransform, ToolVisualizer, Visualizer, WindTurbineVisualizer,
    MAX_EXPLODE,
};
pub use windviz_scene::{Assembly, ImportedNode, Part, RenderHandle};

/// Visualizer for the given assembly kind, wired with the turbine part
/// tables where they apply.
pub fn create_visualizer(kind: AssemblyKind) -> Box<dyn Visualizer> {
    match kind {
        AssemblyKind::WindTurbine => Box::new(WindTurbineVisualizer::new(
            parts::explosion_factors(),
            parts::tail_part_names(),
        )),
        AssemblyKind::Tool => Box::new(ToolVisualizer::new()),
    }
}
