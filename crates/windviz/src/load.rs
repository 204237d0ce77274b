//! Cancelable pipeline from raw imported nodes to a driveable
//! visualization.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};
use windviz_layout::{Controller, FurlChain, SetupContext, Visualizer};
use windviz_scene::{group_composites, group_wires, Assembly, ImportedNode, RenderHandle};

use crate::error::{Result, VizError};
use crate::panel::{self, LabelGroups};

/// Cooperative cancellation flag shared between the UI and the loader.
///
/// Cloning yields a handle to the same flag, so a token handed to a
/// long load can be canceled from the caller's side.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Fresh, un-canceled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<()> {
        if self.is_canceled() {
            Err(VizError::Canceled)
        } else {
            Ok(())
        }
    }
}

/// Parse the furl chain sidecar that accompanies the wind turbine's
/// exported scene.
pub fn parse_furl_chain(json: &str) -> Result<FurlChain> {
    serde_json::from_str(json).map_err(|e| VizError::Load(e.to_string()))
}

/// Provider of the raw scene for an assembly, typically a fetch of an
/// exported Wavefront scene plus its furl chain sidecar.
pub trait SceneSource {
    /// Fetch the imported nodes of the scene.
    fn fetch_nodes(&mut self) -> Result<Vec<ImportedNode>>;

    /// Furl chain metadata, for assemblies that have a tail.
    fn furl_chain(&mut self) -> Result<Option<FurlChain>> {
        Ok(None)
    }

    /// Part names whose layout order must be forced, in the forced
    /// order.
    fn sort_overrides(&mut self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// A fully set-up assembly with its visualizer and control state.
pub struct Visualization {
    assembly: Assembly,
    visualizer: Box<dyn Visualizer>,
    controller: Controller,
    visibility_groups: LabelGroups,
    transparency_groups: LabelGroups,
    display_names: Vec<String>,
}

impl Visualization {
    /// Parts in display order, for building the hover list.
    pub fn display_names(&self) -> &[String] {
        &self.display_names
    }

    /// The assembled scene.
    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    /// Control state read and written by the panel.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable control state, for slider and toggle callbacks.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Label groups backing the visibility toggles.
    pub fn visibility_groups(&self) -> &LabelGroups {
        &self.visibility_groups
    }

    /// Label groups backing the transparency sliders.
    pub fn transparency_groups(&self) -> &LabelGroups {
        &self.transparency_groups
    }

    /// Recompute part placement and visibility from the current
    /// controller values. Returns per-mesh opacity updates for the
    /// renderer; positions are read back from the assembly.
    pub fn render_tick(&mut self) -> Vec<(RenderHandle, f64)> {
        self.visualizer.explode(&mut self.assembly, &self.controller);
        self.visualizer
            .handle_render(&mut self.assembly, &self.controller);
        panel::apply_visibility(&mut self.assembly, &self.visibility_groups, &self.controller);
        panel::transparency_updates(
            &mut self.assembly,
            &self.transparency_groups,
            &self.controller,
        )
    }

    /// Restore the initial controller values and re-run one tick, so
    /// the next assembly starts from a clean scene.
    pub fn reset(&mut self) -> Vec<(RenderHandle, f64)> {
        self.controller.reset();
        self.render_tick()
    }
}

/// Assembly flavor selected by the page being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyKind {
    /// The complete wind turbine.
    WindTurbine,
    /// A mold or jig used to build one.
    Tool,
}

/// Build a visualization from a scene source.
///
/// The token is consulted before and after the fetch and before each
/// step that mutates the part set, so a superseded load stops without
/// touching anything further.
pub fn build_visualization(
    kind: AssemblyKind,
    source: &mut dyn SceneSource,
    token: &CancellationToken,
) -> Result<Visualization> {
    token.check()?;
    let nodes = source.fetch_nodes()?;
    let furl_chain = source.furl_chain()?;
    let sort_overrides = source.sort_overrides()?;
    token.check()?;
    debug!(nodes = nodes.len(), "scene fetched");

    let parts = group_wires(nodes);
    let mut visualizer = crate::create_visualizer(kind);
    let ctx = SetupContext {
        furl_chain: furl_chain.as_ref(),
        sort_overrides: &sort_overrides,
    };

    token.check()?;
    let configs = visualizer.group_configurations(&parts, &ctx)?;
    let parts = group_composites(parts, configs)?;
    let mut assembly = Assembly::new(parts);

    token.check()?;
    let display_names = visualizer.setup(&mut assembly, &ctx)?;
    let controller = visualizer.initial_controller();

    let (visibility_groups, transparency_groups) = match kind {
        AssemblyKind::WindTurbine => (
            panel::turbine_visibility_groups(),
            panel::turbine_transparency_groups(),
        ),
        AssemblyKind::Tool => (panel::tool_visibility_groups(&display_names), Vec::new()),
    };

    info!(?kind, parts = assembly.parts().len(), "visualization ready");
    Ok(Visualization {
        assembly,
        visualizer,
        controller,
        visibility_groups,
        transparency_groups,
        display_names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use windviz_math::Point3;

    struct StaticSource {
        nodes: Vec<ImportedNode>,
    }

    impl SceneSource for StaticSource {
        fn fetch_nodes(&mut self) -> Result<Vec<ImportedNode>> {
            Ok(std::mem::take(&mut self.nodes))
        }
    }

    fn boxed_node(name: &str, handle: u64, min: [f64; 3], max: [f64; 3]) -> ImportedNode {
        ImportedNode {
            name: name.to_string(),
            vertices: vec![
                Point3::new(min[0], min[1], min[2]),
                Point3::new(max[0], max[1], max[2]),
            ],
            handle: RenderHandle(handle),
        }
    }

    fn tool_source() -> StaticSource {
        StaticSource {
            nodes: vec![
                boxed_node("Stator_Mold_BaseMesh", 0, [0.0, 0.0, 0.0], [100.0, 100.0, 10.0]),
                boxed_node("Stator_Mold_BaseWire1", 1, [0.0, 0.0, 0.0], [100.0, 100.0, 10.0]),
                boxed_node("Stator_Mold_LidMesh", 2, [0.0, 0.0, 10.0], [100.0, 100.0, 20.0]),
                boxed_node("Stator_Mold_LidWire1", 3, [0.0, 0.0, 10.0], [100.0, 100.0, 20.0]),
            ],
        }
    }

    #[test]
    fn test_canceled_token_stops_before_fetch() {
        let token = CancellationToken::new();
        token.cancel();
        let err = build_visualization(AssemblyKind::Tool, &mut tool_source(), &token)
            .err()
            .unwrap();
        assert!(err.is_canceled());
    }

    #[test]
    fn test_tool_pipeline_produces_exploded_visualization() {
        let token = CancellationToken::new();
        let viz = build_visualization(AssemblyKind::Tool, &mut tool_source(), &token);
        let mut viz = viz.unwrap();

        // Tools start fully exploded, higher parts named first.
        assert_eq!(viz.controller().explode, windviz_layout::MAX_EXPLODE);
        assert_eq!(viz.display_names(), ["Stator_Mold_Lid", "Stator_Mold_Base"]);

        viz.render_tick();
        let base_z = viz.assembly().find("Stator_Mold_Base").unwrap().transform.position.z;
        let lid_z = viz.assembly().find("Stator_Mold_Lid").unwrap().transform.position.z;
        assert!(lid_z > base_z);
    }

    #[test]
    fn test_furl_chain_sidecar_parses() {
        let json = r#"{
            "transforms": [
                {"position": [0.0, 0.0, 0.0], "axis": [0.0, 0.0, 1.0], "angle": 0.0},
                {"position": [12.0, 3.0, 0.0], "axis": [0.0, 0.0, 1.0], "angle": 0.1}
            ],
            "maximum_angle": 105.0
        }"#;
        let chain = parse_furl_chain(json).unwrap();
        assert_eq!(chain.transforms.len(), 2);
        assert_eq!(chain.maximum_angle, 105.0);

        assert!(parse_furl_chain("not json").is_err());
    }

    #[test]
    fn test_token_clones_share_the_flag() {
        let token = CancellationToken::new();
        let handle = token.clone();
        handle.cancel();
        assert!(token.is_canceled());
    }
}
