//! The visualizer seam: per-assembly-kind layout behavior.
//!
//! A visualizer owns the layout parameters derived at setup and drives
//! the per-frame mutations. Two implementations exist: the wind turbine
//! (tilted-axis explosion plus tail furl) and the tool assemblies
//! (z-stacked explosion with deterministic ordering).

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;
use windviz_math::Transform;
use windviz_scene::{array_group_configs, Assembly, GroupConfig, Part};

use crate::bbox::union_box_of;
use crate::controller::{Controller, MAX_EXPLODE};
use crate::error::Result;
use crate::explode::{TiltedAxisExplosion, ZStackedExplosion};
use crate::furl::{transforms_to_matrix, FurlChain, FurlComposer};
use crate::order::order_parts;

/// Name of the tail composite group created for the wind turbine.
pub const TAIL_NAME: &str = "Tail";

/// Explosion factor applied to the tail via the furl path.
pub const TAIL_HINGE_EXPLOSION_FACTOR: f64 = -10.5;

/// Inputs available to a visualizer during grouping and setup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupContext<'a> {
    /// Furl transform chain for the assembly variant, when it has a
    /// furling tail.
    pub furl_chain: Option<&'a FurlChain>,
    /// Part names whose relative explosion order is forced.
    pub sort_overrides: &'a [String],
}

/// Per-assembly-kind layout behavior.
///
/// Lifecycle: `group_configurations` runs on the freshly reconstructed
/// parts, `setup` precomputes layout parameters once per load, and
/// `explode` / `handle_render` run per frame. The per-frame methods
/// must never fail — lookup misses are warnings, not errors.
pub trait Visualizer {
    /// Initial slider state for this assembly kind.
    fn initial_controller(&self) -> Controller;

    /// Composite group configurations to apply before setup.
    fn group_configurations(&self, parts: &[Part], ctx: &SetupContext<'_>) -> Result<Vec<GroupConfig>>;

    /// Derive layout parameters, possibly reordering the assembly.
    /// Returns part names in display order for the visibility panel.
    fn setup(&mut self, assembly: &mut Assembly, ctx: &SetupContext<'_>) -> Result<Vec<String>>;

    /// Apply the explosion layout for the current controller value.
    fn explode(&mut self, assembly: &mut Assembly, controller: &Controller);

    /// Per-frame hook run after `explode`; the wind turbine uses it to
    /// recompose the tail furl transform.
    fn handle_render(&mut self, assembly: &mut Assembly, controller: &Controller) {
        let _ = (assembly, controller);
    }
}

/// Visualizer for the wind turbine assembly.
pub struct WindTurbineVisualizer {
    factors: BTreeMap<String, f64>,
    tail_parts: BTreeSet<String>,
    engine: Option<TiltedAxisExplosion>,
    furl: Option<FurlComposer>,
}

impl WindTurbineVisualizer {
    /// Create a turbine visualizer from its per-part explosion factor
    /// table and the set of part names forming the tail group.
    pub fn new(factors: BTreeMap<String, f64>, tail_parts: BTreeSet<String>) -> Self {
        Self {
            factors,
            tail_parts,
            engine: None,
            furl: None,
        }
    }
}

impl Visualizer for WindTurbineVisualizer {
    fn initial_controller(&self) -> Controller {
        Controller::new(0.0)
    }

    /// One composite group: the tail. Its container carries the
    /// composed furl matrix; each member's pose is re-expressed
    /// relative to the tail frame via the inverse matrix.
    fn group_configurations(&self, _parts: &[Part], ctx: &SetupContext<'_>) -> Result<Vec<GroupConfig>> {
        let Some(chain) = ctx.furl_chain else {
            warn!("wind turbine without a furl chain; tail will not be grouped");
            return Ok(Vec::new());
        };
        let tail_matrix = transforms_to_matrix(&chain.transforms)?;
        let member_matrix = match tail_matrix.inverse() {
            Some(inverse) => inverse,
            None => {
                warn!("tail matrix is not invertible; members keep world poses");
                Transform::identity()
            }
        };
        Ok(vec![GroupConfig {
            name: TAIL_NAME.to_owned(),
            group_matrix: Some(tail_matrix),
            members: self.tail_parts.clone(),
            configure: Some(Box::new(move |part: &mut Part| {
                part.transform.matrix_override = Some(member_matrix.clone());
            })),
        }])
    }

    fn setup(&mut self, assembly: &mut Assembly, ctx: &SetupContext<'_>) -> Result<Vec<String>> {
        let length_along_x = union_box_of(assembly.parts()).size().x;
        self.engine = Some(TiltedAxisExplosion::new(self.factors.clone(), length_along_x));
        self.furl = match ctx.furl_chain {
            Some(chain) => Some(FurlComposer::new(chain)?),
            None => None,
        };
        Ok(assembly.parts().iter().map(|p| p.name.clone()).collect())
    }

    fn explode(&mut self, assembly: &mut Assembly, controller: &Controller) {
        if let Some(engine) = &self.engine {
            engine.explode(assembly, controller);
        }
    }

    fn handle_render(&mut self, assembly: &mut Assembly, controller: &Controller) {
        let (Some(furl), Some(engine)) = (&mut self.furl, &self.engine) else {
            return;
        };
        let offset = engine.explosion_vector(controller.explode, TAIL_HINGE_EXPLOSION_FACTOR);
        let transform = furl.compose(controller.furl_angle_deg, &offset);
        match assembly.find_mut(TAIL_NAME) {
            Some(tail) => tail.transform.matrix_override = Some(transform),
            None => warn!("no tail group to furl"),
        }
    }
}

/// Visualizer for tool assemblies (stator mold, rotor mold, coil
/// winder, magnet jig).
#[derive(Debug, Default)]
pub struct ToolVisualizer {
    engine: Option<ZStackedExplosion>,
}

impl ToolVisualizer {
    /// Create a tool visualizer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visualizer for ToolVisualizer {
    /// Tools start fully exploded.
    fn initial_controller(&self) -> Controller {
        Controller::new(MAX_EXPLODE)
    }

    /// Array-indexed components (`Screw1`, `Screw2`, ...) are grouped
    /// into one composite per stripped prefix.
    fn group_configurations(&self, parts: &[Part], _ctx: &SetupContext<'_>) -> Result<Vec<GroupConfig>> {
        Ok(array_group_configs(parts))
    }

    fn setup(&mut self, assembly: &mut Assembly, ctx: &SetupContext<'_>) -> Result<Vec<String>> {
        let parts = assembly.take_parts();
        let ordered = order_parts(parts, ctx.sort_overrides);
        self.engine = Some(ZStackedExplosion::new(&ordered)?);
        // Reverse for the visibility panel: top of the stack first.
        let display_order = ordered.iter().rev().map(|p| p.name.clone()).collect();
        assembly.replace_parts(ordered);
        Ok(display_order)
    }

    fn explode(&mut self, assembly: &mut Assembly, controller: &Controller) {
        if let Some(engine) = &self.engine {
            engine.explode(assembly, controller);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furl::FurlTransform;
    use windviz_math::{Point3, Vec3};
    use windviz_scene::{group_composites, RenderHandle, WireOverlay};

    fn boxed_part(name: &str, min: [f64; 3], max: [f64; 3]) -> Part {
        let wire = WireOverlay {
            handle: RenderHandle(0),
            vertices: vec![
                Point3::new(min[0], min[1], min[2]),
                Point3::new(max[0], max[1], max[2]),
            ],
            visible: true,
        };
        Part::leaf(name, RenderHandle(1), vec![wire])
    }

    fn chain() -> FurlChain {
        FurlChain {
            transforms: vec![
                FurlTransform {
                    position: [-1000.0, 0.0, 40.0],
                    axis: [0.0, 0.0, 1.0],
                    angle: 0.3,
                },
                FurlTransform {
                    position: [0.0, 0.0, 0.0],
                    axis: [0.0, 1.0, 0.0],
                    angle: 0.0,
                },
            ],
            maximum_angle: 105.0,
        }
    }

    fn turbine_parts() -> Vec<Part> {
        vec![
            boxed_part("Frame", [-1500.0, -200.0, -200.0], [500.0, 200.0, 200.0]),
            boxed_part("Rotor_Disk_Front", [0.0, -150.0, -150.0], [20.0, 150.0, 150.0]),
            boxed_part("Tail_Vane", [-1900.0, -50.0, 0.0], [-1400.0, 50.0, 400.0]),
        ]
    }

    fn turbine_visualizer() -> WindTurbineVisualizer {
        let factors: BTreeMap<String, f64> = [
            ("Frame".to_owned(), -6.0),
            ("Rotor_Disk_Front".to_owned(), 1.5),
        ]
        .into();
        let tail_parts: BTreeSet<String> = ["Tail_Vane".to_owned()].into();
        WindTurbineVisualizer::new(factors, tail_parts)
    }

    #[test]
    fn test_turbine_explodes_registered_parts_only() {
        let mut visualizer = turbine_visualizer();
        let chain = chain();
        let ctx = SetupContext {
            furl_chain: Some(&chain),
            sort_overrides: &[],
        };
        let configs = visualizer.group_configurations(&turbine_parts(), &ctx).unwrap();
        let parts = group_composites(turbine_parts(), configs).unwrap();
        let mut assembly = Assembly::new(parts);
        visualizer.setup(&mut assembly, &ctx).unwrap();

        let mut controller = visualizer.initial_controller();
        controller.explode = 50.0;
        visualizer.explode(&mut assembly, &controller);

        assert!(assembly.find("Frame").unwrap().transform.position.norm() > 0.0);
        // Tail members live inside the composite and are driven by the
        // furl path, not the per-part factor table.
        let tail = assembly.find(TAIL_NAME).unwrap();
        assert!(tail.is_composite());
    }

    #[test]
    fn test_turbine_furl_sets_tail_override() {
        let mut visualizer = turbine_visualizer();
        let chain = chain();
        let ctx = SetupContext {
            furl_chain: Some(&chain),
            sort_overrides: &[],
        };
        let configs = visualizer.group_configurations(&turbine_parts(), &ctx).unwrap();
        let parts = group_composites(turbine_parts(), configs).unwrap();
        let mut assembly = Assembly::new(parts);
        visualizer.setup(&mut assembly, &ctx).unwrap();

        let controller = visualizer.initial_controller();
        visualizer.handle_render(&mut assembly, &controller);

        let tail = assembly.find(TAIL_NAME).unwrap();
        let transform = tail.transform.matrix_override.as_ref().unwrap();
        // furl 0, explode 0: translation is exactly the pivot center
        let pivot = transforms_to_matrix(&chain.transforms).unwrap().translation_part();
        assert!((transform.translation_part() - pivot).norm() < 1e-12);
    }

    #[test]
    fn test_turbine_explode_zero_matches_never_exploded() {
        let mut visualizer = turbine_visualizer();
        let ctx = SetupContext::default();
        let mut assembly = Assembly::new(turbine_parts());
        visualizer.setup(&mut assembly, &ctx).unwrap();

        let mut controller = visualizer.initial_controller();
        controller.explode = 100.0;
        visualizer.explode(&mut assembly, &controller);
        controller.explode = 0.0;
        visualizer.explode(&mut assembly, &controller);

        for part in assembly.parts() {
            assert_eq!(part.transform.position, Vec3::zeros());
        }
    }

    #[test]
    fn test_tool_setup_orders_and_reverses_display() {
        let mut visualizer = ToolVisualizer::new();
        let ctx = SetupContext::default();
        let parts = vec![
            boxed_part("Lid", [0.0, 0.0, 0.0], [10.0, 10.0, 30.0]),
            boxed_part("Base", [0.0, 0.0, 0.0], [10.0, 10.0, 5.0]),
        ];
        let mut assembly = Assembly::new(parts);
        let display = visualizer.setup(&mut assembly, &ctx).unwrap();
        // stacking order: Base below Lid; display order reversed
        assert_eq!(assembly.parts()[0].name, "Base");
        assert_eq!(display, vec!["Lid".to_owned(), "Base".to_owned()]);
    }

    #[test]
    fn test_tool_explode_stacks_upward() {
        let mut visualizer = ToolVisualizer::new();
        let ctx = SetupContext::default();
        let parts = vec![
            boxed_part("Lid", [0.0, 0.0, 0.0], [10.0, 10.0, 30.0]),
            boxed_part("Base", [0.0, 0.0, 0.0], [10.0, 10.0, 5.0]),
        ];
        let mut assembly = Assembly::new(parts);
        visualizer.setup(&mut assembly, &ctx).unwrap();
        let controller = visualizer.initial_controller();
        visualizer.explode(&mut assembly, &controller);

        let base_z = assembly.find("Base").unwrap().transform.position.z;
        let lid_z = assembly.find("Lid").unwrap().transform.position.z;
        assert_eq!(base_z, 0.0);
        assert!(lid_z > base_z);
    }
}
