//! Control-panel groupings: named sliders and toggles that act on
//! sets of parts at once.

use tracing::warn;
use windviz_layout::Controller;
use windviz_scene::{Assembly, RenderHandle};

use crate::parts;
use crate::tooltip::tool_tooltip_label;

/// Ordered label-to-part-names groups backing a panel section.
pub type LabelGroups = Vec<(String, Vec<String>)>;

fn group(label: &str, names: &[&str]) -> (String, Vec<String>) {
    (
        label.to_string(),
        names.iter().map(|n| n.to_string()).collect(),
    )
}

/// Transparency slider groups for the wind turbine assembly.
pub fn turbine_transparency_groups() -> LabelGroups {
    vec![
        group("Front Rotor Hub", &[parts::BLADE_ASSEMBLY_FRONT_TRIANGLE]),
        group("Back Rotor Hub", &[parts::BLADE_ASSEMBLY_BACK_DISK]),
        group(
            "Resin Cast",
            &[
                parts::STATOR_RESIN_CAST,
                parts::ROTOR_RESIN_CAST_FRONT,
                parts::ROTOR_RESIN_CAST_BACK,
            ],
        ),
        group("Coils", &[parts::STATOR_COILS]),
        group(
            "Magnets",
            &[parts::ROTOR_MAGNETS_FRONT, parts::ROTOR_MAGNETS_BACK],
        ),
        group(
            "Rotor Disks",
            &[parts::ROTOR_DISK_FRONT, parts::ROTOR_DISK_BACK],
        ),
        group(
            "Hub",
            &[
                parts::HUB_FLANGE,
                parts::HUB_FLANGE_COVER_FRONT,
                parts::HUB_FLANGE_COVER_BACK,
                parts::HUB_STUB_AXLE_SHAFT,
                parts::STUDS_HUB,
            ],
        ),
        group("Frame", &[parts::FRAME, parts::STUDS_FRAME]),
        group("Yaw Bearing", &[parts::YAW_BEARING]),
        group("Tail Hinge", &[parts::TAIL_HINGE_INNER]),
        group(
            "Boom",
            &[
                parts::TAIL_HINGE_OUTER,
                parts::TAIL_BOOM_PIPE,
                parts::TAIL_BOOM_SUPPORT,
                parts::TAIL_STOP_HIGH_END,
                parts::VANE_BRACKET_TOP,
                parts::VANE_BRACKET_BOTTOM,
            ],
        ),
        group("Vane", &[parts::TAIL_VANE]),
    ]
}

/// Visibility toggle groups for the wind turbine assembly.
pub fn turbine_visibility_groups() -> LabelGroups {
    vec![
        group(
            "Resin Cast",
            &[
                parts::STATOR_RESIN_CAST,
                parts::ROTOR_RESIN_CAST_FRONT,
                parts::ROTOR_RESIN_CAST_BACK,
            ],
        ),
        group("Coils", &[parts::STATOR_COILS]),
        group(
            "Rotor Disk",
            &[parts::ROTOR_DISK_FRONT, parts::ROTOR_DISK_BACK],
        ),
        group(
            "Magnets",
            &[parts::ROTOR_MAGNETS_FRONT, parts::ROTOR_MAGNETS_BACK],
        ),
        group(
            "Hub",
            &[
                parts::HUB_FLANGE,
                parts::HUB_FLANGE_COVER_FRONT,
                parts::HUB_FLANGE_COVER_BACK,
                parts::HUB_STUB_AXLE_SHAFT,
                parts::STUDS_HUB,
            ],
        ),
        group("Frame", &[parts::FRAME, parts::STUDS_FRAME]),
        group("Yaw Bearing", &[parts::YAW_BEARING]),
        group("Tail Hinge", &[parts::TAIL_HINGE_INNER]),
        group("Tail", &["Tail"]),
    ]
}

/// Visibility toggle groups for a tool assembly: one toggle per
/// displayed part, labeled by its tooltip text.
pub fn tool_visibility_groups(display_names: &[String]) -> LabelGroups {
    display_names
        .iter()
        .map(|name| (tool_tooltip_label(name), vec![name.clone()]))
        .collect()
}

/// Apply the controller's per-label visibility toggles to the assembly.
///
/// Labels absent from the controller default to visible. Unknown part
/// names are logged and skipped.
pub fn apply_visibility(assembly: &mut Assembly, groups: &LabelGroups, controller: &Controller) {
    for (label, part_names) in groups {
        let visible = controller.visibility.get(label).copied().unwrap_or(true);
        for part_name in part_names {
            assembly.set_visible(part_name, visible);
        }
    }
}

/// Resolve the controller's per-label transparency values to per-mesh
/// opacities, in the 0 to 1 range the renderer expects.
///
/// A transparency of zero also hides the affected parts, matching the
/// slider's role as a fade-to-invisible control.
pub fn transparency_updates(
    assembly: &mut Assembly,
    groups: &LabelGroups,
    controller: &Controller,
) -> Vec<(RenderHandle, f64)> {
    let mut updates = Vec::new();
    for (label, part_names) in groups {
        let Some(&transparency) = controller.transparency.get(label) else {
            continue;
        };
        let opacity = transparency / 100.0;
        for part_name in part_names {
            let Some(part) = assembly.find_mut(part_name) else {
                warn!(part = %part_name, "transparency target not found");
                continue;
            };
            for handle in part.mesh_handles() {
                updates.push((handle, opacity));
            }
            part.set_visible(transparency > 0.0);
        }
    }
    updates
}
