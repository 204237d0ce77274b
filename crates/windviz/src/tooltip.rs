//! Human-readable labels shown when hovering a part.

use crate::parts;

/// Mold and jig name prefixes stripped before deriving a label.
const TOOL_NAME_PREFIXES: [&str; 3] = ["Stator_Mold", "Rotor_Mold", "Stator_CoilWinder"];

/// Tooltip label for a wind turbine part, if it has one.
pub fn turbine_tooltip_label(part_name: &str) -> Option<&'static str> {
    let label = match part_name {
        parts::BLADE_ASSEMBLY_BACK_DISK => "Back Rotor Hub",
        parts::BLADE_ASSEMBLY_FRONT_TRIANGLE => "Front Rotor Hub",
        parts::STATOR_COILS => "Coils",
        parts::STATOR_RESIN_CAST => "Stator Resin Cast",
        parts::ROTOR_DISK_FRONT => "Rotor Disk",
        parts::ROTOR_RESIN_CAST_FRONT => "Rotor Resin Cast",
        parts::ROTOR_MAGNETS_FRONT => "Magnets",
        parts::ROTOR_DISK_BACK => "Rotor Disk",
        parts::ROTOR_RESIN_CAST_BACK => "Rotor Resin Cast",
        parts::ROTOR_MAGNETS_BACK => "Rotor Magnets",
        parts::HUB_FLANGE => "Flange",
        parts::HUB_FLANGE_COVER_FRONT => "Flange Cover",
        parts::HUB_FLANGE_COVER_BACK => "Flange Cover",
        parts::HUB_STUB_AXLE_SHAFT => "Stub Axle Shaft",
        parts::STUDS_HUB => "Hub Studs",
        parts::FRAME => "Frame",
        parts::YAW_BEARING => "Yaw Bearing",
        parts::TAIL_HINGE_INNER => "Tail Hinge",
        parts::TAIL_HINGE_OUTER => "Outer Tail Hinge",
        parts::TAIL_BOOM_PIPE => "Boom Pipe",
        parts::TAIL_BOOM_SUPPORT => "Boom Support",
        parts::TAIL_STOP_HIGH_END => "High End Stop",
        parts::VANE_BRACKET_TOP => "Vane Bracket",
        parts::VANE_BRACKET_BOTTOM => "Vane Bracket",
        parts::TAIL_VANE => "Vane",
        parts::STUDS_FRAME => "Frame Studs",
        _ => return None,
    };
    Some(label)
}

/// Tooltip label for a mold or jig part.
///
/// A handful of alternator parts that appear inside tool assemblies keep
/// curated labels; everything else gets a label derived from its name by
/// stripping the tool prefix and spacing out the camel-cased remainder.
pub fn tool_tooltip_label(part_name: &str) -> String {
    let curated = match part_name {
        parts::STATOR_COILS => Some("Coils"),
        "Stator_Coil" => Some("Coil"),
        parts::STATOR_RESIN_CAST => Some("Stator Resin Cast"),
        parts::ROTOR_RESIN_CAST_FRONT => Some("Rotor Resin Cast"),
        parts::ROTOR_DISK_BACK => Some("Rotor Disk"),
        "Rotor_Magnets" => Some("Magnets"),
        "Rotor_MagnetJig" => Some("Magnet Jig"),
        "Rotor_MagnetJig_Disk" => Some("Inner Disk"),
        _ => None,
    };
    match curated {
        Some(label) => label.to_string(),
        None => humanize(part_name),
    }
}

/// "Stator_Mold_Lid" -> "Lid", "LocatingBolts1" -> "Locating Bolts1".
fn humanize(part_name: &str) -> String {
    let mut stripped = part_name.to_string();
    for prefix in TOOL_NAME_PREFIXES {
        stripped = stripped.replacen(prefix, "", 1);
    }
    let mut label = String::with_capacity(stripped.len() + 4);
    for ch in stripped.chars() {
        if ch == '_' {
            continue;
        }
        if ch.is_ascii_uppercase() && !label.is_empty() {
            label.push(' ');
        }
        label.push(ch);
    }
    label.trim().to_string()
}
