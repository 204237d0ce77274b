//! Material category assignment by part-name heuristics.
//!
//! The renderer owns the actual material objects; the core only picks
//! a category per part so materials can be assigned on load.

use serde::{Deserialize, Serialize};

use crate::parts;

/// Name fragments identifying fasteners, which always render as steel.
const FASTENER_PATTERNS: [&str; 5] = ["Bolts", "Nut", "Screws", "Washer", "Rods"];

/// Parts rendered as wood regardless of assembly kind.
const WOODEN_PARTS: [&str; 3] = [
    parts::BLADE_ASSEMBLY_BACK_DISK,
    parts::BLADE_ASSEMBLY_FRONT_TRIANGLE,
    parts::TAIL_VANE,
];

/// Material category for a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    /// Galvanized steel — the default for turbine parts.
    Steel,
    /// Copper coil windings.
    Copper,
    /// Semi-transparent resin cast.
    Resin,
    /// Magnet material.
    Magnet,
    /// Plywood — the default for tool parts.
    Wood,
}

impl Material {
    /// Default opacity of this category, 0 to 1. Resin renders
    /// semi-transparent; everything else is opaque.
    pub fn opacity(&self) -> f64 {
        match self {
            Material::Resin => 0.9,
            _ => 1.0,
        }
    }
}

/// Pick the material category for a part by name heuristics, falling
/// back to `default` (steel for the turbine, wood for tools).
pub fn material_for(part_name: &str, default: Material) -> Material {
    if part_name.contains("ResinCast") {
        Material::Resin
    } else if part_name.starts_with(parts::STATOR_COILS) {
        Material::Copper
    } else if part_name.contains("Magnets") {
        Material::Magnet
    } else if WOODEN_PARTS.contains(&part_name) {
        Material::Wood
    } else if part_name == parts::ROTOR_DISK_BACK
        || FASTENER_PATTERNS.iter().any(|p| part_name.contains(p))
    {
        Material::Steel
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resin_cast_parts() {
        assert_eq!(material_for("Stator_ResinCast", Material::Steel), Material::Resin);
        assert_eq!(material_for("Rotor_ResinCast_Back", Material::Wood), Material::Resin);
    }

    #[test]
    fn test_coils_are_copper() {
        assert_eq!(material_for("Stator_Coils", Material::Steel), Material::Copper);
        assert_eq!(material_for("Stator_Coil", Material::Wood), Material::Wood);
    }

    #[test]
    fn test_fasteners_are_steel_even_in_tools() {
        assert_eq!(material_for("LocatingBolts", Material::Wood), Material::Steel);
        assert_eq!(material_for("Screws1", Material::Wood), Material::Steel);
    }

    #[test]
    fn test_default_applies_when_no_heuristic_matches() {
        assert_eq!(material_for("Frame", Material::Steel), Material::Steel);
        assert_eq!(material_for("Stator_Mold_Base", Material::Wood), Material::Wood);
    }

    #[test]
    fn test_resin_is_semi_transparent() {
        assert!(Material::Resin.opacity() < 1.0);
        assert_eq!(Material::Steel.opacity(), 1.0);
    }
}
