//! Wind turbine part names, as exported by the CAD pipeline.

use std::collections::{BTreeMap, BTreeSet};

/// Back rotor hub disk of the blade assembly.
pub const BLADE_ASSEMBLY_BACK_DISK: &str = "Blade_Assembly_BackDisk";
/// Front rotor hub triangle of the blade assembly.
pub const BLADE_ASSEMBLY_FRONT_TRIANGLE: &str = "Blade_Assembly_FrontTriangle";
/// Stator coils.
pub const STATOR_COILS: &str = "Stator_Coils";
/// Stator resin cast.
pub const STATOR_RESIN_CAST: &str = "Stator_ResinCast";
/// Front rotor disk.
pub const ROTOR_DISK_FRONT: &str = "Rotor_Disk_Front";
/// Front rotor resin cast.
pub const ROTOR_RESIN_CAST_FRONT: &str = "Rotor_ResinCast_Front";
/// Front rotor magnets.
pub const ROTOR_MAGNETS_FRONT: &str = "Rotor_Magnets_Front";
/// Back rotor disk.
pub const ROTOR_DISK_BACK: &str = "Rotor_Disk_Back";
/// Back rotor resin cast.
pub const ROTOR_RESIN_CAST_BACK: &str = "Rotor_ResinCast_Back";
/// Back rotor magnets.
pub const ROTOR_MAGNETS_BACK: &str = "Rotor_Magnets_Back";
/// Hub flange.
pub const HUB_FLANGE: &str = "Hub_Flange";
/// Front hub flange cover.
pub const HUB_FLANGE_COVER_FRONT: &str = "Hub_Flange_Cover_Front";
/// Back hub flange cover.
pub const HUB_FLANGE_COVER_BACK: &str = "Hub_Flange_Cover_Back";
/// Hub stub axle shaft.
pub const HUB_STUB_AXLE_SHAFT: &str = "Hub_StubAxleShaft";
/// Hub studs.
pub const STUDS_HUB: &str = "Studs_Hub";
/// Frame.
pub const FRAME: &str = "Frame";
/// Yaw bearing.
pub const YAW_BEARING: &str = "YawBearing";
/// Inner tail hinge.
pub const TAIL_HINGE_INNER: &str = "Tail_Hinge_Inner";
/// Outer tail hinge.
pub const TAIL_HINGE_OUTER: &str = "Tail_Hinge_Outer";
/// Tail boom pipe.
pub const TAIL_BOOM_PIPE: &str = "Tail_Boom_Pipe";
/// Tail boom support.
pub const TAIL_BOOM_SUPPORT: &str = "Tail_Boom_Support";
/// High end tail stop.
pub const TAIL_STOP_HIGH_END: &str = "Tail_Stop_HighEnd";
/// Top vane bracket.
pub const VANE_BRACKET_TOP: &str = "Vane_Bracket_Top";
/// Bottom vane bracket.
pub const VANE_BRACKET_BOTTOM: &str = "Vane_Bracket_Bottom";
/// Tail vane.
pub const TAIL_VANE: &str = "Tail_Vane";
/// Frame studs.
pub const STUDS_FRAME: &str = "Studs_Frame";

/// Parts grouped into the "Tail" composite so they furl as one unit.
pub fn tail_part_names() -> BTreeSet<String> {
    [
        TAIL_HINGE_OUTER,
        TAIL_BOOM_PIPE,
        TAIL_BOOM_SUPPORT,
        TAIL_STOP_HIGH_END,
        VANE_BRACKET_TOP,
        VANE_BRACKET_BOTTOM,
        TAIL_VANE,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Per-part explosion factors for the tilted-axis explosion.
///
/// Positive factors displace toward the alternator front, negative
/// toward the back, frame, and tail. The stator anchors the explosion
/// at factor 0. Scaled at runtime by the measured assembly length.
pub fn explosion_factors() -> BTreeMap<String, f64> {
    let rotor = 1.5;
    let flange = -3.0;
    let frame = -6.0;
    [
        (STATOR_RESIN_CAST, 0.0),
        (STATOR_COILS, 0.0),
        (BLADE_ASSEMBLY_FRONT_TRIANGLE, 4.5),
        (BLADE_ASSEMBLY_BACK_DISK, 3.0),
        (ROTOR_RESIN_CAST_FRONT, rotor),
        (ROTOR_DISK_FRONT, rotor),
        (ROTOR_MAGNETS_FRONT, rotor),
        (ROTOR_RESIN_CAST_BACK, -rotor),
        (ROTOR_DISK_BACK, -rotor),
        (ROTOR_MAGNETS_BACK, -rotor),
        (HUB_FLANGE_COVER_FRONT, -2.8),
        (STUDS_HUB, flange),
        (HUB_FLANGE, flange),
        (HUB_FLANGE_COVER_BACK, -3.3),
        (HUB_STUB_AXLE_SHAFT, -4.5),
        (FRAME, frame),
        (STUDS_FRAME, frame),
        (YAW_BEARING, -7.0),
        (TAIL_HINGE_INNER, -8.25),
    ]
    .iter()
    .map(|(name, factor)| (name.to_string(), *factor))
    .collect()
}
