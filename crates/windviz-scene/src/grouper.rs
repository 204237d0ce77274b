//! Pairing of imported mesh nodes with their wire-overlay siblings.

use tracing::debug;

use crate::node::ImportedNode;
use crate::part::{Part, WireOverlay};

/// Reassemble a flat list of imported scene nodes into parts.
///
/// Every node whose name does not match the `<base>Wire<N>` pattern is a
/// candidate part; its wire overlays are all siblings named
/// `<base>Wire<N>`, collected in ascending numeric-suffix order. A part
/// with no wire siblings gets an empty overlay list — not an error.
///
/// Exporters that wrap the mesh in a node named `<base>Mesh` are also
/// accepted: the `Mesh` suffix is stripped when naming the part.
pub fn group_wires(nodes: Vec<ImportedNode>) -> Vec<Part> {
    let mut wires: Vec<(String, u32, WireOverlay)> = Vec::new();
    let mut part_nodes: Vec<ImportedNode> = Vec::new();
    for node in nodes {
        match split_wire_name(&node.name) {
            Some((base, index)) => {
                let base = base.to_owned();
                wires.push((
                    base,
                    index,
                    WireOverlay {
                        handle: node.handle,
                        vertices: node.vertices,
                        visible: true,
                    },
                ));
            }
            None => part_nodes.push(node),
        }
    }
    wires.sort_by(|(a_base, a_index, _), (b_base, b_index, _)| {
        a_base.cmp(b_base).then(a_index.cmp(b_index))
    });

    part_nodes
        .into_iter()
        .map(|node| {
            let base = node
                .name
                .strip_suffix("Mesh")
                .filter(|stripped| !stripped.is_empty())
                .unwrap_or(&node.name)
                .to_owned();
            let part_wires: Vec<WireOverlay> = wires
                .iter()
                .filter(|(wire_base, _, _)| *wire_base == base)
                .map(|(_, _, wire)| wire.clone())
                .collect();
            debug!(part = %base, wires = part_wires.len(), "grouped part");
            Part::leaf(base, node.handle, part_wires)
        })
        .collect()
}

/// Split a `<base>Wire<N>` node name into its base and numeric suffix.
/// Returns `None` for names that do not match the wire pattern.
fn split_wire_name(name: &str) -> Option<(&str, u32)> {
    let digit_count = name.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digit_count == 0 {
        return None;
    }
    let (head, digits) = name.split_at(name.len() - digit_count);
    let base = head.strip_suffix("Wire")?;
    if base.is_empty() {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((base, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RenderHandle;

    fn node(name: &str, id: u64) -> ImportedNode {
        ImportedNode {
            name: name.to_owned(),
            vertices: Vec::new(),
            handle: RenderHandle(id),
        }
    }

    #[test]
    fn test_split_wire_name() {
        assert_eq!(split_wire_name("FrameWire0"), Some(("Frame", 0)));
        assert_eq!(split_wire_name("Tail_VaneWire12"), Some(("Tail_Vane", 12)));
        assert_eq!(split_wire_name("Frame"), None);
        assert_eq!(split_wire_name("Wire3"), None);
        assert_eq!(split_wire_name("FrameWire"), None);
    }

    #[test]
    fn test_one_part_per_non_wire_node() {
        let parts = group_wires(vec![
            node("Frame", 1),
            node("FrameWire0", 2),
            node("FrameWire1", 3),
            node("YawBearing", 4),
        ]);
        assert_eq!(parts.len(), 2);
        let frame = parts.iter().find(|p| p.name == "Frame").unwrap();
        assert_eq!(frame.wires().len(), 2);
        let yaw = parts.iter().find(|p| p.name == "YawBearing").unwrap();
        assert!(yaw.wires().is_empty());
    }

    #[test]
    fn test_wires_sorted_by_numeric_suffix() {
        let parts = group_wires(vec![
            node("FrameWire10", 10),
            node("FrameWire2", 2),
            node("FrameWire0", 0),
            node("Frame", 1),
        ]);
        let suffixes: Vec<u64> = parts[0].wires().iter().map(|w| w.handle.0).collect();
        assert_eq!(suffixes, vec![0, 2, 10]);
    }

    #[test]
    fn test_mesh_suffixed_node_names_part_by_base() {
        let parts = group_wires(vec![node("FrameMesh", 1), node("FrameWire0", 2)]);
        assert_eq!(parts[0].name, "Frame");
        assert_eq!(parts[0].wires().len(), 1);
    }

    #[test]
    fn test_wires_do_not_leak_across_parts() {
        let parts = group_wires(vec![
            node("Rotor_Disk_Front", 1),
            node("Rotor_Disk_FrontWire0", 2),
            node("Rotor_Disk_Back", 3),
            node("Rotor_Disk_BackWire0", 4),
            node("Rotor_Disk_BackWire1", 5),
        ]);
        let front = parts.iter().find(|p| p.name == "Rotor_Disk_Front").unwrap();
        let back = parts.iter().find(|p| p.name == "Rotor_Disk_Back").unwrap();
        assert_eq!(front.wires().len(), 1);
        assert_eq!(back.wires().len(), 2);
    }
}
