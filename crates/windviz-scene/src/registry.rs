//! Name-based part lookup with one level of composite indirection.

use std::collections::HashMap;

use tracing::warn;

use crate::part::Part;

/// Search `parts` for a part by exact name.
///
/// Top-level entries are checked first; if no match is found, the
/// children of every composite part are searched. At most one level of
/// indirection — composites never nest. Returns `None` when absent so
/// callers can warn and skip instead of crashing the frame loop.
pub fn find_part<'a>(parts: &'a [Part], name: &str) -> Option<&'a Part> {
    parts.iter().find(|p| p.name == name).or_else(|| {
        parts
            .iter()
            .filter(|p| p.is_composite())
            .flat_map(|p| p.children())
            .find(|p| p.name == name)
    })
}

/// Mutable variant of [`find_part`], same search order.
pub fn find_part_mut<'a>(parts: &'a mut [Part], name: &str) -> Option<&'a mut Part> {
    // Two passes to keep the borrow checker happy: locate, then borrow.
    let top = parts.iter().position(|p| p.name == name);
    if let Some(index) = top {
        return parts.get_mut(index);
    }
    for part in parts.iter_mut().filter(|p| p.is_composite()) {
        let child = part.children_mut().iter_mut().find(|c| c.name == name);
        if child.is_some() {
            return child;
        }
    }
    None
}

/// Path of a part inside an assembly: a top-level index plus an
/// optional child index when the part lives inside a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartPath {
    /// Index into the top-level part list.
    pub top: usize,
    /// Index into the composite's children, if nested.
    pub child: Option<usize>,
}

/// Mapping from part name to its [`PartPath`].
///
/// Built once per assembly load and replaced wholesale on
/// re-visualization; never mutated incrementally.
#[derive(Debug, Clone, Default)]
pub struct PartRegistry {
    by_name: HashMap<String, PartPath>,
}

impl PartRegistry {
    /// Index every top-level part and every composite child.
    pub fn build(parts: &[Part]) -> Self {
        let mut by_name = HashMap::new();
        for (top, part) in parts.iter().enumerate() {
            by_name.insert(part.name.clone(), PartPath { top, child: None });
            for (child, nested) in part.children().iter().enumerate() {
                by_name.insert(
                    nested.name.clone(),
                    PartPath {
                        top,
                        child: Some(child),
                    },
                );
            }
        }
        Self { by_name }
    }

    /// Look up the path registered for `name`.
    pub fn path(&self, name: &str) -> Option<PartPath> {
        self.by_name.get(name).copied()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// An assembly snapshot: the top-level part list plus its registry.
///
/// The registry is rebuilt whenever the part list is replaced; both are
/// discarded together when a new assembly is loaded.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    parts: Vec<Part>,
    registry: PartRegistry,
}

impl Assembly {
    /// Build an assembly from grouped parts.
    pub fn new(parts: Vec<Part>) -> Self {
        let registry = PartRegistry::build(&parts);
        Self { parts, registry }
    }

    /// The top-level parts, in their current order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Mutable access to the top-level parts. Does not rebuild the
    /// registry; use [`Assembly::replace_parts`] when reordering.
    pub fn parts_mut(&mut self) -> &mut [Part] {
        &mut self.parts
    }

    /// The name registry for this snapshot.
    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    /// Replace the part list (e.g. after ordering) and rebuild the
    /// registry.
    pub fn replace_parts(&mut self, parts: Vec<Part>) {
        self.registry = PartRegistry::build(&parts);
        self.parts = parts;
    }

    /// Take the part list out, leaving the assembly empty. Pair with
    /// [`Assembly::replace_parts`].
    pub fn take_parts(&mut self) -> Vec<Part> {
        self.registry = PartRegistry::default();
        std::mem::take(&mut self.parts)
    }

    /// Find a part by name through the registry.
    pub fn find(&self, name: &str) -> Option<&Part> {
        let path = self.registry.path(name)?;
        let top = self.parts.get(path.top)?;
        match path.child {
            None => Some(top),
            Some(child) => top.children().get(child),
        }
    }

    /// Mutable variant of [`Assembly::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Part> {
        let path = self.registry.path(name)?;
        let top = self.parts.get_mut(path.top)?;
        match path.child {
            None => Some(top),
            Some(child) => top.children_mut().get_mut(child),
        }
    }

    /// Set the visibility of a named part, warning when absent.
    pub fn set_visible(&mut self, name: &str, visible: bool) {
        match self.find_mut(name) {
            Some(part) => part.set_visible(visible),
            None => warn!(part = name, "no part found for visibility toggle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RenderHandle;
    use crate::part::PartBody;

    fn leaf(name: &str) -> Part {
        Part::leaf(name, RenderHandle(0), Vec::new())
    }

    fn tail_with_vane() -> Part {
        let mut tail = Part::composite("Tail");
        if let PartBody::Composite { children } = &mut tail.body {
            children.push(leaf("Tail_Vane"));
        }
        tail
    }

    #[test]
    fn test_find_top_level() {
        let parts = vec![leaf("Frame"), leaf("YawBearing")];
        assert!(find_part(&parts, "YawBearing").is_some());
        assert!(find_part(&parts, "Missing").is_none());
    }

    #[test]
    fn test_find_composite_child() {
        let parts = vec![leaf("Frame"), tail_with_vane()];
        let found = find_part(&parts, "Tail_Vane").unwrap();
        assert_eq!(found.name, "Tail_Vane");
    }

    #[test]
    fn test_find_prefers_top_level() {
        // A top-level part shadows a composite child of the same name.
        let mut parts = vec![tail_with_vane()];
        parts.push(leaf("Tail_Vane"));
        let found = find_part(&parts, "Tail_Vane").unwrap();
        assert!(!found.is_composite());
        assert!(std::ptr::eq(found, &parts[1]));
    }

    #[test]
    fn test_registry_resolves_nested_name() {
        let assembly = Assembly::new(vec![leaf("Frame"), tail_with_vane()]);
        let found = assembly.find("Tail_Vane").unwrap();
        assert_eq!(found.name, "Tail_Vane");
        assert!(assembly.find("Nope").is_none());
    }

    #[test]
    fn test_find_mut_top_and_nested() {
        let mut assembly = Assembly::new(vec![leaf("Frame"), tail_with_vane()]);
        assembly.find_mut("Frame").unwrap().visible = false;
        assembly.find_mut("Tail_Vane").unwrap().visible = false;
        assert!(!assembly.find("Frame").unwrap().visible);
        assert!(!assembly.find("Tail_Vane").unwrap().visible);
    }

    #[test]
    fn test_set_visible_missing_part_is_harmless() {
        let mut assembly = Assembly::new(vec![leaf("Frame")]);
        assembly.set_visible("Missing", false);
        assert!(assembly.find("Frame").unwrap().visible);
    }
}
