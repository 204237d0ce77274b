//! Grouping of related parts into named composite containers.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;
use windviz_math::Transform;

use crate::error::{Result, SceneError};
use crate::part::{Part, PartBody};

/// Per-member configuration hook, applied as a part is pulled into a
/// group. The canonical use is setting a fixed matrix override so the
/// member's pose is expressed relative to the group's frame instead of
/// world space.
pub type ConfigurePart = Box<dyn Fn(&mut Part) + Send + Sync>;

/// Configuration for one composite group.
pub struct GroupConfig {
    /// Name of the composite container to create.
    pub name: String,
    /// Initial matrix override for the container (e.g. the tail frame).
    pub group_matrix: Option<Transform>,
    /// Names of top-level parts to claim as children.
    pub members: BTreeSet<String>,
    /// Optional per-member hook run as each member is claimed.
    pub configure: Option<ConfigurePart>,
}

impl std::fmt::Debug for GroupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupConfig")
            .field("name", &self.name)
            .field("group_matrix", &self.group_matrix)
            .field("members", &self.members)
            .field("configure", &self.configure.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Merge subsets of `parts` into composite groups.
///
/// Configurations are applied in order: every top-level part named in a
/// configuration's member set is removed from the top level and
/// appended, in its original order, as a child of the new container,
/// which itself becomes a top-level entry. Member names absent from the
/// scene are warned about and skipped.
///
/// Member sets must be disjoint; overlap is a configuration error.
pub fn group_composites(mut parts: Vec<Part>, configs: Vec<GroupConfig>) -> Result<Vec<Part>> {
    validate_disjoint(&configs)?;

    for config in configs {
        let mut children = Vec::new();
        let mut remaining = Vec::with_capacity(parts.len());
        for part in parts {
            if config.members.contains(&part.name) {
                children.push(part);
            } else {
                remaining.push(part);
            }
        }
        parts = remaining;

        for member in &config.members {
            if !children.iter().any(|c| &c.name == member) {
                warn!(group = %config.name, part = %member, "group member not found in scene");
            }
        }
        if let Some(configure) = &config.configure {
            for child in &mut children {
                configure(child);
            }
        }

        let mut group = Part::composite(&config.name);
        group.transform.matrix_override = config.group_matrix.clone();
        group.body = PartBody::Composite { children };
        parts.push(group);
    }
    Ok(parts)
}

fn validate_disjoint(configs: &[GroupConfig]) -> Result<()> {
    let mut claimed: BTreeMap<&str, &str> = BTreeMap::new();
    for config in configs {
        if config.members.is_empty() {
            return Err(SceneError::EmptyGroup(config.name.clone()));
        }
        for member in &config.members {
            if let Some(first) = claimed.insert(member.as_str(), config.name.as_str()) {
                return Err(SceneError::OverlappingGroupMembership {
                    part: member.clone(),
                    first: first.to_owned(),
                    second: config.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Derive group configurations for array-indexed parts.
///
/// Tool assemblies export repeated components with a trailing integer
/// suffix (`Screw1`, `Screw2`, ...). All part names sharing the same
/// stripped prefix form one composite named by that prefix. A lone
/// suffixed name stays a top-level leaf — there is nothing to stack.
pub fn array_group_configs(parts: &[Part]) -> Vec<GroupConfig> {
    let mut by_prefix: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for part in parts {
        if let Some(prefix) = strip_integer_suffix(&part.name) {
            by_prefix
                .entry(prefix.to_owned())
                .or_default()
                .insert(part.name.clone());
        }
    }
    by_prefix
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(name, members)| GroupConfig {
            name,
            group_matrix: None,
            members,
            configure: None,
        })
        .collect()
}

/// Strip a trailing integer suffix, returning the prefix. `None` when
/// the name has no suffix or nothing but a suffix.
fn strip_integer_suffix(name: &str) -> Option<&str> {
    let digit_count = name.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digit_count == 0 || digit_count == name.len() {
        return None;
    }
    Some(&name[..name.len() - digit_count])
}
