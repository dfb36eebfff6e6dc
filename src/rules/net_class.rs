//! Net classes and the net-class repository

use crate::board::{NetId, NetTable};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Name of the class every board carries
pub const DEFAULT_NET_CLASS: &str = "Default";

/// Named rule set of routing sizes shared by all nets assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetClass {
    pub name: String,
    pub track_width: i32,
    pub via_diameter: i32,
    pub via_drill: i32,
    pub diff_pair_width: i32,
    pub diff_pair_gap: i32,
    pub diff_pair_via_gap: i32,
}

impl Default for NetClass {
    fn default() -> Self {
        Self {
            name: DEFAULT_NET_CLASS.to_string(),
            track_width: 250_000,       // 0.25mm
            via_diameter: 800_000,      // 0.8mm
            via_drill: 400_000,         // 0.4mm
            diff_pair_width: 200_000,   // 0.2mm
            diff_pair_gap: 250_000,     // 0.25mm
            diff_pair_via_gap: 250_000, // 0.25mm
        }
    }
}

impl NetClass {
    /// A class with default sizes under another name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Net-class repository: named classes plus a mandatory default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetClasses {
    default: NetClass,
    #[serde(deserialize_with = "classes_named_by_key")]
    classes: IndexMap<String, NetClass>,
}

/// The map key is the class name; a `name` field in the document is overridden
fn classes_named_by_key<'de, D>(deserializer: D) -> Result<IndexMap<String, NetClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut classes = IndexMap::<String, NetClass>::deserialize(deserializer)?;
    for (key, class) in classes.iter_mut() {
        class.name.clone_from(key);
    }
    Ok(classes)
}

impl NetClasses {
    pub fn new(default: NetClass) -> Self {
        Self {
            default,
            classes: IndexMap::new(),
        }
    }

    pub fn default_class(&self) -> &NetClass {
        &self.default
    }

    pub fn default_class_mut(&mut self) -> &mut NetClass {
        &mut self.default
    }

    /// Add or replace a class. A class named like the default replaces the default.
    pub fn add(&mut self, class: NetClass) {
        if class.name == self.default.name {
            self.default = class;
        } else {
            self.classes.insert(class.name.clone(), class);
        }
    }

    /// Find a class by name, including the default
    pub fn find(&self, name: &str) -> Option<&NetClass> {
        if name == self.default.name {
            return Some(&self.default);
        }
        self.classes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut NetClass> {
        if name == self.default.name {
            return Some(&mut self.default);
        }
        self.classes.get_mut(name)
    }

    /// Class for a net; the default class when the net or its class is unknown
    pub fn class_for_net(&self, nets: &NetTable, net: Option<NetId>) -> &NetClass {
        net.and_then(|id| nets.get(id))
            .and_then(|info| self.find(&info.class_name))
            .unwrap_or(&self.default)
    }

    /// Number of classes, counting the default
    pub fn len(&self) -> usize {
        self.classes.len() + 1
    }

    /// All classes in declaration order, default first
    pub fn iter(&self) -> impl Iterator<Item = &NetClass> {
        std::iter::once(&self.default).chain(self.classes.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> (NetClasses, NetTable) {
        let mut classes = NetClasses::default();
        classes.add(NetClass {
            track_width: 500_000,
            ..NetClass::named("Power")
        });
        let mut nets = NetTable::new();
        nets.insert(1, "VCC", "Power");
        nets.insert(2, "SIG", "Missing");
        nets.insert(3, "GND", "");
        (classes, nets)
    }

    #[test]
    fn test_class_for_net_resolves_by_name() {
        let (classes, nets) = repo();
        assert_eq!(classes.class_for_net(&nets, Some(1)).name, "Power");
        assert_eq!(classes.class_for_net(&nets, Some(1)).track_width, 500_000);
    }

    #[test]
    fn test_class_for_net_falls_back_to_default() {
        let (classes, nets) = repo();
        for net in [Some(2), Some(3), Some(99), None] {
            assert_eq!(classes.class_for_net(&nets, net).name, DEFAULT_NET_CLASS);
        }
    }

    #[test]
    fn test_adding_default_name_replaces_default() {
        let (mut classes, _) = repo();
        classes.add(NetClass {
            track_width: 100_000,
            ..NetClass::default()
        });
        assert_eq!(classes.default_class().track_width, 100_000);
        assert_eq!(classes.len(), 2);
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Default", "Power"]);
    }

    #[test]
    fn test_deserialized_class_takes_name_from_key() {
        let classes: NetClasses =
            serde_json::from_str(r#"{"classes": {"Power": {"track_width": 500000}, "HS": {"name": "Other"}}}"#)
                .unwrap();
        assert_eq!(classes.find("Power").unwrap().name, "Power");
        assert_eq!(classes.find("HS").unwrap().name, "HS");
        assert!(classes.find("Other").is_none());
    }
}
