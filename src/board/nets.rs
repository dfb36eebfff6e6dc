//! Net table: net id to net name and net-class assignment

use super::types::NetId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-net information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetInfo {
    pub name: String,
    /// Name of the net class this net is assigned to
    #[serde(default)]
    pub class_name: String,
}

/// All nets of a board keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetTable {
    nets: IndexMap<NetId, NetInfo>,
}

impl NetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NetId, name: impl Into<String>, class_name: impl Into<String>) {
        self.nets.insert(
            id,
            NetInfo {
                name: name.into(),
                class_name: class_name.into(),
            },
        );
    }

    pub fn get(&self, id: NetId) -> Option<&NetInfo> {
        self.nets.get(&id)
    }

    /// Find a net id by name
    pub fn find_by_name(&self, name: &str) -> Option<NetId> {
        self.nets
            .iter()
            .find(|(_, info)| info.name == name)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_lookup() {
        let mut nets = NetTable::new();
        nets.insert(1, "GND", "Power");
        nets.insert(2, "USB_D+", "USB");
        assert_eq!(nets.get(1).map(|n| n.class_name.as_str()), Some("Power"));
        assert_eq!(nets.find_by_name("USB_D+"), Some(2));
        assert_eq!(nets.get(2).unwrap().class_name, "USB");
        assert!(nets.get(9).is_none());
        assert_eq!(nets.len(), 2);
    }
}
