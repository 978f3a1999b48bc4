use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One extension's saved payload: either an opaque string or an embedded
/// JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ModData {
    Text(String),
    Json(serde_json::Value),
}

/// Open string-keyed bag of per-extension save data. Insertion order is
/// preserved; serialization emits entries in that order (the CLI sorts keys
/// when pretty-printing).
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "std::collections::BTreeMap<String, ModData>")]
pub struct ModSaveData {
    entries: Vec<(String, ModData)>,
}

impl ModSaveData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `name`, keeping first-insertion
    /// order for existing keys.
    pub fn insert(&mut self, name: impl Into<String>, data: ModData) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = data;
        } else {
            self.entries.push((name, data));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ModData> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModData)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<std::collections::BTreeMap<String, ModData>> for ModSaveData {
    fn from(entries: std::collections::BTreeMap<String, ModData>) -> Self {
        let mut bag = ModSaveData::new();
        for (name, data) in entries {
            bag.insert(name, data);
        }
        bag
    }
}

impl Serialize for ModSaveData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, data) in &self.entries {
            map.serialize_entry(name, data)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_preserves_order_and_replaces() {
        let mut bag = ModSaveData::new();
        bag.insert("b mod", ModData::Text("one".into()));
        bag.insert("a mod", ModData::Text("two".into()));
        bag.insert("b mod", ModData::Text("three".into()));

        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b mod", "a mod"]);
        assert_eq!(bag.get("b mod"), Some(&ModData::Text("three".into())));
    }

    #[test]
    fn serializes_as_a_json_map() {
        let mut bag = ModSaveData::new();
        bag.insert("meta", ModData::Json(json!({"launches": 3})));
        bag.insert("note", ModData::Text("hello".into()));

        let value = serde_json::to_value(&bag).unwrap();
        assert_eq!(value["meta"]["launches"], 3);
        assert_eq!(value["note"], "hello");
    }
}
