//! Country selector entries.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One country (or region) in the selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub name: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub has_flag: bool,
}

impl CountryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disabled: false,
            has_flag: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Country entries keyed by id. Key order is display order, so the JSON
/// object is read into a vector instead of a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySelectEntries {
    entries: Vec<(String, CountryEntry)>,
}

impl CountrySelectEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, id: impl Into<String>, entry: CountryEntry) {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((id, entry)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&CountryEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build menu items for `ids`. Ids without an entry produce no item.
    pub fn menu_items<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
        selected_id: &str,
    ) -> Vec<CountryMenuItem> {
        ids.into_iter()
            .filter_map(|id| {
                let entry = self.get(id)?;
                Some(CountryMenuItem {
                    id: id.to_string(),
                    text: entry.name.clone(),
                    active: id == selected_id,
                    disabled: entry.disabled,
                })
            })
            .collect()
    }

    /// Menu items for every entry, in display order
    pub fn all_menu_items(&self, selected_id: &str) -> Vec<CountryMenuItem> {
        self.menu_items(self.keys(), selected_id)
    }
}

impl Serialize for CountrySelectEntries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, entry) in &self.entries {
            map.serialize_entry(id, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CountrySelectEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = CountrySelectEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of country id to country entry")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = CountrySelectEntries::new();
                while let Some((id, entry)) = access.next_entry::<String, CountryEntry>()? {
                    entries.insert(id, entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Row of the country dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryMenuItem {
    pub id: String,
    pub text: String,
    pub active: bool,
    pub disabled: bool,
}

/// Path of the flag image for a country: `/flag-<id>.png`
pub fn flag_asset_path(country_id: &str) -> String {
    format!("/flag-{}.png", country_id)
}

/// Keys that close the open dropdown (`Esc` comes from older browsers)
pub fn is_menu_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Alt text of the flag image
pub fn flag_alt_text(country_name: &str) -> String {
    format!("Flag for {}", country_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> CountrySelectEntries {
        serde_json::from_str(
            r#"{
                "world": {"name": "World", "disabled": false, "hasFlag": false},
                "ch": {"name": "Switzerland", "disabled": false, "hasFlag": true},
                "de": {"name": "Germany", "disabled": true, "hasFlag": true},
                "at": {"name": "Austria"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_keeps_key_order() {
        let entries = sample_entries();
        assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["world", "ch", "de", "at"]);
        assert_eq!(entries.get("ch").map(|e| e.has_flag), Some(true));
        assert_eq!(entries.get("at"), Some(&CountryEntry::new("Austria")));
    }

    #[test]
    fn test_serialize_round_trip_order() {
        let entries = sample_entries();
        let json = serde_json::to_string(&entries).unwrap();
        assert!(json.find("\"world\"").unwrap() < json.find("\"at\"").unwrap());
    }

    #[test]
    fn test_menu_items_mark_active_and_disabled() {
        let entries = sample_entries();
        let items = entries.all_menu_items("ch");
        assert_eq!(items.len(), 4);
        assert_eq!(
            items[1],
            CountryMenuItem {
                id: "ch".to_string(),
                text: "Switzerland".to_string(),
                active: true,
                disabled: false,
            }
        );
        assert!(items[2].disabled);
        assert!(!items[2].active);
    }

    #[test]
    fn test_unknown_id_produces_no_menu_item() {
        let entries = sample_entries();
        let items = entries.menu_items(["de", "xx", "world"], "xx");
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["de", "world"]);
        assert!(items.iter().all(|i| !i.active));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut entries = CountrySelectEntries::new();
        entries.insert("a", CountryEntry::new("A"));
        entries.insert("b", CountryEntry::new("B"));
        entries.insert("a", CountryEntry::new("A2").disabled());
        assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(entries.get("a").unwrap().disabled);
    }

    #[test]
    fn test_flag_asset() {
        assert_eq!(flag_asset_path("ch"), "/flag-ch.png");
        assert_eq!(flag_alt_text("Switzerland"), "Flag for Switzerland");
    }

    #[test]
    fn test_menu_dismiss_keys() {
        assert!(is_menu_dismiss_key("Escape"));
        assert!(is_menu_dismiss_key("Esc"));
        assert!(!is_menu_dismiss_key("Enter"));
        assert!(!is_menu_dismiss_key("e"));
    }
}
