//! Read-only view over the `enums` field of page props
//!
//! The server pushes the aggregated payload into every page response; this
//! accessor only projects it. Missing or malformed data degrades to empty
//! collections, never to an error.

use crate::helpers::EnumHelpers;
use crate::shared_props::ENUMS_PROP;
use crate::types::{AggregatedEnums, EnumItem, EnumOption};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumAccessor {
    enums: AggregatedEnums,
}

impl EnumAccessor {
    pub fn new(enums: AggregatedEnums) -> Self {
        EnumAccessor { enums }
    }

    /// Build from a page props object (`{"enums": {...}, ...}`)
    pub fn from_page_props(props: &Value) -> Self {
        let Some(Value::Object(raw)) = props.get(ENUMS_PROP) else {
            return Self::default();
        };

        let mut enums = AggregatedEnums::with_capacity(raw.len());
        for (type_name, items) in raw {
            match serde_json::from_value::<Vec<EnumItem>>(items.clone()) {
                Ok(items) => {
                    enums.insert(type_name.clone(), items);
                }
                Err(e) => debug!("Ignoring malformed enum payload for {}: {}", type_name, e),
            }
        }
        EnumAccessor { enums }
    }

    /// Raw type name -> items mapping (empty when nothing was injected)
    pub fn enums(&self) -> &AggregatedEnums {
        &self.enums
    }

    pub fn get_enum(&self, type_name: &str) -> &[EnumItem] {
        self.enums
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get_enum_options(&self, type_name: &str) -> Vec<EnumOption> {
        self.get_enum(type_name).iter().map(EnumOption::from).collect()
    }

    /// Options for a registered Rust enum, looked up by its type name
    pub fn options_of<E: EnumHelpers>(&self) -> Vec<EnumOption> {
        self.get_enum_options(E::TYPE_NAME)
    }

    pub fn find_item(&self, type_name: &str, value: &str) -> Option<&EnumItem> {
        self.get_enum(type_name).iter().find(|item| item.value == value)
    }

    /// Display label for a stored value, e.g. for a status badge
    pub fn label_for(&self, type_name: &str, value: &str) -> Option<&str> {
        self.find_item(type_name, value).map(|item| item.label.as_str())
    }
}
