//! Dynamic (schema-less) properties. The domain side groups values under
//! their property; storage keeps one flat row per value, each row repeating
//! the property id and name.

use crate::factory::TypeRegistry;
use crate::operation::OperationKind;
use crate::reconcile::ChildPatch;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum PropertyValueType {
    #[default]
    Undefined,
    ShortText,
    LongText,
    Integer,
    Decimal,
    Boolean,
    DateTime,
    Dictionary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    ShortText(String),
    LongText(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    /// Id of the selected dictionary item.
    Dictionary(String),
}

impl PropertyValue {
    pub fn value_type(&self) -> PropertyValueType {
        match self {
            PropertyValue::ShortText(_) => PropertyValueType::ShortText,
            PropertyValue::LongText(_) => PropertyValueType::LongText,
            PropertyValue::Integer(_) => PropertyValueType::Integer,
            PropertyValue::Decimal(_) => PropertyValueType::Decimal,
            PropertyValue::Boolean(_) => PropertyValueType::Boolean,
            PropertyValue::DateTime(_) => PropertyValueType::DateTime,
            PropertyValue::Dictionary(_) => PropertyValueType::Dictionary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicPropertyValue {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub value: Option<PropertyValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicProperty {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<DynamicPropertyValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicPropertyValueRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub object_id: Option<String>,
    pub property_id: String,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub value_type: PropertyValueType,
    #[serde(default)]
    pub short_text_value: Option<String>,
    #[serde(default)]
    pub long_text_value: Option<String>,
    #[serde(default)]
    pub integer_value: Option<i64>,
    #[serde(default)]
    pub decimal_value: Option<Decimal>,
    #[serde(default)]
    pub boolean_value: Option<bool>,
    #[serde(default)]
    pub date_time_value: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dictionary_item_id: Option<String>,
}

/// Identity of a stored value row: the property it belongs to plus the value
/// itself, so a changed value is a new row rather than an edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueKey {
    pub property_id: String,
    pub locale: Option<String>,
    pub value_type: PropertyValueType,
    pub value: Option<String>,
}

impl DynamicPropertyValueRecord {
    pub fn key(&self) -> ValueKey {
        ValueKey {
            property_id: self.property_id.clone(),
            locale: self.locale.clone(),
            value_type: self.value_type,
            value: self.value_text(),
        }
    }

    /// Textual form of whichever column `value_type` selects.
    pub fn value_text(&self) -> Option<String> {
        match self.value_type {
            PropertyValueType::Undefined => None,
            PropertyValueType::ShortText => self.short_text_value.clone(),
            PropertyValueType::LongText => self.long_text_value.clone(),
            PropertyValueType::Integer => self.integer_value.map(|v| v.to_string()),
            PropertyValueType::Decimal => self.decimal_value.map(|v| v.normalize().to_string()),
            PropertyValueType::Boolean => self.boolean_value.map(|v| v.to_string()),
            PropertyValueType::DateTime => self.date_time_value.map(|v| v.to_rfc3339()),
            PropertyValueType::Dictionary => self.dictionary_item_id.clone(),
        }
    }

    pub fn to_domain(&self, mut value: DynamicPropertyValue) -> DynamicPropertyValue {
        value.locale = self.locale.clone();
        value.value = match self.value_type {
            PropertyValueType::Undefined => None,
            PropertyValueType::ShortText => {
                self.short_text_value.clone().map(PropertyValue::ShortText)
            }
            PropertyValueType::LongText => self.long_text_value.clone().map(PropertyValue::LongText),
            PropertyValueType::Integer => self.integer_value.map(PropertyValue::Integer),
            PropertyValueType::Decimal => self.decimal_value.map(PropertyValue::Decimal),
            PropertyValueType::Boolean => self.boolean_value.map(PropertyValue::Boolean),
            PropertyValueType::DateTime => self.date_time_value.map(PropertyValue::DateTime),
            PropertyValueType::Dictionary => {
                self.dictionary_item_id.clone().map(PropertyValue::Dictionary)
            }
        };
        value
    }

    pub fn fill_from(
        mut self,
        value: &DynamicPropertyValue,
        property: &DynamicProperty,
        object_id: Option<&str>,
    ) -> Self {
        if self.object_type.is_none() {
            self.object_type = Some(OperationKind::PaymentIn.to_string());
        }
        self.object_id = object_id.map(str::to_string);
        self.property_id = property.id.clone();
        self.property_name = property.name.clone();
        self.locale = value.locale.clone();
        self.clear_values();
        self.value_type = value
            .value
            .as_ref()
            .map(PropertyValue::value_type)
            .unwrap_or_default();
        match &value.value {
            None => {}
            Some(PropertyValue::ShortText(text)) => self.short_text_value = Some(text.clone()),
            Some(PropertyValue::LongText(text)) => self.long_text_value = Some(text.clone()),
            Some(PropertyValue::Integer(number)) => self.integer_value = Some(*number),
            Some(PropertyValue::Decimal(number)) => self.decimal_value = Some(*number),
            Some(PropertyValue::Boolean(flag)) => self.boolean_value = Some(*flag),
            Some(PropertyValue::DateTime(at)) => self.date_time_value = Some(*at),
            Some(PropertyValue::Dictionary(item)) => self.dictionary_item_id = Some(item.clone()),
        }
        self
    }

    fn clear_values(&mut self) {
        self.short_text_value = None;
        self.long_text_value = None;
        self.integer_value = None;
        self.decimal_value = None;
        self.boolean_value = None;
        self.date_time_value = None;
        self.dictionary_item_id = None;
    }
}

impl ChildPatch for DynamicPropertyValueRecord {
    fn patch(&self, target: &mut Self) {
        target.property_id = self.property_id.clone();
        target.property_name = self.property_name.clone();
        target.locale = self.locale.clone();
        target.value_type = self.value_type;
        target.short_text_value = self.short_text_value.clone();
        target.long_text_value = self.long_text_value.clone();
        target.integer_value = self.integer_value;
        target.decimal_value = self.decimal_value;
        target.boolean_value = self.boolean_value;
        target.date_time_value = self.date_time_value;
        target.dictionary_item_id = self.dictionary_item_id.clone();
    }
}

/// Groups flat value rows into one property per property id, in order of
/// first appearance. The property name comes from the first row of a group.
pub fn group_rows(
    rows: &[DynamicPropertyValueRecord],
    registry: &TypeRegistry,
) -> Vec<DynamicProperty> {
    let mut properties: Vec<DynamicProperty> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.property_id.as_str()).or_insert_with(|| {
            let mut property = registry.create::<DynamicProperty>();
            property.id = row.property_id.clone();
            property.name = row.property_name.clone();
            property.values.clear();
            properties.push(property);
            properties.len() - 1
        });
        properties[slot]
            .values
            .push(row.to_domain(registry.create::<DynamicPropertyValue>()));
    }

    properties
}

/// Flattens properties back into one row per value.
pub fn expand_properties(
    properties: &[DynamicProperty],
    object_id: Option<&str>,
    registry: &TypeRegistry,
) -> Vec<DynamicPropertyValueRecord> {
    properties
        .iter()
        .flat_map(|property| {
            property.values.iter().map(move |value| {
                registry
                    .create::<DynamicPropertyValueRecord>()
                    .fill_from(value, property, object_id)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn text_row(property_id: &str, name: &str, value: &str) -> DynamicPropertyValueRecord {
        DynamicPropertyValueRecord {
            property_id: property_id.to_string(),
            property_name: Some(name.to_string()),
            value_type: PropertyValueType::ShortText,
            short_text_value: Some(value.to_string()),
            ..DynamicPropertyValueRecord::default()
        }
    }

    fn short_texts(property: &DynamicProperty) -> Vec<String> {
        property
            .values
            .iter()
            .filter_map(|value| match &value.value {
                Some(PropertyValue::ShortText(text)) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn groups_by_first_appearance() {
        let rows = vec![
            text_row("P1", "Color", "Red"),
            text_row("P2", "Size", "M"),
            text_row("P1", "Colour", "Blue"),
        ];
        let properties = group_rows(&rows, &TypeRegistry::new());

        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].id, "P1");
        assert_eq!(properties[0].name.as_deref(), Some("Color"));
        assert_eq!(short_texts(&properties[0]), vec!["Red", "Blue"]);
        assert_eq!(properties[1].id, "P2");
        assert_eq!(short_texts(&properties[1]), vec!["M"]);
    }

    #[test]
    fn expanded_rows_carry_property_identity() {
        let property = DynamicProperty {
            id: "P9".to_string(),
            name: Some("Warehouse".to_string()),
            values: vec![
                DynamicPropertyValue {
                    locale: None,
                    value: Some(PropertyValue::Integer(4)),
                },
                DynamicPropertyValue {
                    locale: Some("en-US".to_string()),
                    value: Some(PropertyValue::Decimal(dec!(1.50))),
                },
            ],
        };
        let rows = expand_properties(&[property], Some("pay-1"), &TypeRegistry::new());

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.property_id, "P9");
            assert_eq!(row.property_name.as_deref(), Some("Warehouse"));
            assert_eq!(row.object_id.as_deref(), Some("pay-1"));
            assert_eq!(row.object_type.as_deref(), Some("PaymentIn"));
        }
        assert_eq!(rows[0].integer_value, Some(4));
        assert_eq!(rows[1].value_type, PropertyValueType::Decimal);
        assert_eq!(rows[1].decimal_value, Some(dec!(1.50)));
    }

    #[test]
    fn registered_row_prototype_sets_object_type() {
        let mut registry = TypeRegistry::new();
        registry.register(DynamicPropertyValueRecord {
            object_type: Some("OrderPaymentIn".to_string()),
            ..DynamicPropertyValueRecord::default()
        });
        let property = DynamicProperty {
            id: "P1".to_string(),
            name: None,
            values: vec![DynamicPropertyValue::default()],
        };
        let rows = expand_properties(&[property], None, &registry);
        assert_eq!(rows[0].object_type.as_deref(), Some("OrderPaymentIn"));
        assert_eq!(rows[0].value_type, PropertyValueType::Undefined);
    }

    #[test]
    fn key_ignores_decimal_scale() {
        let mut left = text_row("P1", "Weight", "");
        left.value_type = PropertyValueType::Decimal;
        left.decimal_value = Some(dec!(2.50));
        let mut right = left.clone();
        right.decimal_value = Some(dec!(2.5));
        assert_eq!(left.key(), right.key());
    }

    #[test]
    fn patch_keeps_denormalized_name_in_sync() {
        let source = text_row("P1", "Colour", "Red");
        let mut target = text_row("P1", "Color", "Red");
        target.id = Some("row-1".to_string());

        source.patch(&mut target);

        assert_eq!(target.id.as_deref(), Some("row-1"));
        assert_eq!(target.property_name.as_deref(), Some("Colour"));
    }
}
