//! Column registration for GEF files
//!
//! `#COLUMNINFO` lines register a column slot (position, unit, name and an
//! optional quantity number); `#COLUMNVOID` lines register the per-column
//! sentinel value. Once the header is read the slots are turned into an
//! ordered [`ColumnMap`].

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::app::models::ColumnDescriptor;
use crate::constants::{GEF_SYNTHETIC_KEY_PREFIX, gef_quantity};

/// A column declared by `#COLUMNINFO`, before key resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSlot {
    pub unit: String,
    pub name: String,
    pub quantity_code: Option<u32>,
}

impl ColumnSlot {
    /// Parse `index,unit,name[,type]`; returns the 0-based slot index
    ///
    /// Lines with fewer than three fields, or an index that is not a positive
    /// integer, are ignored.
    pub fn parse(value: &str) -> Option<(usize, Self)> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            warn!("Ignoring COLUMNINFO with {} fields: {}", parts.len(), value);
            return None;
        }

        let index = parse_slot_index(parts[0])?;
        let quantity_code = parts.get(3).and_then(|code| code.parse::<u32>().ok());

        Some((
            index,
            Self {
                unit: parts[1].to_string(),
                name: parts[2].to_string(),
                quantity_code,
            },
        ))
    }

    /// Resolve the semantic descriptor for this slot
    pub fn descriptor(&self, index: usize) -> ColumnDescriptor {
        match self.quantity_code.and_then(gef_quantity) {
            Some(spec) => ColumnDescriptor::from_quantity(spec),
            None => ColumnDescriptor::new(
                format!("{}{}", GEF_SYNTHETIC_KEY_PREFIX, index + 1),
                self.name.clone(),
                self.unit.clone(),
            ),
        }
    }
}

/// Parse `index,voidValue`; returns the 0-based slot index and the sentinel
pub fn parse_column_void(value: &str) -> Option<(usize, f64)> {
    let mut parts = value.split(',').map(str::trim);
    let index = parse_slot_index(parts.next()?)?;
    let void_value = parts.next()?.parse::<f64>().ok()?;
    Some((index, void_value))
}

fn parse_slot_index(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

/// A registered column together with its position in a data line
#[derive(Debug, Clone, PartialEq)]
pub struct MappedColumn {
    /// 0-based token position
    pub index: usize,
    pub descriptor: ColumnDescriptor,
    pub void_value: Option<f64>,
}

/// Ordered mapping from data-line positions to semantic columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    pub columns: Vec<MappedColumn>,
}

impl ColumnMap {
    /// Build the map from registered slots, in slot order
    pub fn build(slots: &BTreeMap<usize, ColumnSlot>, voids: &BTreeMap<usize, f64>) -> Self {
        let columns: Vec<MappedColumn> = slots
            .iter()
            .map(|(&index, slot)| MappedColumn {
                index,
                descriptor: slot.descriptor(index),
                void_value: voids.get(&index).copied(),
            })
            .collect();

        debug!(
            "Column map: {}",
            columns
                .iter()
                .map(|c| format!("{}→{}", c.index + 1, c.descriptor.key))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column descriptors in map order
    pub fn descriptors(&self) -> Vec<ColumnDescriptor> {
        self.columns.iter().map(|c| c.descriptor.clone()).collect()
    }
}
