//! Narrowing single-valued fields.
//!
//! Extraction keeps every occurrence of a field. For fields that mean one
//! thing per entry (everything except `text` and `modifier`), the last
//! occurrence wins.

use crate::types::{FieldSlot, ItemRecord};

/// Narrow every single-valued field of a record to a scalar.
///
/// Non-empty sequences become their last element; empty sequences and
/// multi-valued fields are left alone. Applying this twice is the same as
/// applying it once.
pub fn flatten(mut record: ItemRecord) -> ItemRecord {
    for (field, slot) in record.iter_mut() {
        if field.is_multi_valued() {
            continue;
        }

        if let FieldSlot::Seq(values) = slot {
            if let Some(last) = values.pop() {
                *slot = FieldSlot::Scalar(last);
            }
        }
    }

    record
}
