use std::collections::BTreeMap;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use tally::value::Value;

pub fn build_entries_table(entries: &BTreeMap<String, Value>, total: Value) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in entries {
        table.add_row(vec![
            Cell::new(key).add_attribute(Attribute::Dim),
            Cell::new(value)
                .set_alignment(CellAlignment::Right)
                .fg(if value.is_negative() { Color::Red } else { Color::Reset }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_entries_table() {
        let entries = BTreeMap::from([
            ("first".to_string(), Value::Integer(34)),
            ("second".to_string(), Value::Integer(-12)),
        ]);
        let table = build_entries_table(&entries, Value::Integer(22));
        assert_eq!(table.row_iter().count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("first"));
        assert!(rendered.contains("-12"));
        assert!(rendered.contains("Total"));
        assert!(rendered.contains("22"));
    }
}
