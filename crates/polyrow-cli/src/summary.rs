//! Console presentation of loaded records.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use polyrow_core::{Persistable, Store};

/// Print every object using its own rendering, separated by blank lines.
pub fn print_objects(objects: &[&dyn Persistable]) {
    for object in objects {
        println!();
        print!("{object}");
    }
}

/// Print a table of object counts per record type.
pub fn print_summary(store: &Store) {
    println!("{}", summary_table(store));
}

pub fn summary_table(store: &Store) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Record type"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for discriminator in store.discriminators() {
        table.add_row(vec![
            Cell::new(discriminator),
            Cell::new(store.group(discriminator).len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(store.len()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Print header columns with their position in the file.
pub fn print_columns(columns: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in columns.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(column)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
