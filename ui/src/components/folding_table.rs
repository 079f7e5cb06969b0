use std::collections::{BTreeMap, HashSet};

use dioxus::prelude::*;

use crate::core::interpolate_positional;

/// Header cell of the full table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: String,
}

impl Column {
    pub fn new(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

/// One stacked line of the folded layout. `format` holds a single `{}` that
/// receives the cell value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedColumn {
    pub key: &'static str,
    pub class_name: Option<&'static str>,
    pub format: Option<String>,
}

impl FoldedColumn {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    pub fn class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    fn render_value(&self, value: &str) -> String {
        match &self.format {
            Some(format) => interpolate_positional(format, value),
            None => value.to_string(),
        }
    }
}

/// Display strings of one record, keyed by column key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: BTreeMap<&'static str, String>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.cells.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableLayout {
    /// Both layouts; the theme's media query picks one.
    #[default]
    Responsive,
    Full,
    Folded,
}

impl TableLayout {
    fn shows_full(self) -> bool {
        matches!(self, Self::Responsive | Self::Full)
    }

    fn shows_folded(self) -> bool {
        matches!(self, Self::Responsive | Self::Folded)
    }
}

/// Sibling keys for `data`, unique even when `data_key` values repeat.
///
/// Rows use their `data_key` cell, or `#<index>` when it is missing. A key
/// already taken gets the row index appended until it is free.
fn row_keys(data: &[TableRow], data_key: &str) -> Vec<String> {
    let mut seen = HashSet::with_capacity(data.len());
    data.iter()
        .enumerate()
        .map(|(index, row)| {
            let mut key = match row.get(data_key) {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => format!("#{index}"),
            };
            while !seen.insert(key.clone()) {
                key.push_str(&format!("#{index}"));
            }
            key
        })
        .collect()
}

/// Grid table that folds into stacked, labelled lines on narrow screens.
#[component]
pub fn FoldingTable(
    columns: Vec<Column>,
    folded_columns: Vec<FoldedColumn>,
    data: Vec<TableRow>,
    data_key: String,
    #[props(default)] layout: TableLayout,
) -> Element {
    let keys = row_keys(&data, &data_key);

    rsx! {
        if layout.shows_full() {
            table { class: "folding-table",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column.key}", scope: "col", "{column.label}" }
                        }
                    }
                }
                tbody {
                    for (row, row_key) in data.iter().zip(keys.iter()) {
                        tr { key: "{row_key}",
                            for column in columns.iter() {
                                td { key: "{column.key}", "{row.get(column.key).unwrap_or_default()}" }
                            }
                        }
                    }
                }
            }
        }

        if layout.shows_folded() {
            div { class: "folding-table--folded",
                for (row, row_key) in data.iter().zip(keys.iter()) {
                    div { key: "{row_key}", class: "folded-row",
                        for column in folded_columns.iter() {
                            if let Some(value) = row.get(column.key) {
                                div {
                                    key: "{column.key}",
                                    class: column.class_name.unwrap_or_default(),
                                    "{column.render_value(value)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> (Vec<Column>, Vec<FoldedColumn>) {
        (
            vec![Column::new("name", "Course Name"), Column::new("grade", "Grade")],
            vec![
                FoldedColumn::new("name").class("hd-5 emphasized"),
                FoldedColumn::new("grade").format("Grade: {}"),
            ],
        )
    }

    #[derive(Clone)]
    struct Fixture {
        rows: Vec<TableRow>,
        layout: TableLayout,
    }

    fn render(rows: Vec<TableRow>, layout: TableLayout) -> String {
        fn harness(fixture: Fixture) -> Element {
            let (columns, folded_columns) = sample_columns();
            rsx! {
                FoldingTable {
                    columns,
                    folded_columns,
                    data: fixture.rows,
                    data_key: "name",
                    layout: fixture.layout,
                }
            }
        }

        let mut dom = VirtualDom::new_with_props(harness, Fixture { rows, layout });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn row(name: &str, grade: &str) -> TableRow {
        TableRow::new().with("name", name).with("grade", grade)
    }

    #[test]
    fn full_layout_renders_header_and_cells_in_column_order() {
        let html = render(vec![row("CS101", "A")], TableLayout::Full);
        assert!(html.contains("Course Name"));
        assert!(html.contains("<td>CS101</td><td>A</td>"));
        assert!(!html.contains("folding-table--folded"));
    }

    #[test]
    fn folded_layout_applies_formats_and_classes() {
        let html = render(vec![row("CS101", "A")], TableLayout::Folded);
        assert!(html.contains("Grade: A"));
        assert!(html.contains("class=\"hd-5 emphasized\""));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn responsive_layout_renders_both() {
        let html = render(vec![row("CS101", "A")], TableLayout::Responsive);
        assert!(html.contains("<table"));
        assert!(html.contains("folding-table--folded"));
    }

    #[test]
    fn one_body_row_per_record() {
        let html = render(
            vec![row("CS101", "A"), row("CS102", "B"), row("CS103", "C")],
            TableLayout::Full,
        );
        assert_eq!(html.matches("<tr").count(), 4);
        assert_eq!(html.matches("<td>").count(), 6);
    }

    #[test]
    fn missing_cell_renders_empty() {
        let html = render(vec![TableRow::new().with("name", "CS101")], TableLayout::Full);
        assert!(html.contains("<td>CS101</td><td></td>"));
    }

    #[test]
    fn missing_cell_is_skipped_when_folded() {
        let html = render(vec![TableRow::new().with("name", "CS101")], TableLayout::Folded);
        assert!(!html.contains("Grade:"));
    }

    #[test]
    fn row_keys_fall_back_to_index() {
        let rows = vec![row("CS101", "A"), TableRow::new(), row("", "A")];
        assert_eq!(row_keys(&rows, "name"), vec!["CS101", "#1", "#2"]);
    }

    #[test]
    fn repeated_values_get_distinct_keys() {
        let rows = vec![row("Intro", "A"), row("Intro", "B"), row("Intro#1", "C")];
        let keys = row_keys(&rows, "name");
        assert_eq!(keys[0], "Intro");
        assert_eq!(keys[1], "Intro#1");
        assert_eq!(keys[2], "Intro#1#2");
    }

    #[test]
    fn index_fallback_does_not_clash_with_cell_values() {
        let rows = vec![TableRow::new(), row("#0", "A")];
        let keys = row_keys(&rows, "name");
        assert_ne!(keys[0], keys[1]);
    }

    thread_local! {
        static GENERATION: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
    }

    #[test]
    fn rerender_with_repeated_names_keeps_both_rows() {
        fn harness() -> Element {
            let generation = GENERATION.with(|g| g.get());
            let columns = vec![
                Column::new("name", format!("Course Name {generation}")),
                Column::new("grade", "Grade"),
            ];
            rsx! {
                FoldingTable {
                    columns,
                    folded_columns: vec![FoldedColumn::new("name")],
                    data: vec![row("Intro", "A"), row("Intro", "B")],
                    data_key: "name",
                }
            }
        }

        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();

        GENERATION.with(|g| g.set(1));
        dom.mark_dirty(ScopeId::APP);
        let _ = dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Course Name 1"));
        assert!(html.contains("<td>Intro</td><td>A</td>"));
        assert!(html.contains("<td>Intro</td><td>B</td>"));
    }
}
