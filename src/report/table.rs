/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Row data for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Simple table model used for the report's fixed-format sections.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        let row = TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
        };
        self.rows.push(row);
    }

    /// Widens each column to fit its widest cell, keeping the declared
    /// width as a minimum.
    pub fn fit_columns(&mut self) {
        for (idx, column) in self.columns.iter_mut().enumerate() {
            let widest = self
                .rows
                .iter()
                .filter_map(|row| row.cells.get(idx))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            column.width = column.width.max(widest).max(column.header.chars().count());
        }
    }
}

/// Renders [`Table`] instances into padded plain-text columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table) -> String {
        let mut out = String::new();
        if let Some(title) = &table.title {
            out.push_str(title);
            out.push('\n');
        }

        if !table.columns.is_empty() {
            let total_width = table
                .columns
                .iter()
                .map(|col| col.width + 1)
                .sum::<usize>()
                .saturating_sub(1)
                .max(1);
            let line = "-".repeat(total_width);

            let header = table
                .columns
                .iter()
                .map(|col| format!("{:width$} ", col.header, width = col.width))
                .collect::<String>();
            out.push_str(&line);
            out.push('\n');
            out.push_str(header.trim_end());
            out.push('\n');
            out.push_str(&line);
            out.push('\n');
        }

        for row in &table.rows {
            let mut rendered = String::new();
            for (idx, column) in table.columns.iter().enumerate() {
                if idx > 0 {
                    rendered.push(' ');
                }
                let cell = row.cells.get(idx).map(String::as_str).unwrap_or("");
                rendered.push_str(&format!("{:width$}", cell, width = column.width));
            }
            out.push_str(rendered.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_padded_columns() {
        let mut table = Table::new(
            Some("Over budget"),
            vec![TableColumn::new("Category", 8), TableColumn::new("Budget", 6)],
        );
        table.add_row(vec!["Food", "$500.00"]);
        table.fit_columns();
        let rendered = TableRenderer::render(&table);
        assert!(rendered.starts_with("Over budget\n"));
        assert!(rendered.contains("Category Budget"));
        assert!(rendered.contains("Food     $500.00"));
    }

    #[test]
    fn fit_columns_tracks_widest_cell() {
        let mut table = Table::new(None::<String>, vec![TableColumn::new("C", 1)]);
        table.add_row(vec!["a long category name"]);
        table.fit_columns();
        assert_eq!(table.columns[0].width, "a long category name".len());
    }
}
