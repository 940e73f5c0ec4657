use polars::prelude::*;

pub const SHORT_HEADERS: [&str; 3] = ["Name", "Section", "Title"];
pub const FULL_HEADERS: [&str; 6] = [
    "Name",
    "Section",
    "Title",
    "Credits",
    "Instructor",
    "Meeting Days",
];

/// Builds a string-typed frame with one column per header; zero rows is fine.
pub fn rows_to_dataframe<const N: usize>(
    headers: [&'static str; N],
    rows: &[[String; N]],
) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(N);
    for (idx, header) in headers.into_iter().enumerate() {
        let values: Vec<&str> = rows.iter().map(|row| row[idx].as_str()).collect();
        columns.push(Series::new(PlSmallStr::from_static(header), values).into_column());
    }
    DataFrame::new(columns)
}

/// Renders a frame as an ASCII grid with a header row.
pub fn render_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| match col.get(row_idx) {
                Ok(AnyValue::Null) | Err(_) => String::new(),
                Ok(AnyValue::String(s)) => s.to_string(),
                Ok(av) => av.to_string(),
            })
            .collect::<Vec<_>>();
        cells.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, value) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(value.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &col_names, &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn push_row(out: &mut String, values: &[String], widths: &[usize]) {
    out.push('|');
    for (value, width) in values.iter().zip(widths) {
        out.push(' ');
        out.push_str(value);
        out.push_str(&" ".repeat(width.saturating_sub(value.len())));
        out.push_str(" |");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_keep_headers() {
        let df = rows_to_dataframe(SHORT_HEADERS, &[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
        let text = render_text_table(&df);
        assert!(text.contains("| Name | Section | Title |"));
    }

    #[test]
    fn rendered_table_pads_to_widest_cell() {
        let rows = [[
            "CSC 216".to_string(),
            "001".to_string(),
            "Programming Concepts".to_string(),
        ]];
        let df = rows_to_dataframe(SHORT_HEADERS, &rows).unwrap();
        let text = render_text_table(&df);
        assert!(text.contains("| CSC 216 | 001     | Programming Concepts |"));
    }
}
