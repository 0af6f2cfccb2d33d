// Cell text without line breaks or surrounding whitespace
pub fn clean_cell(text: &str) -> String {
    text.replace('\n', " ").replace('\r', "").trim().to_string()
}

// Quoted, with no escaping of embedded quotes
pub fn wrap_csv_cell(text: &str) -> String {
    format!("\"{}\"", clean_cell(text))
}

pub fn sheet_title(name: &str, index: usize, max_row: usize) -> String {
    let mut title = String::new();

    if index > 0 {
        title.push('\n');
    }

    title.push_str(&format!("Sheet \"{}\" ({} rows):\n", clean_cell(name), max_row));
    title
}
