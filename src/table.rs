//! Table column title derivation.

/// Row types that expose their column schema.
///
/// Column names must be returned in declared order; all rows of a table
/// share the implementing type, so schema uniformity holds by
/// construction.
pub trait TableSchema {
    /// Column names as declared by the underlying schema.
    fn columns() -> &'static [&'static str];
}

/// Derive `(field, label)` pairs for a table of rows.
///
/// Columns whose name starts with an underscore are skipped; remaining
/// names keep declared order and get humanized labels. The first pair
/// is replaced unconditionally by the supplied primary key and title.
/// An empty `rows` slice yields an empty vec.
pub fn get_table_titles<R: TableSchema>(
    rows: &[R],
    primary_key: &str,
    primary_key_title: &str,
) -> Vec<(String, String)> {
    if rows.is_empty() {
        return Vec::new();
    }
    let mut titles: Vec<(String, String)> = R::columns()
        .iter()
        .filter(|k| !k.starts_with('_'))
        .map(|k| ((*k).to_string(), humanize(k)))
        .collect();
    if let Some(first) = titles.first_mut() {
        *first = (primary_key.to_string(), primary_key_title.to_string());
    }
    titles
}

/// Turn a column key into a human readable label: underscores become
/// spaces and each word is title-cased.
fn humanize(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
