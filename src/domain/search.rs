// src/domain/search.rs
//
// Free-text search and exact-field filters shared by every record view.
// Both take anything that iterates borrowed records and return the borrowed
// subset, so callers chain them; chaining gives logical AND.

/// Sentinel value that disables an exact-field filter.
pub const FILTER_ALL: &str = "all";

/// Case-insensitive substring search over the fields `fields_of` selects
/// from each record. An empty term matches every record.
pub fn search_records<'a, T, I, F>(records: I, term: &str, fields_of: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Vec<String>,
{
    let term = term.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            term.is_empty()
                || fields_of(r)
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

/// Exact-match filter on one categorical field. The `"all"` sentinel
/// (or an empty value) keeps every record.
pub fn filter_by_exact_field<'a, T, I, F>(records: I, field_of: F, value: &str) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> String,
{
    records
        .into_iter()
        .filter(|r| value.is_empty() || value == FILTER_ALL || field_of(r) == value)
        .collect()
}
