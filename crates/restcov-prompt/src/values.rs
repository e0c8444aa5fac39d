//! Generated-value tables.

use indexmap::IndexMap;

/// Values generated per operation and parameter.
///
/// Insertion order is preserved on both levels so output files track
/// the order parameters were processed in — diffs between runs stay
/// readable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueTable {
    entries: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl ValueTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the generated values for one parameter of one operation.
    ///
    /// Replaces any values previously recorded for the same pair.
    pub fn insert(&mut self, operation: &str, parameter: &str, values: Vec<String>) {
        self.entries
            .entry(operation.to_string())
            .or_default()
            .insert(parameter.to_string(), values);
    }

    /// Values recorded for one parameter of one operation.
    pub fn get(&self, operation: &str, parameter: &str) -> Option<&[String]> {
        self.entries
            .get(operation)?
            .get(parameter)
            .map(Vec::as_slice)
    }

    /// Operations with at least one recorded parameter, in insertion
    /// order.
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parameters recorded for one operation, in insertion order.
    pub fn parameters<'a>(&'a self, operation: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .get(operation)
            .into_iter()
            .flat_map(|params| params.keys().map(String::as_str))
    }

    /// Number of operations recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut table = ValueTable::new();
        table.insert("GET /pets", "limit", vec!["1".into(), "10".into()]);
        table.insert("GET /pets", "offset", vec!["0".into()]);
        table.insert("POST /pets", "name", vec!["rex".into()]);

        let operations: Vec<_> = table.operations().collect();
        assert_eq!(operations, vec!["GET /pets", "POST /pets"]);
        let parameters: Vec<_> = table.parameters("GET /pets").collect();
        assert_eq!(parameters, vec!["limit", "offset"]);
    }

    #[test]
    fn insert_replaces_existing_values() {
        let mut table = ValueTable::new();
        table.insert("GET /pets", "limit", vec!["1".into()]);
        table.insert("GET /pets", "limit", vec!["5".into(), "9".into()]);
        assert_eq!(
            table.get("GET /pets", "limit"),
            Some(["5".to_string(), "9".to_string()].as_slice())
        );
    }

    #[test]
    fn missing_keys_read_as_none() {
        let table = ValueTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("GET /pets", "limit"), None);
        assert_eq!(table.parameters("GET /pets").count(), 0);
    }
}
