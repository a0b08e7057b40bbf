//! Id-indexed source tables.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use soc_data::Id;

use crate::model::DataError;

/// A source record that other records refer to by id.
pub trait Keyed {
    /// What the record is called in error messages.
    const KIND: &'static str;

    fn key(&self) -> &Id;
}

/// A source table with an index over its record ids.
///
/// If several records share an id, lookups find the first one.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<Id, usize>,
}

impl<T: Keyed> Table<T> {
    pub fn new(rows: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            index.entry(row.key().clone()).or_insert(position);
        }

        Self { rows, index }
    }

    /// Looks up a record by id.
    ///
    /// The source data is expected to be consistent, so a miss is an error.
    pub fn get(&self, id: &Id) -> Result<&T, DataError> {
        self.index
            .get(id)
            .and_then(|&position| self.rows.get(position))
            .ok_or_else(|| DataError::NotFound { kind: T::KIND, id: id.clone() })
    }
}

impl<T> Table<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de, T: Keyed + Deserialize<'de>> Deserialize<'de> for Table<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::deserialize(deserializer).map(Table::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        id: Id,
        name: String,
    }

    impl Keyed for Row {
        const KIND: &'static str = "row";
        fn key(&self) -> &Id { &self.id }
    }

    fn row(id: i64, name: &str) -> Row {
        Row { id: Id::Num(id), name: name.to_owned() }
    }

    #[test]
    fn first_record_wins() {
        let table = Table::new(vec![row(1, "first"), row(2, "other"), row(1, "second")]);
        assert_eq!(table.get(&Id::Num(1)).unwrap().name, "first");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn missing_record() {
        let table = Table::new(vec![row(1, "first")]);
        let err = table.get(&Id::Num(9)).unwrap_err();
        assert!(matches!(err, DataError::NotFound { kind: "row", id: Id::Num(9) }));
    }

    #[test]
    fn text_and_numeric_ids_differ() {
        let table: Table<Row> = serde_json::from_str(r#"[{ "id": "1", "name": "text" }]"#).unwrap();
        assert!(table.get(&Id::Num(1)).is_err());
        assert_eq!(table.get(&Id::from("1")).unwrap().name, "text");
    }
}
