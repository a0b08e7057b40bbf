//! Record shapes of the published Songs of Conquest wiki collections.
//!
//! Every collection written by the data collector is a JSON array of one of
//! the types in this crate. The field names follow the camel case naming the
//! site's pages consume.

use std::fmt::{self, Display};
use serde::*;

mod data_def;
pub mod artifact;
pub mod bacteria;
pub mod building;
pub mod faction;
pub mod resource;
pub mod skill;
pub mod terms;
pub mod unit;
pub mod wielder;

/// A value carried through verbatim from the source data.
pub type Opaque = serde_json::Value;

/// Identifier of a record in the extracted game data.
///
/// Most tables use numeric ids, but some blueprints are keyed by strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl Id {
    /// Whether this refers to anything at all.
    ///
    /// The game data uses `0` and `""` as "no reference" placeholders.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Id::Num(num) => *num != 0,
            Id::Text(text) => !text.is_empty(),
        }
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(num) => Display::fmt(num, f),
            Id::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Num(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_owned())
    }
}

/// A rectangle on a sprite sheet.
///
/// The sheet itself is copied next to the collections, named by [`Sprite::sprite_sheet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprite {
    pub name: String,
    pub sprite_sheet: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_placeholders() {
        assert!(!Id::Num(0).is_set());
        assert!(!Id::from("").is_set());
        assert!(Id::Num(12).is_set());
        assert!(Id::from("B1").is_set());
    }

    #[test]
    fn id_accepts_numbers_and_strings() {
        let ids: Vec<Id> = serde_json::from_str(r#"[4, "B1"]"#).unwrap();
        assert_eq!(ids, vec![Id::Num(4), Id::from("B1")]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[4,"B1"]"#);
    }
}
