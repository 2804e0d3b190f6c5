// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field projection applied to rows before they are written.

use crate::query::Row;

/// Which fields of a row may reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Write the row as given.
    Passthrough,
    /// Keep only these fields. Listed fields missing from the row stay
    /// missing; nothing is filled in.
    AllowList(&'static [&'static str]),
    /// Drop these fields and keep everything else.
    DenyList(&'static [&'static str]),
}

impl Projection {
    /// Applies the projection to `row`.
    #[must_use]
    pub fn apply(self, mut row: Row) -> Row {
        match self {
            Self::Passthrough => row,
            Self::AllowList(fields) => {
                let mut projected = Row::new();
                for field in fields {
                    if let Some(value) = row.remove(*field) {
                        projected.insert((*field).to_string(), value);
                    }
                }
                projected
            }
            Self::DenyList(fields) => {
                for field in fields {
                    row.remove(*field);
                }
                row
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_allow_list_drops_extra_fields() {
        let projected = Projection::AllowList(&["id", "status"]).apply(row(json!({
            "id": "l-1",
            "status": "active",
            "variety": "Nashik Red",
        })));

        assert_eq!(projected, row(json!({ "id": "l-1", "status": "active" })));
    }

    #[test]
    fn test_allow_list_omits_absent_fields() {
        let projected =
            Projection::AllowList(&["id", "harvestDate"]).apply(row(json!({ "id": "l-1" })));

        assert_eq!(projected.len(), 1);
        assert!(!projected.contains_key("harvestDate"));
    }

    #[test]
    fn test_deny_list_keeps_everything_else() {
        let projected = Projection::DenyList(&["password"]).apply(row(json!({
            "id": "u-1",
            "password": "secret",
            "phone": "9876543210",
        })));

        assert_eq!(
            projected,
            row(json!({ "id": "u-1", "phone": "9876543210" }))
        );
    }
}
