// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, table, Table};
use std::collections::HashMap;

pub trait Entity {
    type Id;

    fn get_id(&self) -> Self::Id;
    fn get_data(&self) -> HashMap<String, String> {
        Default::default()
    }
}

pub trait ToTable {
    fn to_table(&self) -> Table;
}

impl<I: ToString, E: Entity<Id = I>> ToTable for E {
    fn to_table(&self) -> Table {
        let mut table = table![["id", self.get_id()]];

        let mut data: Vec<_> = self.get_data().into_iter().collect();
        data.sort();

        for (key, val) in data {
            table.add_row(row![key, val]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_macros::hash_map;

    struct Tag(u32);

    impl Entity for Tag {
        type Id = u32;

        fn get_id(&self) -> Self::Id {
            self.0
        }

        fn get_data(&self) -> HashMap<String, String> {
            hash_map! {
                "label".into() => "classic".into(),
                "color".into() => "red".into(),
            }
        }
    }

    #[test]
    fn entity_table_has_sorted_rows() {
        let table = Tag(3).to_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get_row(0).unwrap().get_cell(1).unwrap().get_content(), "3");
        assert_eq!(table.get_row(1).unwrap().get_cell(0).unwrap().get_content(), "color");
        assert_eq!(table.get_row(2).unwrap().get_cell(0).unwrap().get_content(), "label");
    }
}
