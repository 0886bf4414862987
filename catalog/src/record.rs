// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{Entity, MovieId, ToTable};
use common_macros::hash_map;
use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, Table};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;

/// A single movie as loaded from a data source, immutable once inside a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    #[serde(rename = "year")]
    pub release_year: i32,
    pub genre: String,
    pub description: String,
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

impl Entity for MovieRecord {
    type Id = MovieId;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "name".into() => self.name.clone(),
            "director".into() => self.director.clone(),
            "year".into() => self.release_year.to_string(),
            "genre".into() => self.genre.clone(),
            "description".into() => self.description.clone(),
            "duration".into() => format!("{} min", self.duration_minutes),
            "rating".into() => format!("{:.1}", self.rating),
        }
    }
}

// One row per movie, in the order given
impl<M: Borrow<MovieRecord>> ToTable for [M] {
    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["id", "name", "year", "genre", "rating"]);

        for movie in self {
            let movie: &MovieRecord = movie.borrow();
            table.add_row(row![
                movie.id,
                movie.name,
                movie.release_year,
                movie.genre,
                format!("{:.1}", movie.rating)
            ]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}
