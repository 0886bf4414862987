// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use catalog::{error::ErrorKind, Controller, MovieRecord};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Movies stored as a JSON array of objects
pub struct JsonMoviesController {
    path: PathBuf,
    name: String,
}

impl JsonMoviesController {
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();

        Self { path, name }
    }
}

impl Controller for JsonMoviesController {
    fn name(&self) -> &str {
        &self.name
    }

    fn movies(&self) -> Result<Vec<MovieRecord>, Error> {
        let file = File::open(&self.path)
            .map_err(|e| ErrorKind::SourceUnavailable(self.name.clone(), e.to_string()))?;

        parse_movies(BufReader::new(file), &self.name)
    }
}

/// Parse a JSON array of movies, elements that aren't complete movies are skipped
pub fn parse_movies<R: Read>(reader: R, source: &str) -> Result<Vec<MovieRecord>, Error> {
    let elements: Vec<Value> = serde_json::from_reader(reader)
        .map_err(|e| ErrorKind::MalformedSource(source.into(), e.to_string()))?;

    let mut movies = Vec::with_capacity(elements.len());
    for (pos, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<MovieRecord>(element) {
            Ok(movie) => movies.push(movie),
            Err(e) => {
                log::warn!("Skipping element {} of {}", pos, source);
                log::warn!("Reason: {}", e);
            }
        }
    }

    Ok(movies)
}
