// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use catalog::{error::ErrorKind, Controller, MovieRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Movies stored as a CSV table with a header row
pub struct CsvMoviesController {
    path: PathBuf,
    name: String,
}

impl CsvMoviesController {
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();

        Self { path, name }
    }
}

impl Controller for CsvMoviesController {
    fn name(&self) -> &str {
        &self.name
    }

    fn movies(&self) -> Result<Vec<MovieRecord>, Error> {
        let file = File::open(&self.path)
            .map_err(|e| ErrorKind::SourceUnavailable(self.name.clone(), e.to_string()))?;

        parse_movies(file, &self.name)
    }
}

/// Parse movies from CSV, rows that don't deserialize are skipped
pub fn parse_movies<R: Read>(reader: R, source: &str) -> Result<Vec<MovieRecord>, Error> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut movies = Vec::new();
    for (pos, record) in csv.deserialize::<MovieRecord>().enumerate() {
        match record {
            Ok(movie) => movies.push(movie),
            Err(e) => {
                // Header is line 1
                log::warn!("Skipping line {} of {}", pos + 2, source);
                log::warn!("Reason: {}", e);
            }
        }
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn read_movies_file() -> Result<(), Error> {
        let controller = CsvMoviesController::with_path("data/movies.csv");
        let movies = controller.movies()?;

        let ids: Vec<_> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);

        assert_eq!(
            movies[0].description,
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption."
        );
        assert_approx_eq!(movies[3].rating, 4.5);

        Ok(())
    }

    #[test]
    fn missing_file_fails() {
        let controller = CsvMoviesController::with_path("data/does-not-exist.csv");
        assert!(controller.movies().is_err());
    }

    #[test]
    fn header_only_is_empty() -> Result<(), Error> {
        let document = "id,movieName,director,year,genre,description,duration,imdbRating\n";
        let movies = parse_movies(document.as_bytes(), "inline")?;

        assert!(movies.is_empty());

        Ok(())
    }
}
