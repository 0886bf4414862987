// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod query;
pub mod record;
pub mod submission;
pub mod values;

use anyhow::Error;
use std::collections::HashMap;

pub use entity::{Entity, ToTable};
pub use query::SearchQuery;
pub use record::MovieRecord;
pub use submission::SubmissionRequest;
pub use values::{Field, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
pub type MovieId = i64;

/// A source of movie records (a file, a fixture, ...)
pub trait Controller {
    /// Human readable name of this source, used in logs
    fn name(&self) -> &str;

    /// Read every well-formed movie, in source order
    fn movies(&self) -> Result<Vec<MovieRecord>>;
}

/// Immutable collection of movies plus an index by id.
///
/// Built once at startup and only read afterwards, so it can be shared
/// between threads by reference.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
    index: HashMap<MovieId, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a controller, an unreadable source yields an
    /// empty catalog instead of an error.
    pub fn load<C: Controller + ?Sized>(controller: &C) -> Self {
        match controller.movies() {
            Ok(movies) => {
                let catalog = Self::from_records(movies);
                log::info!(
                    "Loaded {} movies from {}",
                    catalog.len(),
                    controller.name()
                );
                catalog
            }

            Err(e) => {
                log::error!("Failed to load movies from {}", controller.name());
                log::error!("Reason: {}", e);
                Self::empty()
            }
        }
    }

    /// Build a catalog keeping the given order. Movies with a non positive
    /// id, or with an id already seen, are skipped.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MovieRecord>,
    {
        let mut movies = Vec::new();
        let mut index = HashMap::new();

        for movie in records {
            if movie.id <= 0 {
                log::warn!(
                    "Skipping movie '{}' with invalid id({})",
                    movie.name,
                    movie.id
                );
                continue;
            }

            if index.contains_key(&movie.id) {
                log::warn!(
                    "Skipping movie '{}', id({}) is duplicated",
                    movie.name,
                    movie.id
                );
                continue;
            }

            index.insert(movie.id, movies.len());
            movies.push(movie);
        }

        Self { movies, index }
    }

    /// Every movie in load order
    pub fn all(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn by_id(&self, id: MovieId) -> Option<&MovieRecord> {
        if id <= 0 {
            return None;
        }

        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
