// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommendation-system.
//
// recommendation-system is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommendation-system is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommendation-system.  If not, see <http://www.gnu.org/licenses/>.

pub mod error;
pub mod validator;

pub use error::Violation;
pub use validator::RequestValidator;

use catalog::{Catalog, MovieRecord, SearchQuery};

/// Read only queries over a catalog.
///
/// Criteria are applied as successive stages, each one narrowing what the
/// previous stage left: first the id (which replaces the whole working set
/// with at most one movie), then the name, then the genre. A movie found by
/// id is still dropped if it doesn't match the name or genre.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchEngine<'a> {
    pub fn with_catalog(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&'a MovieRecord> {
        log::info!("Searching movies with {}", query);

        let mut results: Vec<_> = self.catalog.all().iter().collect();

        if let Some(id) = query.effective_id() {
            log::debug!("Narrowing by id({})", id);
            results = self.catalog.by_id(id).into_iter().collect();
        }

        if let Some(name) = query.effective_name() {
            log::debug!("Narrowing by name containing '{}'", name);
            retain_containing(&mut results, name, |movie| movie.name.as_str());
        }

        if let Some(genre) = query.effective_genre() {
            log::debug!("Narrowing by genre containing '{}'", genre);
            retain_containing(&mut results, genre, |movie| movie.genre.as_str());
        }

        log::info!("Found {} movies", results.len());
        results
    }

    /// Movies whose name contains `name`, nothing if `name` is blank
    pub fn search_by_name(&self, name: &str) -> Vec<&'a MovieRecord> {
        if name.trim().is_empty() {
            log::warn!("Empty name provided for search");
            return Vec::new();
        }

        self.search(&SearchQuery::by_name(name))
    }

    /// Movies whose genre contains `genre`, nothing if `genre` is blank
    pub fn search_by_genre(&self, genre: &str) -> Vec<&'a MovieRecord> {
        if genre.trim().is_empty() {
            log::warn!("Empty genre provided for search");
            return Vec::new();
        }

        self.search(&SearchQuery::by_genre(genre))
    }

    /// At least one criterion is usable: a non blank name or genre, or a positive id
    pub fn is_valid_search_request(query: &SearchQuery) -> bool {
        query.effective_name().is_some()
            || query.effective_id().is_some()
            || query.effective_genre().is_some()
    }
}

fn retain_containing<F>(movies: &mut Vec<&MovieRecord>, needle: &str, field: F)
where
    F: Fn(&MovieRecord) -> &str,
{
    let needle = needle.to_lowercase();
    movies.retain(|movie| field(movie).to_lowercase().contains(&needle));
}
