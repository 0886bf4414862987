// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::MovieId;
use std::fmt::{self, Display};

/// Search criteria, every one of them optional.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub id: Option<MovieId>,
    pub genre: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: MovieId) -> Self {
        Self::new().with_id(id)
    }

    pub fn by_name(name: &str) -> Self {
        Self::new().with_name(name)
    }

    pub fn by_genre(genre: &str) -> Self {
        Self::new().with_genre(genre)
    }

    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// The id, only if it can identify a movie.
    pub fn effective_id(&self) -> Option<MovieId> {
        self.id.filter(|id| *id > 0)
    }

    /// The trimmed name, only if something remains after trimming.
    pub fn effective_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// The trimmed genre, only if something remains after trimming.
    pub fn effective_genre(&self) -> Option<&str> {
        non_blank(self.genre.as_deref())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(id) = self.id {
            parts.push(format!("id({})", id));
        }

        if let Some(name) = &self.name {
            parts.push(format!("name('{}')", name));
        }

        if let Some(genre) = &self.genre {
            parts.push(format!("genre('{}')", genre));
        }

        write!(f, "search({})", parts.join(", "))
    }
}
