// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, DError)]
pub enum ErrorKind {
    #[error("Couldn't found movie with id({0})")]
    NotFoundById(i64),

    #[error("Couldn't read movies from {0}: {1}")]
    SourceUnavailable(String, String),

    #[error("Malformed movie source {0}: {1}")]
    MalformedSource(String, String),

    #[error("Failed to cast to some value ({0})")]
    ValueConvert(String),

    #[error("Couldn't cast value to {0}")]
    CastingValue(&'static str),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}
