// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{error::ErrorKind, Field, Type, Value};
use std::collections::HashMap;

/// A review as submitted by a user, not yet validated.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SubmissionRequest {
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
}

impl SubmissionRequest {
    pub fn new(user_name: &str, rating: i32, comment: &str) -> Self {
        Self {
            user_name: user_name.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Fields asked for when building a submission interactively
    pub fn fields() -> Vec<Field<'static>> {
        vec![
            Field::Required("user_name", Type::String),
            Field::Required("rating", Type::Int32),
            Field::Optional("comment", Type::String),
        ]
    }

    pub fn from_prototype(proto: &HashMap<&str, Value>) -> Result<Self, ErrorKind> {
        let user_name = proto
            .get("user_name")
            .ok_or(ErrorKind::MissingField("user_name"))?
            .as_string()?;

        let rating = proto
            .get("rating")
            .ok_or(ErrorKind::MissingField("rating"))?
            .as_i32()?;

        // An omitted comment is left for the validator to report
        let comment = match proto.get("comment") {
            Some(comment) => comment.as_string()?,
            None => "",
        };

        Ok(Self::new(user_name, rating, comment))
    }
}
