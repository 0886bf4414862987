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

use crate::error::Violation;
use catalog::SubmissionRequest;
use config::ReviewConfig;

type Check = fn(&RequestValidator, &SubmissionRequest) -> Result<(), Violation>;

// Evaluated in this order, the first failure wins
const CHECKS: [Check; 3] = [
    RequestValidator::check_user_name,
    RequestValidator::check_rating,
    RequestValidator::check_comment,
];

#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    config: ReviewConfig,
}

impl RequestValidator {
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// Returns the first rule the submission breaks, `None` if it's valid
    pub fn validate(&self, submission: &SubmissionRequest) -> Option<Violation> {
        let violation = CHECKS
            .iter()
            .find_map(|check| check(self, submission).err());

        if let Some(violation) = &violation {
            log::debug!(
                "Rejected review from '{}': {}",
                submission.user_name,
                violation
            );
        }

        violation
    }

    fn check_user_name(&self, submission: &SubmissionRequest) -> Result<(), Violation> {
        if submission.user_name.trim().is_empty() {
            return Err(Violation::NameRequired);
        }

        Ok(())
    }

    fn check_rating(&self, submission: &SubmissionRequest) -> Result<(), Violation> {
        let ReviewConfig {
            min_rating,
            max_rating,
            ..
        } = self.config;

        if !(min_rating..=max_rating).contains(&submission.rating) {
            return Err(Violation::RatingOutOfRange(min_rating, max_rating));
        }

        Ok(())
    }

    fn check_comment(&self, submission: &SubmissionRequest) -> Result<(), Violation> {
        // Words are separated by ASCII whitespace only, a comment without
        // words is blank and reported before it could count as short
        let words = submission
            .comment
            .split(|c: char| c.is_ascii_whitespace())
            .filter(|word| !word.is_empty())
            .count();

        if words == 0 {
            return Err(Violation::CommentRequired);
        }

        let min_words = self.config.min_comment_words;
        if words < min_words {
            return Err(Violation::CommentTooShort(min_words));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMENT: &str = "A moving story with great acting";

    fn validate(user_name: &str, rating: i32, comment: &str) -> Option<Violation> {
        RequestValidator::default().validate(&SubmissionRequest::new(user_name, rating, comment))
    }

    #[test]
    fn valid_submission() {
        assert_eq!(validate("Alice", 5, COMMENT), None);
        assert_eq!(validate("Alice", 1, "one two three four five"), None);
    }

    #[test]
    fn user_name_is_required() {
        assert_eq!(validate("", 3, COMMENT), Some(Violation::NameRequired));
        assert_eq!(validate(" \t ", 3, COMMENT), Some(Violation::NameRequired));
    }

    #[test]
    fn rating_bounds() {
        assert_eq!(validate("Bob", 0, COMMENT), Some(Violation::RatingOutOfRange(1, 5)));
        assert_eq!(validate("Bob", 6, COMMENT), Some(Violation::RatingOutOfRange(1, 5)));
        assert_eq!(validate("Bob", -2, COMMENT), Some(Violation::RatingOutOfRange(1, 5)));
    }

    #[test]
    fn name_is_checked_before_rating() {
        assert_eq!(validate("  ", 42, ""), Some(Violation::NameRequired));
    }

    #[test]
    fn rating_is_checked_before_comment() {
        assert_eq!(validate("Bob", 9, ""), Some(Violation::RatingOutOfRange(1, 5)));
    }

    #[test]
    fn blank_comment_is_required_not_short() {
        assert_eq!(validate("Carol", 4, ""), Some(Violation::CommentRequired));
        assert_eq!(validate("Carol", 4, "   \n\t "), Some(Violation::CommentRequired));
    }

    #[test]
    fn short_comment() {
        assert_eq!(validate("Carol", 4, "good"), Some(Violation::CommentTooShort(5)));
        assert_eq!(
            validate("Carol", 4, "  really   good\tfilm \n indeed  "),
            Some(Violation::CommentTooShort(5))
        );
    }

    #[test]
    fn words_split_on_ascii_whitespace_only() {
        let joined = "one\u{a0}two\u{a0}three\u{a0}four\u{a0}five";
        assert_eq!(validate("Erin", 3, joined), Some(Violation::CommentTooShort(5)));

        let spaced = "one\ttwo\nthree\r\nfour  five";
        assert_eq!(validate("Erin", 3, spaced), None);
    }

    #[test]
    fn messages() {
        assert_eq!(Violation::NameRequired.to_string(), "User name is required");
        assert_eq!(
            Violation::RatingOutOfRange(1, 5).to_string(),
            "Rating must be between 1 and 5 stars"
        );
        assert_eq!(Violation::CommentRequired.to_string(), "Review comment is required");
        assert_eq!(
            Violation::CommentTooShort(5).to_string(),
            "Review must be at least 5 words"
        );
    }

    #[test]
    fn configured_rules() {
        let validator = RequestValidator::new(ReviewConfig {
            min_rating: 0,
            max_rating: 10,
            min_comment_words: 2,
        });

        assert_eq!(validator.validate(&SubmissionRequest::new("Dan", 0, "loved it")), None);
        assert_eq!(
            validator.validate(&SubmissionRequest::new("Dan", 11, "loved it")),
            Some(Violation::RatingOutOfRange(0, 10))
        );
        assert_eq!(
            validator.validate(&SubmissionRequest::new("Dan", 7, "meh")),
            Some(Violation::CommentTooShort(2))
        );
    }
}
