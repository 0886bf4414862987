mod basics;

use basics::{parens, parse_number, parse_separator, parse_string};
use catalog::{MovieId, SearchQuery, SubmissionRequest};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, map_res};
use nom::multi::separated_list;
use nom::sequence::{preceded, tuple};
use nom::IResult;
use std::convert::TryFrom;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Criterion {
    Id(MovieId),
    Name(String),
    Genre(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    List,
    Movie(MovieId),
    Search(SearchQuery),
    SearchName(String),
    SearchGenre(String),
    Review(SubmissionRequest),
}

// A repeated criterion replaces the previous one
fn into_query(criteria: Vec<Criterion>) -> SearchQuery {
    criteria
        .into_iter()
        .fold(SearchQuery::new(), |query, criterion| match criterion {
            Criterion::Id(id) => query.with_id(id),
            Criterion::Name(name) => query.with_name(&name),
            Criterion::Genre(genre) => query.with_genre(&genre),
        })
}

fn parse_criterion(input: &str) -> IResult<&str, Criterion> {
    alt((
        map(preceded(tag("id"), parens(parse_number)), Criterion::Id),
        map(preceded(tag("name"), parens(parse_string)), Criterion::Name),
        map(preceded(tag("genre"), parens(parse_string)), Criterion::Genre),
    ))(input)
}

fn parse_rating(input: &str) -> IResult<&str, i32> {
    map_res(parse_number, i32::try_from)(input)
}

fn parse_review(input: &str) -> IResult<&str, SubmissionRequest> {
    let (input, (user_name, _, rating, _, comment)) = tuple((
        parse_string,
        parse_separator,
        parse_rating,
        parse_separator,
        parse_string,
    ))(input)?;

    Ok((input, SubmissionRequest::new(&user_name, rating, &comment)))
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    alt((
        map(tag("list"), |_| Statement::List),
        map(preceded(tag("movie"), parens(parse_number)), Statement::Movie),
        map(
            preceded(tag("search_name"), parens(parse_string)),
            Statement::SearchName,
        ),
        map(
            preceded(tag("search_genre"), parens(parse_string)),
            Statement::SearchGenre,
        ),
        map(
            preceded(
                tag("search"),
                parens(separated_list(parse_separator, parse_criterion)),
            ),
            |criteria| Statement::Search(into_query(criteria)),
        ),
        map(preceded(tag("review"), parens(parse_review)), Statement::Review),
    ))(input)
}

pub fn parse_line(input: &str) -> Option<Statement> {
    let input = input.trim();
    let (rest, statement) = parse_statement(input).ok()?;

    if rest.is_empty() {
        Some(statement)
    } else {
        None
    }
}
