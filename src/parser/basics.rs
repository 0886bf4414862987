// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while};
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{map_res, opt, recognize, value};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair};
use nom::IResult;

/// Single quoted text, a doubled quote (`''`) stands for one `'`
pub(crate) fn parse_string(input: &str) -> IResult<&str, String> {
    let piece = alt((is_not("'"), value("'", tag("''"))));
    let text = fold_many0(piece, String::new(), |mut acc: String, piece: &str| {
        acc.push_str(piece);
        acc
    });

    delimited(char('\''), text, char('\''))(input)
}

pub(crate) fn parse_number(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

pub(crate) fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited(
        take_while(|c: char| c == ' '),
        tag(","),
        take_while(|c: char| c == ' '),
    )(input)
}

/// Wrap a parser in parentheses, allowing spaces just inside them
pub(crate) fn parens<'a, O, F>(inner: F) -> impl Fn(&'a str) -> IResult<&'a str, O>
where
    F: Fn(&'a str) -> IResult<&'a str, O>,
{
    delimited(pair(char('('), space0), inner, pair(space0, char(')')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string() {
        let parsed = parse_string("'holo, cómo estás?'");
        let expected = ("", "holo, cómo estás?".to_string());

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_string("'holo' #wed2@ws");
        let expected = (" #wed2@ws", "holo".to_string());

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_string("''");
        assert_eq!(parsed, Ok(("", String::new())));
    }

    #[test]
    fn test_parse_string_with_quotes() {
        let parsed = parse_string("'Schindler''s List')");
        assert_eq!(parsed, Ok((")", "Schindler's List".to_string())));

        let parsed = parse_string("''''");
        assert_eq!(parsed, Ok(("", "'".to_string())));

        assert!(parse_string("'unterminated").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        let parsed = parse_number("12345");
        let expected = ("", 12345);

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_number("12c3");
        let expected = ("c3", 12);
        assert_eq!(parsed, Ok(expected));

        let parsed = parse_number("-4)");
        assert_eq!(parsed, Ok((")", -4)));

        assert!(parse_number("-").is_err());
    }

    #[test]
    fn test_parse_separator() {
        assert_eq!(parse_separator(" ,  'x'"), Ok(("'x'", ",")));
        assert!(parse_separator("'x'").is_err());
    }

    #[test]
    fn test_parens() {
        let parsed = parens(parse_number)("(  42 ) rest");
        assert_eq!(parsed, Ok((" rest", 42)));
    }
}
