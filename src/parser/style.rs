// Style option list parser
//
// Parses option lists like:
//   fill: "darkorchid", bins: 5, alpha: 0.5
// Only the keys enumerated below are accepted; anything else fails to parse.

use super::lexer::{bool_literal, number_literal, string_literal, ws};
use crate::style::ChartStyle;
use anyhow::{anyhow, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::map,
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

enum ArgValue {
    String(String),
    Number(f64),
    Bool(bool),
}

fn parse_style_args(input: &str) -> IResult<&str, Vec<(&str, ArgValue)>> {
    separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("fill:")), ws(string_literal)), |v| {
                ("fill", ArgValue::String(v))
            }),
            map(preceded(ws(tag("outline:")), ws(string_literal)), |v| {
                ("outline", ArgValue::String(v))
            }),
            map(preceded(ws(tag("alpha:")), ws(number_literal)), |v| {
                ("alpha", ArgValue::Number(v))
            }),
            map(preceded(ws(tag("line_width:")), ws(number_literal)), |v| {
                ("line_width", ArgValue::Number(v))
            }),
            map(preceded(ws(tag("bins:")), ws(number_literal)), |v| {
                ("bins", ArgValue::Number(v))
            }),
            map(preceded(ws(tag("drop_missing:")), ws(bool_literal)), |v| {
                ("drop_missing", ArgValue::Bool(v))
            }),
        )),
    )(input)
}

/// Parse a style option list, applying each option on top of `base`.
pub fn parse_style_spec(input: &str, base: ChartStyle) -> Result<ChartStyle> {
    let (rest, args) = parse_style_args(input)
        .map_err(|e| anyhow!("Invalid style options '{}': {:?}", input, e))?;

    if !rest.trim().is_empty() {
        return Err(anyhow!("Unrecognized style option near '{}'", rest.trim()));
    }

    let mut style = base;
    for (key, val) in args {
        match (key, val) {
            ("fill", ArgValue::String(v)) => style.fill = v,
            ("outline", ArgValue::String(v)) => style.outline = v,
            ("alpha", ArgValue::Number(v)) => style.alpha = v,
            ("line_width", ArgValue::Number(v)) => style.line_width = v as u32,
            ("bins", ArgValue::Number(v)) => style.bins = v as usize,
            ("drop_missing", ArgValue::Bool(v)) => style.drop_missing = v,
            _ => {}
        }
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_spec() {
        let style = parse_style_spec(
            r#"fill: "darkorchid", bins: 5, alpha: 0.5, outline: "white", line_width: 2, drop_missing: true"#,
            ChartStyle::default(),
        )
        .unwrap();
        assert_eq!(style.fill, "darkorchid");
        assert_eq!(style.bins, 5);
        assert_eq!(style.alpha, 0.5);
        assert_eq!(style.outline, "white");
        assert_eq!(style.line_width, 2);
        assert!(style.drop_missing);
    }

    #[test]
    fn test_empty_spec_keeps_defaults() {
        let style = parse_style_spec("", ChartStyle::default()).unwrap();
        assert_eq!(style, ChartStyle::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = parse_style_spec(r#"sparkle: "yes""#, ChartStyle::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("sparkle"));
    }

    #[test]
    fn test_trailing_junk_is_rejected() {
        let result = parse_style_spec(r#"fill: "red", bogus: 1"#, ChartStyle::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_single_option() {
        let style = parse_style_spec("bins: 12", ChartStyle::default()).unwrap();
        assert_eq!(style.bins, 12);
        assert_eq!(style.fill, "steelblue");
    }
}
