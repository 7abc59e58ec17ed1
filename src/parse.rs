use crate::BoolfError;
use once_cell::sync::Lazy;
use pest::{iterators::Pair, Parser};
use regex::Regex;

#[derive(Parser)]
#[grammar_inline = r####"
polynom = { SOI ~ term ~ ( sum ~ term )* ~ EOI }
sum     = _{ "+" | "^" }
term    =  { one | zero | product }
product =  { var ~ ( "*"? ~ var )* }
one     =  { "1" }
zero    =  { "0" }
var     = @{ ("x" | "X") ~ "_"? ~ ASCII_DIGIT+ }

WHITESPACE = _{ " " | "\t" }
"####]
struct PolynomParser;

static RE_VARIABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[xX]_?([0-9]+)$").unwrap());

/// Extract the index of a variable named ```x12``` or ```x_12```
pub(crate) fn parse_variable(name: &str) -> Result<usize, BoolfError> {
    RE_VARIABLE
        .captures(name)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| BoolfError::InvalidPolynomial(name.to_string()))
}

/// Parse a sum of monomials, each monomial is returned as the list of its variables.
///
/// The constant term is an empty monomial and null terms are skipped.
pub(crate) fn parse_monomials(descr: &str) -> Result<Vec<Vec<usize>>, BoolfError> {
    let polynom = PolynomParser::parse(Rule::polynom, descr)
        .map_err(|e| BoolfError::InvalidPolynomial(e.to_string()))?
        .next()
        .ok_or_else(|| BoolfError::InvalidPolynomial(descr.to_string()))?;

    let mut monomials = vec![];
    for term in polynom.into_inner() {
        if term.as_rule() != Rule::term {
            continue; // end of input
        }
        if let Some(monomial) = parse_term(term)? {
            monomials.push(monomial);
        }
    }
    Ok(monomials)
}

fn parse_term(term: Pair<'_, Rule>) -> Result<Option<Vec<usize>>, BoolfError> {
    let descr = term.as_str();
    let inner = term
        .into_inner()
        .next()
        .ok_or_else(|| BoolfError::InvalidPolynomial(descr.to_string()))?;
    match inner.as_rule() {
        Rule::one => Ok(Some(vec![])),
        Rule::zero => Ok(None),
        Rule::product => inner
            .into_inner()
            .map(|var| parse_variable(var.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(BoolfError::InvalidPolynomial(descr.to_string())),
    }
}
