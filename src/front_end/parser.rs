use super::error::Result;
use crate::types::VId;
use pest::Parser;
use pest_derive::Parser;

pub type EdgeListRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct EdgeListParser;

/// The parsed edge-list file.
///
/// The declared counts come from the header line; whether they agree with
/// the edges is checked by the graph construction, not here.
#[derive(Debug, Default, PartialEq)]
pub struct EdgeList {
    num_vertices: usize,
    num_edges: usize,
    edges: Vec<(VId, VId)>,
}

impl EdgeList {
    pub fn new(num_vertices: usize, num_edges: usize, edges: Vec<(VId, VId)>) -> EdgeList {
        EdgeList {
            num_vertices,
            num_edges,
            edges,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn edges(&self) -> &[(VId, VId)] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<(VId, VId)> {
        self.edges
    }
}

/// Parses an edge-list file: a `"V E"` header line followed by one
/// 0-indexed undirected `"u v"` edge per line.
pub fn parse(input: &str) -> Result<EdgeList> {
    let mut edge_list = EdgeList::default();
    for pair in parse_edge_list(input)?.into_inner() {
        match pair.as_rule() {
            Rule::header => {
                let (num_vertices, num_edges) = parse_int_pair(pair)?;
                edge_list.num_vertices = num_vertices;
                edge_list.num_edges = num_edges;
            }
            Rule::edge => {
                edge_list.edges.push(parse_int_pair(pair)?);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(edge_list)
}

fn parse_edge_list(input: &str) -> Result<pest::iterators::Pair<Rule>> {
    Ok(EdgeListParser::parse(Rule::edge_list, input)?
        .next()
        .unwrap())
}

fn parse_int_pair(pair: pest::iterators::Pair<Rule>) -> Result<(usize, usize)> {
    let mut ints = pair.into_inner();
    let first = parse_int(ints.next().unwrap())?;
    let second = parse_int(ints.next().unwrap())?;
    Ok((first, second))
}

fn parse_int(pair: pest::iterators::Pair<Rule>) -> Result<usize> {
    pair.as_str()
        .parse()
        .map_err(|_| out_of_range_error(pair))
}

fn out_of_range_error(pair: pest::iterators::Pair<Rule>) -> pest::error::Error<EdgeListRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: String::from("integer out of range"),
        },
        pair.as_span(),
    )
}
