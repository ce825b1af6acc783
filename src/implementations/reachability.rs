//! Bounded reachability analysis over the marking graph of a net.

use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use log::debug;

use crate::errors::FlowcheckResult;
use crate::models::petri::PetriNet;
use crate::traits::Verifier;

/// Cap on distinct markings explored before the search gives up.
const MAX_MARKINGS: usize = 50_000;
/// Token counts saturate here so unbounded message buffers cannot blow up the
/// marking space.
const TOKEN_CAP: u64 = 8;

/// The fragment this engine decides.
enum Query {
    /// `EF atom`: the atom holds in some reachable marking.
    Eventually(String),
    /// `AG !atom`: the atom holds in no reachable marking.
    Never(String),
}

/// What an atom means on the net: a place atom holds when the place carries a
/// token, a transition atom holds when the transition is enabled.
enum Target {
    Place(usize),
    Transition(String),
}

/// Decides `EF atom` / `AG !atom` formulas by breadth-first exploration of the
/// marking graph, bounded in state count and token counts. Formulas outside
/// that fragment are not refuted; a bounded engine cannot disprove what it
/// cannot express, so the veto is left to the other engines.
pub struct BoundedReachabilityVerifier;

impl BoundedReachabilityVerifier {
    pub const NAME: &'static str = "reachability";

    pub fn new() -> Self {
        BoundedReachabilityVerifier
    }

    /// Accepts `EF x`, `EF(x)`, `AG !x`, `AG(!x)` with arbitrary spacing.
    fn parse_query(formula: &str) -> Option<Query> {
        let trimmed = formula.trim();
        let operator = trimmed.get(..2)?;
        let rest = trimmed.get(2..)?;
        // The operator must end at a token boundary; a bare atom that merely
        // starts with the operator letters (`EFfoo`) is not in the fragment.
        if !rest.starts_with(|c: char| c.is_whitespace() || c == '(' || c == '!') {
            return None;
        }
        let body = rest
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();
        match operator {
            "EF" if is_atom(body) => Some(Query::Eventually(body.to_string())),
            "AG" => {
                let negated = body.strip_prefix('!')?.trim();
                is_atom(negated).then(|| Query::Never(negated.to_string()))
            }
            _ => None,
        }
    }

    /// True iff the atom holds in some marking of the (bounded) reachability
    /// graph. An atom naming no node of the net never holds.
    fn ever_holds(net: &PetriNet, atom: &str) -> bool {
        let target = if let Some(idx) = net.places.iter().position(|p| p == atom) {
            Target::Place(idx)
        } else if net.has_transition(atom) {
            Target::Transition(atom.to_string())
        } else {
            return false;
        };

        // Pre/post place index sets per transition, from the arc list.
        let place_indices: HashMap<&str, usize> = net
            .places
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_str(), i))
            .collect();
        let mut inputs: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut outputs: HashMap<&str, Vec<usize>> = HashMap::new();
        for arc in &net.arcs {
            if let Some(&p) = place_indices.get(arc.source.as_str()) {
                inputs.entry(arc.target.as_str()).or_default().push(p);
            } else if let Some(&p) = place_indices.get(arc.target.as_str()) {
                outputs.entry(arc.source.as_str()).or_default().push(p);
            }
        }

        let initial: Vec<u64> = net
            .places
            .iter()
            .map(|p| net.initial_tokens(p).min(TOKEN_CAP))
            .collect();

        let holds = |marking: &[u64]| -> bool {
            match &target {
                Target::Place(idx) => marking[*idx] > 0,
                Target::Transition(name) => inputs
                    .get(name.as_str())
                    .map(|places| places.iter().all(|&p| marking[p] > 0))
                    .unwrap_or(false),
            }
        };

        if holds(&initial) {
            return true;
        }

        let mut seen: HashSet<Vec<u64>> = HashSet::new();
        let mut queue: VecDeque<Vec<u64>> = VecDeque::new();
        seen.insert(initial.clone());
        queue.push_back(initial);

        while let Some(marking) = queue.pop_front() {
            for transition in &net.transitions {
                // A transition with no input places would fire unboundedly;
                // the builder never produces one, so treat it as disabled.
                let Some(pre) = inputs.get(transition.as_str()) else {
                    continue;
                };
                if !pre.iter().all(|&p| marking[p] > 0) {
                    continue;
                }

                let mut next = marking.clone();
                for &p in pre {
                    next[p] -= 1;
                }
                if let Some(post) = outputs.get(transition.as_str()) {
                    for &p in post {
                        next[p] = (next[p] + 1).min(TOKEN_CAP);
                    }
                }
                if holds(&next) {
                    return true;
                }
                if seen.len() >= MAX_MARKINGS {
                    debug!("reachability bound of {MAX_MARKINGS} markings hit");
                    return false;
                }
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

fn is_atom(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl Default for BoundedReachabilityVerifier {
    fn default() -> Self {
        BoundedReachabilityVerifier::new()
    }
}

#[async_trait]
impl Verifier for BoundedReachabilityVerifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn verify(&self, formula: &str, net: &PetriNet) -> FlowcheckResult<bool> {
        match Self::parse_query(formula) {
            Some(Query::Eventually(atom)) => Ok(Self::ever_holds(net, &atom)),
            Some(Query::Never(atom)) => Ok(!Self::ever_holds(net, &atom)),
            None => Ok(true),
        }
    }
}
