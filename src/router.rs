//! Ordered URL rules: first pattern that matches the path wins.

use crate::view::ViewFactory;
use regex::Regex;

/// A positional path capture. All-digit segments arrive as integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathParam {
    Int(i64),
    Text(String),
}

impl PathParam {
    pub fn coerce(segment: &str) -> PathParam {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = segment.parse::<i64>() {
                return PathParam::Int(n);
            }
        }
        PathParam::Text(segment.to_string())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PathParam::Int(n) => Some(*n),
            PathParam::Text(_) => None,
        }
    }
}

pub struct RouteRule {
    pattern: Regex,
    view: ViewFactory,
}

impl RouteRule {
    /// Compile a rule. The pattern is anchored at the start of the path.
    pub fn new(pattern: &str, view: ViewFactory) -> Result<Self, regex::Error> {
        let anchored = if pattern.starts_with('^') {
            pattern.to_string()
        } else {
            format!("^(?:{})", pattern)
        };
        Ok(RouteRule {
            pattern: Regex::new(&anchored)?,
            view,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

pub struct RouteMatch {
    /// Index of the matched rule in declaration order.
    pub rule: usize,
    pub view: ViewFactory,
    pub params: Vec<PathParam>,
}

#[derive(Default)]
pub struct UrlRouter {
    rules: Vec<RouteRule>,
}

impl UrlRouter {
    pub fn new() -> Self {
        UrlRouter { rules: Vec::new() }
    }

    pub fn route(mut self, pattern: &str, view: ViewFactory) -> Result<Self, regex::Error> {
        self.rules.push(RouteRule::new(pattern, view)?);
        Ok(self)
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Match `path` (without query string) against the rules in declaration order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            let caps = rule.pattern.captures(path)?;
            let params = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| PathParam::coerce(m.as_str()))
                .collect();
            Some(RouteMatch {
                rule: index,
                view: rule.view,
                params,
            })
        })
    }
}
