//! Ordered regex substitution over a single HTML string.
//!
//! A [`RuleSet`] is applied front to back; every rule rewrites the output of
//! the rule before it, replacing all non-overlapping matches in one go.

use crate::domain::model::SanitizeReport;
use crate::utils::error::{ConvertError, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// A matcher paired with a replacement template (`$1`, `${name}`, ...).
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    matcher: Regex,
    replacement: String,
    required: bool,
}

impl Rule {
    pub fn new(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name,
            matcher: Regex::new(pattern)?,
            replacement: replacement.into(),
            required: false,
        })
    }

    /// Marks the matcher as a structural marker that must be present in
    /// strict mode.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Replaces every match. Borrows the input back when nothing matched.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.matcher.replace_all(input, self.replacement.as_str())
    }

    /// Single scan that also reports how many matches were replaced.
    fn apply_counted<'a>(&self, input: &'a str) -> (Cow<'a, str>, usize) {
        let mut count = 0;
        let replaced = self.matcher.replace_all(input, |caps: &Captures| {
            count += 1;
            let mut dst = String::new();
            caps.expand(&self.replacement, &mut dst);
            dst
        });
        (replaced, count)
    }
}

/// Immutable, ordered rule sequence.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// One full pass over the sequence, recording how often each rule matched.
    pub fn apply(&self, input: &str) -> SanitizeReport {
        let mut current = input.to_string();
        let mut matches = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (replaced, count) = rule.apply_counted(&current);
            if let Cow::Owned(replaced) = replaced {
                current = replaced;
            }
            tracing::trace!("rule '{}' matched {} time(s)", rule.name, count);
            matches.push((rule.name, count));
        }

        SanitizeReport {
            html: current,
            matches,
        }
    }

    /// Same pass as [`RuleSet::apply`], but a required rule without a match
    /// aborts the whole pass.
    pub fn apply_strict(&self, input: &str) -> Result<SanitizeReport> {
        let report = self.apply(input);
        let missing = self
            .rules
            .iter()
            .zip(&report.matches)
            .find(|(rule, (_, count))| rule.required && *count == 0);
        if let Some((rule, _)) = missing {
            return Err(ConvertError::MissingMarker {
                rule: rule.name.to_string(),
            });
        }
        Ok(report)
    }
}

pub fn sanitize(input: &str, rules: &RuleSet) -> String {
    rules.apply(input).html
}

pub fn sanitize_strict(input: &str, rules: &RuleSet) -> Result<String> {
    rules.apply_strict(input).map(|report| report.html)
}
