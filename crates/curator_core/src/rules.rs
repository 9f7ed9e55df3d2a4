//! Ordered image-selection rules.
//!
//! A [`RuleTable`] maps a document to exactly one [`ImageAsset`]. Filename
//! rules are evaluated before content rules; within each kind, table order
//! decides and the first match wins. When nothing matches, the fallback asset
//! is returned.

use serde::{Deserialize, Serialize};

use crate::catalog::ImageAsset;

/// What a rule's needles are tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// The document's file name, as-is.
    Filename,
    /// The document's full text, lower-cased.
    Content,
}

/// A predicate and the asset it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    kind: RuleKind,
    needles: Vec<String>,
    asset: ImageAsset,
}

impl Rule {
    /// Build a rule that holds when any needle is a substring of its subject.
    ///
    /// Content needles are lower-cased here so matching is case-insensitive.
    pub fn new<I, S>(kind: RuleKind, needles: I, asset: ImageAsset) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let needles = needles
            .into_iter()
            .map(Into::into)
            .map(|n: String| match kind {
                RuleKind::Content => n.to_lowercase(),
                RuleKind::Filename => n,
            })
            .collect();
        Self {
            kind,
            needles,
            asset,
        }
    }

    fn holds(&self, content_lower: &str, file_name: &str) -> bool {
        let subject = match self.kind {
            RuleKind::Filename => file_name,
            RuleKind::Content => content_lower,
        };
        self.needles.iter().any(|n| subject.contains(n.as_str()))
    }
}

/// Ordered rules plus a fallback.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: ImageAsset,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>, fallback: ImageAsset) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &ImageAsset {
        &self.fallback
    }

    /// Index (into [`RuleTable::rules`]) of the first rule that holds, if any.
    pub fn matching_rule(&self, content: &str, file_name: &str) -> Option<usize> {
        let content_lower = content.to_lowercase();
        let of_kind = |kind: RuleKind| {
            self.rules
                .iter()
                .enumerate()
                .filter(move |(_, rule)| rule.kind == kind)
        };

        of_kind(RuleKind::Filename)
            .chain(of_kind(RuleKind::Content))
            .find(|(_, rule)| rule.holds(&content_lower, file_name))
            .map(|(idx, _)| idx)
    }

    /// Select the asset for a document. Pure: same input, same answer.
    pub fn classify(&self, content: &str, file_name: &str) -> &ImageAsset {
        match self.matching_rule(content, file_name) {
            Some(idx) => {
                log::debug!("{}: rule {} matched", file_name, idx + 1);
                &self.rules[idx].asset
            }
            None => {
                log::debug!("{}: no rule matched, using fallback", file_name);
                &self.fallback
            }
        }
    }
}
