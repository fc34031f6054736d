// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColWidth, str_width};

/// One completion candidate: the text to insert and its display width, which is
/// computed once up front since layout needs it for every candidate on every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    display_width: ColWidth,
}

impl Candidate {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let display_width = str_width(&text);
        Self {
            text,
            display_width,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn display_width(&self) -> ColWidth { self.display_width }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self { Candidate::new(text) }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self { Candidate::new(text) }
}

/// Candidates that are displayed together, optionally under a label. An empty label is
/// the same as no label.
///
/// A label is only displayed, it is not a candidate: it never takes part in the common
/// prefix that `Tab` inserts. See [`CompletionResult::from_separated_entries`] for the
/// flat form, where every entry is a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionGroup {
    pub label: Option<String>,
    pub candidates: Vec<Candidate>,
}

impl CompletionGroup {
    #[must_use]
    pub fn unlabeled<I>(candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            label: None,
            candidates: candidates
                .into_iter()
                .map(|it| Candidate::new(it.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn labeled<I>(label: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let label: String = label.into();
        Self {
            label: (!label.is_empty()).then_some(label),
            ..Self::unlabeled(candidates)
        }
    }

    /// The label to print above the candidates, [None] for an empty label.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|it| !it.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.candidates.is_empty() }
}

/// What a [`crate::Completer`] returns: the candidate groups, and `complete_on`, which is
/// the text immediately before the cursor that the candidates would replace (eg: for the
/// line `git che` that is `che`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResult {
    pub groups: Vec<CompletionGroup>,
    pub complete_on: String,
}

impl CompletionResult {
    #[must_use]
    pub fn new(groups: Vec<CompletionGroup>, complete_on: impl Into<String>) -> Self {
        Self {
            groups,
            complete_on: complete_on.into(),
        }
    }

    /// Build groups from a flat list of entries where an empty entry starts a new group.
    /// The groups are unlabeled and every non empty entry is a candidate, so a one entry
    /// group used as a heading is printed like a label but still counts for the common
    /// prefix.
    ///
    /// ```
    /// use tabline::CompletionResult;
    ///
    /// let result = CompletionResult::from_separated_entries(
    ///     ["First group", "", "ab", "ac"],
    ///     "a",
    /// );
    /// assert_eq!(result.groups.len(), 2);
    /// assert_eq!(result.groups[1].candidates.len(), 2);
    /// ```
    #[must_use]
    pub fn from_separated_entries<I>(entries: I, complete_on: impl Into<String>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut groups = vec![CompletionGroup::default()];
        for entry in entries {
            let entry = entry.as_ref();
            if entry.is_empty() {
                groups.push(CompletionGroup::default());
            } else if let Some(group) = groups.last_mut() {
                group.candidates.push(Candidate::new(entry));
            }
        }
        groups.retain(|group| !group.is_empty());
        Self::new(groups, complete_on)
    }

    /// No candidates in any group. Labels alone don't count.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.groups.iter().all(CompletionGroup::is_empty) }

    /// All candidates across all groups, in display order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.groups.iter().flat_map(|group| group.candidates.iter())
    }
}
