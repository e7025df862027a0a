//! Testing utilities for virtsort.
//!
//! - [`Transcript`]: Parses demo output back into sections of greet/announce pairs
//! - [`CountingVariant`]: A variant wrapper that counts how often each behavior ran

use crate::variants::instantiate;
use std::{
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};
use virtsort_core::{Behavior, Origin, OverrideKey, Variant};

// ============================================================================
// Transcript
// ============================================================================

/// One `greet` + `announce` pair, e.g. `Class C B::Foo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Class letter written by `greet`.
    pub class: String,
    /// Message written by `announce`, without the newline.
    pub message: String,
}

impl Entry {
    /// Whether this entry is the given class and message.
    pub fn is(&self, class: &str, message: &str) -> bool {
        self.class == class && self.message == message
    }
}

/// A header line followed by its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// The header line; empty for entries before the first header.
    pub header: String,
    /// Entries in output order.
    pub entries: Vec<Entry>,
}

/// Demo output split into sections.
///
/// # Example
///
/// ```rust,ignore
/// let transcript = Transcript::parse(&output);
/// let sorted = transcript.section("Print the list sorted").unwrap();
/// assert_eq!(sorted.entries.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    sections: Vec<Section>,
}

impl Transcript {
    /// Parse output text. Lines starting with `Class ` are entries; any other
    /// non-empty line opens a new section.
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        for line in text.lines().filter(|line| !line.is_empty()) {
            match line.strip_prefix("Class ") {
                Some(rest) => {
                    let (class, message) = rest.split_once(' ').unwrap_or((rest, ""));
                    if sections.is_empty() {
                        sections.push(Section::default());
                    }
                    if let Some(section) = sections.last_mut() {
                        section.entries.push(Entry {
                            class: class.to_string(),
                            message: message.to_string(),
                        });
                    }
                }
                None => sections.push(Section {
                    header: line.to_string(),
                    entries: Vec::new(),
                }),
            }
        }
        Self { sections }
    }

    /// All sections in output order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The first section with the given header.
    pub fn section(&self, header: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.header == header)
    }

    /// Headers in output order.
    pub fn headers(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|section| section.header.as_str())
            .collect()
    }
}

// ============================================================================
// Counting Variant
// ============================================================================

/// Wraps a concrete variant and counts `greet` / `announce` invocations.
///
/// Clones share counters, so a clone can be kept for inspection while the
/// original is moved into a lineup.
///
/// # Example
///
/// ```rust,ignore
/// let probe = CountingVariant::new(Origin::Leaf);
/// let handle = probe.clone();
/// lineup.push(Box::new(probe) as Box<dyn Variant>);
///
/// assert_eq!(handle.count(Behavior::Greet), 0);
/// ```
#[derive(Clone)]
pub struct CountingVariant {
    inner: Arc<dyn Variant>,
    greets: Arc<AtomicUsize>,
    announces: Arc<AtomicUsize>,
}

impl CountingVariant {
    /// Wrap a fresh instance of the variant named by `origin`.
    pub fn new(origin: Origin) -> Self {
        Self {
            inner: Arc::from(instantiate(origin)),
            greets: Arc::new(AtomicUsize::new(0)),
            announces: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `behavior` has run on this variant or its clones.
    pub fn count(&self, behavior: Behavior) -> usize {
        match behavior {
            Behavior::Greet => self.greets.load(Ordering::SeqCst),
            Behavior::Announce => self.announces.load(Ordering::SeqCst),
        }
    }

    /// Reset both counters.
    pub fn reset(&self) {
        self.greets.store(0, Ordering::SeqCst);
        self.announces.store(0, Ordering::SeqCst);
    }
}

impl Variant for CountingVariant {
    fn kind(&self) -> Origin {
        self.inner.kind()
    }

    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        self.greets.fetch_add(1, Ordering::SeqCst);
        self.inner.greet(out)
    }

    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        self.announces.fetch_add(1, Ordering::SeqCst);
        self.inner.announce(out)
    }

    fn resolve(&self, behavior: Behavior) -> OverrideKey {
        self.inner.resolve(behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_sections_and_entries() {
        let transcript = Transcript::parse(
            "First\nClass A A::Foo\nClass C B::Foo\nSecond\nClass B B::Foo\n",
        );
        assert_eq!(transcript.headers(), vec!["First", "Second"]);

        let first = transcript.section("First").unwrap();
        assert_eq!(first.entries.len(), 2);
        assert!(first.entries[1].is("C", "B::Foo"));
        assert!(transcript.section("Second").unwrap().entries[0].is("B", "B::Foo"));
    }

    #[test]
    fn entries_before_any_header_get_an_empty_section() {
        let transcript = Transcript::parse("Class A A::Foo\n");
        assert_eq!(transcript.headers(), vec![""]);
        assert_eq!(transcript.sections()[0].entries.len(), 1);
    }

    #[test]
    fn counting_variant_counts_shared_across_clones() {
        let probe = CountingVariant::new(Origin::Leaf);
        let handle = probe.clone();

        let mut out = Vec::new();
        probe.describe(&mut out).unwrap();
        probe.announce(&mut out).unwrap();

        assert_eq!(handle.count(Behavior::Greet), 1);
        assert_eq!(handle.count(Behavior::Announce), 2);
        assert_eq!(handle.resolve(Behavior::Announce).origin(), Origin::Mid);
        assert_eq!(String::from_utf8(out).unwrap(), "Class C B::Foo\nB::Foo\n");

        handle.reset();
        assert_eq!(probe.count(Behavior::Announce), 0);
    }
}
