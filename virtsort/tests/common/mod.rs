use virtsort::{Lineup, Variant, testing::Transcript};

// ============================================================================
// Expected Output
// ============================================================================

pub const UNSORTED: [(&str, &str); 5] = [
    ("A", "A::Foo"),
    ("C", "B::Foo"),
    ("B", "B::Foo"),
    ("A", "A::Foo"),
    ("C", "B::Foo"),
];

// ============================================================================
// Helpers
// ============================================================================

pub fn demo_output() -> String {
    let mut out = Vec::new();
    virtsort::run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

pub fn lineup_output<V: Variant>(lineup: Lineup<V>, probe: &dyn Variant) -> String {
    let mut out = Vec::new();
    virtsort::run_lineup(lineup, probe, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

pub fn pairs(transcript: &Transcript, header: &str) -> Vec<(String, String)> {
    transcript
        .section(header)
        .unwrap_or_else(|| panic!("missing section {header:?}"))
        .entries
        .iter()
        .map(|entry| (entry.class.clone(), entry.message.clone()))
        .collect()
}

pub fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(class, message)| (class.to_string(), message.to_string()))
        .collect()
}
