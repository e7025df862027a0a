//! Filtering only invokes behaviors on the members it selects.

use virtsort::{
    Base, Behavior, Lineup, Mid, Origin, OverrideFilter, Variant, testing::CountingVariant,
};

#[test]
fn test_filter_invokes_only_matches() {
    let probes: Vec<CountingVariant> = [Origin::Base, Origin::Leaf, Origin::Mid]
        .into_iter()
        .map(CountingVariant::new)
        .collect();
    let lineup: Lineup<CountingVariant> = probes.iter().cloned().collect();

    let mut out = Vec::new();
    lineup
        .print_matching(&Mid, Behavior::Announce, &mut out)
        .unwrap();

    assert_eq!(probes[0].count(Behavior::Greet), 0);
    assert_eq!(probes[0].count(Behavior::Announce), 0);
    for probe in &probes[1..] {
        assert_eq!(probe.count(Behavior::Greet), 1);
        assert_eq!(probe.count(Behavior::Announce), 1);
    }
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Class C B::Foo\nClass B B::Foo\n"
    );
}

#[test]
fn test_sorting_never_invokes_behaviors() {
    let probes: Vec<CountingVariant> = [Origin::Leaf, Origin::Base, Origin::Mid]
        .into_iter()
        .map(CountingVariant::new)
        .collect();
    let mut lineup: Lineup<CountingVariant> = probes.iter().cloned().collect();

    lineup.sort_by_override(Behavior::Announce);

    assert_eq!(lineup.kinds(), vec![Origin::Base, Origin::Leaf, Origin::Mid]);
    for probe in &probes {
        assert_eq!(probe.count(Behavior::Greet), 0);
        assert_eq!(probe.count(Behavior::Announce), 0);
    }
}

#[test]
fn test_select_with_prebuilt_filter() {
    let lineup = Lineup::demo();
    let filter = OverrideFilter::of(&Base, Behavior::Announce);

    let selected: Vec<Origin> = lineup.select(filter).map(|m| m.kind()).collect();
    assert_eq!(selected, vec![Origin::Base, Origin::Base]);
    assert_eq!(filter.target().origin(), Origin::Base);
}
