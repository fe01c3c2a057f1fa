use genealogy::{FamilyRegistry, PersonId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Child(usize, usize),
    Parent(usize, usize),
    Sibling(usize, usize),
    Spouse(usize, usize),
}

fn arb_edit(people: usize) -> impl Strategy<Value = Edit> {
    let pair = (0..people, 0..people);
    prop_oneof![
        pair.clone().prop_map(|(a, b)| Edit::Child(a, b)),
        pair.clone().prop_map(|(a, b)| Edit::Parent(a, b)),
        pair.clone().prop_map(|(a, b)| Edit::Sibling(a, b)),
        pair.prop_map(|(a, b)| Edit::Spouse(a, b)),
    ]
}

fn name(i: usize) -> String {
    format!("Person {i}")
}

fn build(people: usize, edits: &[Edit]) -> (FamilyRegistry, Vec<PersonId>) {
    let mut registry = FamilyRegistry::new();
    let ids: Vec<PersonId> = (0..people)
        .map(|i| registry.get_or_create(&name(i), None, None))
        .collect();
    let graph = registry.graph_mut();
    for edit in edits {
        match *edit {
            Edit::Child(a, b) => graph.add_child(ids[a], ids[b]).unwrap(),
            Edit::Parent(a, b) => graph.add_parent(ids[a], ids[b]).unwrap(),
            Edit::Sibling(a, b) => graph.add_sibling(ids[a], ids[b]).unwrap(),
            Edit::Spouse(a, b) => graph.set_spouse(ids[a], ids[b]).unwrap(),
        }
    }
    (registry, ids)
}

fn has_duplicates(ids: &[PersonId]) -> bool {
    ids.iter()
        .enumerate()
        .any(|(i, id)| ids[..i].contains(id))
}

// ── Parent/child and sibling edges are always mutual and never repeated ──

proptest! {
    #[test]
    fn kin_edges_are_mutual_and_unique(
        edits in prop::collection::vec(arb_edit(6), 0..40)
    ) {
        let (registry, ids) = build(6, &edits);
        let graph = registry.graph();

        for &person in &ids {
            let children = graph.children(person);
            let parents = graph.parents(person);
            let siblings = graph.siblings(person);

            prop_assert!(!has_duplicates(&children));
            prop_assert!(!has_duplicates(&parents));
            prop_assert!(!has_duplicates(&siblings));

            for child in children {
                prop_assert!(graph.parents(child).contains(&person));
            }
            for parent in parents {
                prop_assert!(graph.children(parent).contains(&person));
            }
            for sibling in siblings {
                prop_assert!(graph.siblings(sibling).contains(&person));
            }
        }
    }

    #[test]
    fn replaying_edits_changes_nothing(
        edits in prop::collection::vec(arb_edit(5), 0..30)
    ) {
        let (once, _) = build(5, &edits);
        let doubled: Vec<Edit> = edits.iter().chain(edits.iter()).cloned().collect();
        let (twice, _) = build(5, &doubled);

        for person in (0..5).map(name) {
            prop_assert_eq!(once.children_of(&person), twice.children_of(&person));
            prop_assert_eq!(once.parents_of(&person), twice.parents_of(&person));
            prop_assert_eq!(once.siblings_of(&person), twice.siblings_of(&person));
        }
    }

    #[test]
    fn graph_size_tracks_registered_names(
        picks in prop::collection::vec(0usize..8, 0..30),
        edits in prop::collection::vec(arb_edit(3), 0..10)
    ) {
        let (mut registry, _) = build(3, &edits);
        for i in picks {
            registry.get_or_create(&name(i), None, None);
        }

        prop_assert_eq!(registry.graph().len(), registry.len());
        prop_assert_eq!(registry.names().count(), registry.len());
    }

    #[test]
    fn latest_marriage_is_mutual(a in 0usize..4, b in 0usize..4) {
        let (registry, ids) = build(4, &[Edit::Spouse(a, b)]);
        let graph = registry.graph();
        prop_assert_eq!(graph.spouse(ids[a]), Some(ids[b]));
        prop_assert_eq!(graph.spouse(ids[b]), Some(ids[a]));
    }
}
