use super::*;

#[test]
fn groups_by_seed_and_drops_unpatterned_names() {
    let groups = group_by_seed(["1-alpha.png", "2-alpha.png", "1-beta.png", "badname.png"]);

    assert_eq!(groups.len(), 2);
    assert_eq!(
        groups["alpha"],
        BTreeSet::from(["1-alpha.png".to_owned(), "2-alpha.png".to_owned()])
    );
    assert_eq!(groups["beta"], BTreeSet::from(["1-beta.png".to_owned()]));
    assert!(groups.values().all(|g| !g.contains("badname.png")));
}

#[test]
fn parse_seed_requires_exactly_one_of_each_separator() {
    assert_eq!(parse_seed("00012-4242.png"), Some("4242"));
    assert_eq!(parse_seed("badname.png"), None);
    assert_eq!(parse_seed("1-2-3.png"), None);
    assert_eq!(parse_seed("1-seed.tar.gz"), None);
    assert_eq!(parse_seed("1-seed"), None);
}

#[test]
fn single_group_bypasses_pattern() {
    let groups = single_group(["badname.png", "1-alpha.png", "notes.txt"]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[UNGROUPED_KEY].len(), 3);
}

#[test]
fn empty_input_yields_no_seed_groups() {
    assert!(group_by_seed(Vec::<String>::new()).is_empty());
}
