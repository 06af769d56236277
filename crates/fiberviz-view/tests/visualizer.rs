use fiberviz_view::{
    Mode, PRESETS, Visualizer, VisualizerError, Walk, fiber_links, preset, render_tree, traversal,
};

#[test]
fn presets_all_parse() {
    for preset in &PRESETS {
        let mut visualizer = Visualizer::default();
        let tree = visualizer.load_example(preset.source);
        assert!(tree.is_some(), "preset `{}` failed to parse", preset.name);
    }
}

#[test]
fn keyed_list_descends_in_sibling_order() {
    let mut visualizer = Visualizer::default();
    let tree = visualizer.load_example(preset("list").unwrap().source).unwrap();

    let elements: Vec<_> = traversal(tree, Mode::Descend)
        .into_iter()
        .filter(|path| !path.ends_with("/text"))
        .collect();
    assert_eq!(elements, ["ul", "ul/li[a]", "ul/li[b]", "ul/li[c]"]);
}

#[test]
fn return_walk_reverses_descend_walk() {
    for preset in &PRESETS {
        let mut visualizer = Visualizer::default();
        let tree = visualizer.load_example(preset.source).unwrap();

        let mut descend = traversal(tree, Mode::Descend);
        descend.reverse();
        assert_eq!(descend, traversal(tree, Mode::Return));
        assert_eq!(descend.len(), tree.node_count());
    }
}

#[test]
fn malformed_parse_sets_error_without_a_tree() {
    let mut visualizer = Visualizer::new("<div><span>unclosed");
    assert_eq!(visualizer.parse(), Err(VisualizerError::ParseFailed));
    assert_eq!(visualizer.error(), Some(VisualizerError::ParseFailed));
    assert!(visualizer.tree().is_none());
}

#[test]
fn failed_parse_keeps_previous_tree() {
    let mut visualizer = Visualizer::default();
    visualizer.load_example(preset("form").unwrap().source);

    visualizer.set_input("<form>");
    assert!(visualizer.parse().is_err());
    assert_eq!(visualizer.tree().map(|tree| tree.kind.as_str()), Some("form"));
    assert_eq!(
        visualizer.error().map(|error| error.to_string()).as_deref(),
        Some("parse failed: check the markup syntax")
    );
}

#[test]
fn clear_resets_everything() {
    let mut visualizer = Visualizer::new("   ");
    assert!(visualizer.parse().is_err());
    visualizer.load_example(preset("nested").unwrap().source);
    visualizer.set_input("<div>");

    visualizer.clear();
    assert_eq!(visualizer.input(), "");
    assert!(visualizer.tree().is_none());
    assert_eq!(visualizer.error(), None);
}

#[test]
fn reparsing_yields_equal_trees() {
    let mut visualizer = Visualizer::new(preset("nested").unwrap().source);
    let first = visualizer.parse().unwrap().clone();
    let second = visualizer.parse().unwrap();
    assert_eq!(&first, second);
}

#[test]
fn form_inputs_are_siblings() {
    let mut visualizer = Visualizer::default();
    let tree = visualizer.load_example(preset("form").unwrap().source).unwrap();
    let entries = fiber_links(tree);

    let first_input = &entries[1];
    assert_eq!(first_input.node.kind, "input");
    assert!(first_input.node.children.is_empty());
    assert_eq!(first_input.links.sibling.map(|node| node.kind.as_str()), Some("input"));
    assert!(render_tree(tree).starts_with("form\n  return: null (FiberRoot) | child: ↓ input"));
}

#[test]
fn walk_plays_one_full_pass() {
    let mut visualizer = Visualizer::default();
    let tree = visualizer.load_example(preset("list").unwrap().source).unwrap();
    let mut walk = Walk::new(tree, Mode::Descend);

    walk.playback_mut().play();
    let mut visited = vec![walk.current().unwrap().to_owned()];
    while let Some(step) = walk.playback_mut().tick() {
        if step == 0 {
            break;
        }
        visited.push(walk.current().unwrap().to_owned());
    }

    assert_eq!(visited, walk.steps());
}
