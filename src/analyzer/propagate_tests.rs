use super::*;

#[test]
fn block_spans_following_same_depth_lines() {
    let lines = vec!["a", "b", "      c", "      d", "      e", "f"];
    assert_eq!(propagate_block(&lines, 2), 2..5);
}

#[test]
fn block_stops_at_blank_line() {
    let lines = vec!["      a", "", "      b"];
    assert_eq!(propagate_block(&lines, 0), 0..1);
}

#[test]
fn block_stops_at_depth_change() {
    let lines = vec!["      a", "        b"];
    assert_eq!(propagate_block(&lines, 0), 0..1);
}

#[test]
fn block_at_end_of_input() {
    let lines = vec!["a", "      b"];
    assert_eq!(propagate_block(&lines, 1), 1..2);
}

#[test]
fn tab_and_space_depths_compare_by_width() {
    let lines = vec!["\ta", "    b"];
    assert_eq!(propagate_block(&lines, 0), 0..2);
}
