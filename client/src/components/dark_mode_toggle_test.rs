use super::*;

#[test]
fn label_names_the_target_mode() {
    assert_eq!(toggle_label(false), "Switch to dark mode");
    assert_eq!(toggle_label(true), "Switch to light mode");
}
