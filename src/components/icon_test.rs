use std::collections::HashSet;

use super::*;

#[test]
fn every_icon_has_path_data() {
    for icon in Icon::ALL {
        let paths = icon.paths();
        assert!(!paths.is_empty(), "{icon:?} has no paths");
        for d in paths {
            assert!(d.starts_with('M') || d.starts_with('m'), "{icon:?} path must start with a move: {d}");
        }
    }
}

#[test]
fn all_lists_each_variant_once() {
    let unique: HashSet<Icon> = Icon::ALL.into_iter().collect();
    assert_eq!(unique.len(), Icon::ALL.len());
}
