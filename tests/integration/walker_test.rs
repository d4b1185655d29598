use docplan::{ExcludeMatcher, FilteredWalker, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn settings_for(root: &Path) -> Settings {
    Settings {
        source_path: root.to_path_buf(),
        ..Settings::default()
    }
}

fn create_tree(root: &Path) {
    // pkg/
    //   __init__.py, b.py, a.py
    //   sub/__init__.py, leaf.py
    // _private/secret.py
    // .hidden/ignored.py
    // assets/data.json
    let pkg = root.join("pkg");
    let sub = pkg.join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("b.py"), "").unwrap();
    fs::write(pkg.join("a.py"), "").unwrap();
    fs::write(sub.join("__init__.py"), "").unwrap();
    fs::write(sub.join("leaf.py"), "").unwrap();

    let private = root.join("_private");
    fs::create_dir(&private).unwrap();
    fs::write(private.join("secret.py"), "").unwrap();

    let hidden = root.join(".hidden");
    fs::create_dir(&hidden).unwrap();
    fs::write(hidden.join("ignored.py"), "").unwrap();

    let assets = root.join("assets");
    fs::create_dir(&assets).unwrap();
    fs::write(assets.join("data.json"), "{}").unwrap();
}

#[test]
fn walk_visits_kept_directories_in_pre_order() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    let settings = settings_for(tmp.path());
    let matcher = ExcludeMatcher::default();
    let walker = FilteredWalker::new(&matcher, &settings);

    let dirs: Vec<PathBuf> = walker
        .walk(tmp.path())
        .map(|entry| entry.unwrap().dir)
        .collect();

    assert_eq!(
        dirs,
        [
            tmp.path().to_path_buf(),
            tmp.path().join("assets"),
            tmp.path().join("pkg"),
            tmp.path().join("pkg").join("sub"),
        ]
    );
}

#[test]
fn private_directories_appear_only_when_requested() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    let mut settings = settings_for(tmp.path());
    settings.include_private = true;
    let matcher = ExcludeMatcher::default();
    let walker = FilteredWalker::new(&matcher, &settings);

    let dirs: Vec<PathBuf> = walker
        .walk(tmp.path())
        .map(|entry| entry.unwrap().dir)
        .collect();

    assert!(dirs.contains(&tmp.path().join("_private")));
    // hidden directories stay pruned regardless
    assert!(!dirs.contains(&tmp.path().join(".hidden")));
}

#[test]
fn excluded_subtree_is_never_listed() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    let settings = settings_for(tmp.path());
    let patterns = vec!["pkg/sub".to_string()];
    let matcher = ExcludeMatcher::compile(&patterns, tmp.path()).unwrap();
    let walker = FilteredWalker::new(&matcher, &settings);

    let entries: Vec<_> = walker
        .walk(tmp.path())
        .map(|entry| entry.unwrap())
        .collect();

    let pkg_entry = entries
        .iter()
        .find(|e| e.dir == tmp.path().join("pkg"))
        .unwrap();
    assert!(pkg_entry.subdirs.is_empty());
    assert!(!entries.iter().any(|e| e.dir.ends_with("sub")));
}

#[test]
fn files_are_filtered_by_suffix_and_sorted() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    let settings = settings_for(tmp.path());
    let matcher = ExcludeMatcher::default();
    let walker = FilteredWalker::new(&matcher, &settings);

    let entry = walker.read_entry(&tmp.path().join("pkg")).unwrap();
    assert_eq!(entry.files, ["__init__.py", "a.py", "b.py"]);

    let assets = walker.read_entry(&tmp.path().join("assets")).unwrap();
    assert!(assets.files.is_empty());
}

#[test]
fn has_child_module_is_transitive() {
    let tmp = tempdir().unwrap();
    create_tree(tmp.path());

    let settings = settings_for(tmp.path());
    let matcher = ExcludeMatcher::default();
    let walker = FilteredWalker::new(&matcher, &settings);

    assert!(walker.has_child_module(tmp.path()).unwrap());
    assert!(!walker.has_child_module(&tmp.path().join("assets")).unwrap());
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_descended_only_with_follow_links() {
    use std::os::unix::fs::symlink;

    let tmp = tempdir().unwrap();
    let target = tmp.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("linked.py"), "").unwrap();

    let root = tmp.path().join("root");
    fs::create_dir(&root).unwrap();
    symlink(&target, root.join("alias")).unwrap();

    let settings = settings_for(&root);
    let matcher = ExcludeMatcher::default();
    let walker = FilteredWalker::new(&matcher, &settings);

    // the link is listed either way
    let entry = walker.read_entry(&root).unwrap();
    assert_eq!(entry.subdirs, ["alias"]);

    // but without follow_links its contents are unreachable
    assert!(!walker.has_child_module(&root).unwrap());

    let mut settings = settings_for(&root);
    settings.follow_links = true;
    let walker = FilteredWalker::new(&matcher, &settings);
    assert!(walker.has_child_module(&root).unwrap());
}
