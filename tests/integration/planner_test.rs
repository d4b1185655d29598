use docplan::{build_index, DocUnit, ModulePath, Planner, Settings};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn settings_for(root: &Path) -> Settings {
    Settings {
        source_path: root.to_path_buf(),
        ..Settings::default()
    }
}

fn plan_with(settings: &Settings) -> docplan::Plan {
    Planner::new(settings).unwrap().plan().unwrap()
}

fn package_names(plan: &docplan::Plan) -> Vec<String> {
    plan.units
        .iter()
        .filter_map(|u| match u {
            DocUnit::Package(p) => Some(p.name.dotted()),
            _ => None,
        })
        .collect()
}

fn module_names(plan: &docplan::Plan) -> Vec<String> {
    plan.units
        .iter()
        .filter_map(|u| match u {
            DocUnit::Module(m) => Some(m.qualified_name().dotted()),
            _ => None,
        })
        .collect()
}

#[test]
fn regular_package_yields_one_unit_with_sorted_submodules() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("b.py"), "").unwrap();
    fs::write(pkg.join("a.py"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));

    assert_eq!(plan.units.len(), 1);
    match &plan.units[0] {
        DocUnit::Package(p) => {
            assert_eq!(p.name.dotted(), "pkg");
            assert!(!p.is_namespace);
            assert!(p.subpackages.is_empty());
            let submodules: Vec<String> =
                p.submodules.iter().map(|s| s.dotted()).collect();
            assert_eq!(submodules, ["pkg.a", "pkg.b"]);
        }
        other => panic!("expected a package unit, got {:?}", other),
    }
    assert_eq!(
        plan.toplevels,
        [ModulePath::parse("pkg")]
    );
}

#[test]
fn flattening_emits_module_units_immediately_after_their_package() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("a.py"), "").unwrap();
    fs::write(pkg.join("b.py"), "").unwrap();

    let settings = Settings {
        separate_modules: true,
        ..settings_for(tmp.path())
    };
    let plan = plan_with(&settings);

    assert_eq!(plan.units.len(), 3);
    assert!(matches!(&plan.units[0], DocUnit::Package(p) if p.name.dotted() == "pkg"));
    assert!(
        matches!(&plan.units[1], DocUnit::Module(m) if m.qualified_name().dotted() == "pkg.a")
    );
    assert!(
        matches!(&plan.units[2], DocUnit::Module(m) if m.qualified_name().dotted() == "pkg.b")
    );
}

#[test]
fn empty_leaf_package_is_skipped() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("empty_pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));

    assert!(plan.units.is_empty());
    assert!(plan.toplevels.is_empty());
}

#[test]
fn single_module_package_is_still_emitted() {
    // exactly one documentable module, no subpackages: the two-files
    // disjunct of the emit condition keeps the package
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("only.py"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));

    assert_eq!(package_names(&plan), ["pkg"]);
}

#[test]
fn excluded_package_contributes_nothing_and_is_not_descended() {
    let tmp = tempdir().unwrap();
    let excluded = tmp.path().join("excluded");
    let inner = excluded.join("inner_pkg");
    fs::create_dir_all(&inner).unwrap();
    fs::write(excluded.join("__init__.py"), "").unwrap();
    fs::write(excluded.join("mod.py"), "").unwrap();
    fs::write(inner.join("__init__.py"), "").unwrap();
    fs::write(inner.join("deep.py"), "").unwrap();

    let kept = tmp.path().join("kept");
    fs::create_dir(&kept).unwrap();
    fs::write(kept.join("__init__.py"), "").unwrap();
    fs::write(kept.join("mod.py"), "").unwrap();

    let settings = Settings {
        exclude_patterns: vec!["excluded".to_string()],
        ..settings_for(tmp.path())
    };
    let plan = plan_with(&settings);

    assert_eq!(package_names(&plan), ["kept"]);
}

#[test]
fn planning_is_idempotent() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    let sub = pkg.join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("one.py"), "").unwrap();
    fs::write(pkg.join("two.py"), "").unwrap();
    fs::write(sub.join("__init__.py"), "").unwrap();
    fs::write(sub.join("leaf.py"), "").unwrap();

    let settings = Settings {
        separate_modules: true,
        ..settings_for(tmp.path())
    };

    let first = plan_with(&settings);
    let second = plan_with(&settings);

    assert_eq!(first, second);
}

#[test]
fn private_modules_follow_the_inclusion_policy() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("_internal.py"), "").unwrap();
    fs::write(pkg.join("public.py"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));
    match &plan.units[0] {
        DocUnit::Package(p) => {
            let submodules: Vec<String> =
                p.submodules.iter().map(|s| s.dotted()).collect();
            assert_eq!(submodules, ["pkg.public"]);
        }
        other => panic!("expected a package unit, got {:?}", other),
    }

    let settings = Settings {
        include_private: true,
        ..settings_for(tmp.path())
    };
    let plan = plan_with(&settings);
    match &plan.units[0] {
        DocUnit::Package(p) => {
            let submodules: Vec<String> =
                p.submodules.iter().map(|s| s.dotted()).collect();
            assert_eq!(submodules, ["pkg._internal", "pkg.public"]);
        }
        other => panic!("expected a package unit, got {:?}", other),
    }
}

#[test]
fn namespace_with_transitive_module_is_emitted_only_with_namespaces_on() {
    let tmp = tempdir().unwrap();
    let nsroot = tmp.path().join("nsroot");
    let child = nsroot.join("child");
    fs::create_dir_all(&child).unwrap();
    fs::write(child.join("mod.py"), "").unwrap();

    // namespace mode off: the tree yields nothing
    let plan = plan_with(&settings_for(&nsroot));
    assert!(plan.units.is_empty());

    // namespace mode on: both levels are documented as namespaces
    let settings = Settings {
        implicit_namespaces: true,
        ..settings_for(&nsroot)
    };
    let plan = plan_with(&settings);

    assert_eq!(package_names(&plan), ["nsroot", "nsroot.child"]);
    for unit in &plan.units {
        if let DocUnit::Package(p) = unit {
            assert!(p.is_namespace);
        }
    }
}

#[test]
fn namespace_without_any_module_is_not_emitted() {
    let tmp = tempdir().unwrap();
    let nsroot = tmp.path().join("nsroot");
    fs::create_dir_all(nsroot.join("child/grandchild")).unwrap();

    let settings = Settings {
        implicit_namespaces: true,
        ..settings_for(&nsroot)
    };
    let plan = plan_with(&settings);

    assert!(plan.units.is_empty());
    assert!(plan.toplevels.is_empty());
}

#[test]
fn package_root_prefixes_every_descendant() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("rootpkg");
    let sub = root.join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(root.join("__init__.py"), "").unwrap();
    fs::write(root.join("top.py"), "").unwrap();
    fs::write(sub.join("__init__.py"), "").unwrap();
    fs::write(sub.join("leaf.py"), "").unwrap();

    let plan = plan_with(&settings_for(&root));

    assert_eq!(package_names(&plan), ["rootpkg", "rootpkg.sub"]);
    match &plan.units[0] {
        DocUnit::Package(p) => {
            let subpackages: Vec<String> =
                p.subpackages.iter().map(|s| s.dotted()).collect();
            assert_eq!(subpackages, ["rootpkg.sub"]);
            let submodules: Vec<String> =
                p.submodules.iter().map(|s| s.dotted()).collect();
            assert_eq!(submodules, ["rootpkg.top"]);
        }
        other => panic!("expected a package unit, got {:?}", other),
    }

    let index = build_index(&plan.toplevels);
    assert_eq!(index, [ModulePath::parse("rootpkg")]);
}

#[test]
fn skipped_subpackages_are_left_out_of_the_parent_listing() {
    let tmp = tempdir().unwrap();
    let pkg = tmp.path().join("pkg");
    let full = pkg.join("full");
    let hollow = pkg.join("hollow");
    fs::create_dir_all(&full).unwrap();
    fs::create_dir_all(&hollow).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("mod.py"), "").unwrap();
    fs::write(full.join("__init__.py"), "").unwrap();
    fs::write(full.join("leaf.py"), "").unwrap();
    fs::write(hollow.join("__init__.py"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));

    match &plan.units[0] {
        DocUnit::Package(p) => {
            let subpackages: Vec<String> =
                p.subpackages.iter().map(|s| s.dotted()).collect();
            // the init-only subpackage has nothing showable and is dropped
            assert_eq!(subpackages, ["pkg.full"]);
        }
        other => panic!("expected a package unit, got {:?}", other),
    }
    assert_eq!(package_names(&plan), ["pkg", "pkg.full"]);
}

#[test]
fn bare_root_directory_plans_standalone_modules() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("tool.py"), "").unwrap();
    fs::write(tmp.path().join("helper.py"), "").unwrap();
    fs::write(tmp.path().join("_hidden.py"), "").unwrap();
    fs::write(tmp.path().join("readme.txt"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));

    assert_eq!(module_names(&plan), ["helper", "tool"]);
    for unit in &plan.units {
        if let DocUnit::Module(m) = unit {
            assert!(m.package.is_none());
        }
    }
    assert_eq!(
        plan.toplevels,
        [ModulePath::parse("helper"), ModulePath::parse("tool")]
    );
}

#[test]
fn plain_directory_below_root_prunes_its_subtree() {
    let tmp = tempdir().unwrap();
    let assets = tmp.path().join("assets");
    let buried = assets.join("buried_pkg");
    fs::create_dir_all(&buried).unwrap();
    fs::write(assets.join("loose.py"), "").unwrap();
    fs::write(buried.join("__init__.py"), "").unwrap();
    fs::write(buried.join("mod.py"), "").unwrap();

    let pkg = tmp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("mod.py"), "").unwrap();

    let plan = plan_with(&settings_for(tmp.path()));

    // the package buried under plain content is never reached
    assert_eq!(package_names(&plan), ["pkg"]);
    assert!(module_names(&plan).is_empty());
}

#[test]
fn missing_root_is_a_fatal_configuration_error() {
    let tmp = tempdir().unwrap();
    let settings = settings_for(&tmp.path().join("not-there"));
    let err = Planner::new(&settings).unwrap_err();
    assert!(err.is_critical());
}

#[test]
fn build_index_collapses_nested_names() {
    let names: Vec<ModulePath> = ["a", "a.b", "a.b.c", "x"]
        .iter()
        .map(|n| ModulePath::parse(n))
        .collect();
    let expected: Vec<ModulePath> =
        ["a", "x"].iter().map(|n| ModulePath::parse(n)).collect();
    assert_eq!(build_index(&names), expected);
}
