use docplan::output::{ArtifactWriter, Renderer};
use docplan::{build_index, DocUnit, IndexUnit, Planner, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_project(root: &Path) {
    let pkg = root.join("pkg");
    let sub = pkg.join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("core.py"), "").unwrap();
    fs::write(pkg.join("util.py"), "").unwrap();
    fs::write(sub.join("__init__.py"), "").unwrap();
    fs::write(sub.join("leaf.py"), "").unwrap();
}

/// Run the whole generation pipeline the way the CLI command does.
fn generate(settings: &Settings) -> Vec<PathBuf> {
    let planner = Planner::new(settings).unwrap();
    let plan = planner.plan().unwrap();
    let index = build_index(&plan.toplevels);

    let mut units = plan.units.clone();
    if !settings.no_toc {
        units.push(DocUnit::Index(IndexUnit { names: index }));
    }

    let renderer = Renderer::new(settings);
    let writer = ArtifactWriter::new(settings);
    writer.ensure_output_dir().unwrap();

    let mut written = Vec::new();
    for unit in &units {
        let name = match unit {
            DocUnit::Package(p) => p.name.dotted(),
            DocUnit::Module(m) => m.qualified_name().dotted(),
            DocUnit::Index(_) => settings.toc_filename.clone(),
        };
        written.push(writer.write(&name, &renderer.render(unit)).unwrap());
    }

    if settings.remove_old {
        writer.remove_stale(&written);
    }

    written
}

fn settings_for(source: &Path, output: &Path) -> Settings {
    Settings {
        source_path: source.to_path_buf(),
        output_dir: output.to_path_buf(),
        quiet: true,
        ..Settings::default()
    }
}

#[test]
fn generates_package_and_toc_artifacts() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_project(tmp.path());

    let settings = settings_for(tmp.path(), &docs);
    let written = generate(&settings);

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["pkg.rst", "pkg.sub.rst", "modules.rst"]);

    let pkg_text = fs::read_to_string(docs.join("pkg.rst")).unwrap();
    assert!(pkg_text.starts_with("pkg package\n"));
    assert!(pkg_text.contains("   pkg.sub\n"));
    assert!(pkg_text.contains(".. automodule:: pkg.core\n"));
    assert!(pkg_text.contains(".. automodule:: pkg.util\n"));

    let toc_text = fs::read_to_string(docs.join("modules.rst")).unwrap();
    assert!(toc_text.contains(".. toctree::"));
    assert!(toc_text.contains("   pkg\n"));
    assert!(!toc_text.contains("pkg.sub"));
}

#[test]
fn separate_modules_generates_one_artifact_per_submodule() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_project(tmp.path());

    let settings = Settings {
        separate_modules: true,
        ..settings_for(tmp.path(), &docs)
    };
    let written = generate(&settings);

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "pkg.rst",
            "pkg.core.rst",
            "pkg.util.rst",
            "pkg.sub.rst",
            "pkg.sub.leaf.rst",
            "modules.rst",
        ]
    );

    let module_text = fs::read_to_string(docs.join("pkg.core.rst")).unwrap();
    assert!(module_text.starts_with("pkg.core module\n"));
    assert!(module_text.contains(".. automodule:: pkg.core\n"));

    // the package artifact links submodules instead of inlining them
    let pkg_text = fs::read_to_string(docs.join("pkg.rst")).unwrap();
    assert!(!pkg_text.contains(".. automodule:: pkg.core\n"));
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_project(tmp.path());

    let settings = Settings {
        dry_run: true,
        ..settings_for(tmp.path(), &docs)
    };
    let written = generate(&settings);

    assert!(!written.is_empty());
    assert!(!docs.exists());
}

#[test]
fn rerun_without_force_keeps_existing_artifacts() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_project(tmp.path());

    let settings = settings_for(tmp.path(), &docs);
    generate(&settings);

    fs::write(docs.join("pkg.rst"), "hand edited").unwrap();
    generate(&settings);
    assert_eq!(
        fs::read_to_string(docs.join("pkg.rst")).unwrap(),
        "hand edited"
    );

    let settings = Settings {
        force: true,
        ..settings_for(tmp.path(), &docs)
    };
    generate(&settings);
    assert!(fs::read_to_string(docs.join("pkg.rst"))
        .unwrap()
        .starts_with("pkg package\n"));
}

#[test]
fn remove_old_sweeps_artifacts_dropped_from_the_plan() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_project(tmp.path());

    let settings = Settings {
        remove_old: true,
        ..settings_for(tmp.path(), &docs)
    };
    generate(&settings);
    assert!(docs.join("pkg.sub.rst").exists());

    // the subpackage disappears from the tree; its artifact must follow
    fs::remove_dir_all(tmp.path().join("pkg/sub")).unwrap();
    generate(&settings);

    assert!(docs.join("pkg.rst").exists());
    assert!(docs.join("modules.rst").exists());
    assert!(!docs.join("pkg.sub.rst").exists());
}

#[test]
fn generation_is_idempotent_on_disk() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    create_project(tmp.path());

    let settings = Settings {
        force: true,
        ..settings_for(tmp.path(), &docs)
    };
    let first = generate(&settings);
    let snapshot: Vec<String> = first
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();

    let second = generate(&settings);
    assert_eq!(first, second);
    let resnapshot: Vec<String> = second
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert_eq!(snapshot, resnapshot);
}
