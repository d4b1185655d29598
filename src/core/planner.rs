//! Documentation planning
//!
//! The planner drives the filtered walker over the source tree, classifies
//! every directory it reaches, and emits the ordered sequence of
//! documentation units plus the top-level names feeding the index. All
//! planning state is built fresh per run.

use crate::core::classify::{Classifier, PackageKind};
use crate::core::exclude::ExcludeMatcher;
use crate::core::walker::{FilteredWalker, WalkEntry};
use crate::error::{DocplanError, OptionExt, Result};
use crate::models::config::Settings;
use crate::models::plan::{DocUnit, ModulePath, ModuleUnit, PackageUnit, Plan};
use std::path::{Path, PathBuf};

/// Documentation planner for a single source tree.
#[derive(Debug)]
pub struct Planner<'a> {
    settings: &'a Settings,
    matcher: ExcludeMatcher,
    root: PathBuf,
}

impl<'a> Planner<'a> {
    /// Validate the source root and compile the exclusion set.
    ///
    /// A root that is not a directory or a malformed pattern is a fatal
    /// configuration error, surfaced before any traversal starts.
    pub fn new(settings: &'a Settings) -> Result<Self> {
        let root = settings
            .source_path
            .canonicalize()
            .map_err(|_| DocplanError::InvalidPath {
                path: settings.source_path.clone(),
            })?;
        if !root.is_dir() {
            return Err(DocplanError::InvalidPath { path: root });
        }

        let matcher = ExcludeMatcher::compile(&settings.exclude_patterns, &root)?;

        Ok(Self {
            settings,
            matcher,
            root,
        })
    }

    /// The canonicalized source root the plan is built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and produce the ordered plan.
    pub fn plan(&self) -> Result<Plan> {
        let walker = FilteredWalker::new(&self.matcher, self.settings);
        let classifier = Classifier::new(&self.matcher, self.settings);

        // The root's own name becomes the qualifier prefix when the root is
        // a package itself, or always under the namespace policy.
        let root_package = if classifier.is_package_dir(&self.root)?
            || self.settings.implicit_namespaces
        {
            let name = self
                .root
                .file_name()
                .ok_or_error(|| DocplanError::InvalidPath {
                    path: self.root.clone(),
                })?;
            Some(name.to_string_lossy().into_owned())
        } else {
            None
        };

        let mut plan = Plan::default();
        self.plan_dir(
            &self.root,
            root_package.as_deref(),
            &walker,
            &classifier,
            &mut plan,
        )?;
        Ok(plan)
    }

    fn plan_dir(
        &self,
        dir: &Path,
        root_package: Option<&str>,
        walker: &FilteredWalker<'_>,
        classifier: &Classifier<'_>,
        plan: &mut Plan,
    ) -> Result<()> {
        let mut entry = walker.read_entry(dir)?;
        let at_root = dir == self.root;
        let kind = classifier.classify(dir, &entry.files);
        let is_pkg = classifier.is_package(&entry.files);

        if is_pkg {
            classifier.promote_init_marker(&mut entry.files);
        } else if !at_root && !self.settings.implicit_namespaces {
            // non-documentable content living alongside packages; the
            // whole subtree is pruned
            return Ok(());
        }

        let is_namespace = !is_pkg && self.settings.implicit_namespaces;

        if is_pkg || is_namespace {
            // don't emit a doc stub for an empty leaf package
            if !entry.subdirs.is_empty()
                || entry.files.len() > 1
                || kind != PackageKind::Skipped
            {
                // a namespace only earns a unit when something under it is
                // documentable; its subtree is visited either way
                if !is_namespace || walker.has_child_module(dir)? {
                    let name = self.qualified_name(root_package, dir);
                    self.emit_package(&entry, &name, is_namespace, classifier, plan);
                    plan.toplevels.push(name);
                }
            }
        } else {
            // the scan root as a bare directory of standalone modules
            for file in &entry.files {
                if classifier.is_skipped_module(&dir.join(file)) {
                    continue;
                }
                let basename = classifier.module_basename(file).to_string();
                plan.toplevels.push(ModulePath::parse(&basename));
                plan.units.push(DocUnit::Module(ModuleUnit {
                    package: None,
                    basename,
                }));
            }
        }

        for sub in &entry.subdirs {
            let child = dir.join(sub);
            if walker.can_descend(&child) {
                self.plan_dir(&child, root_package, walker, classifier, plan)?;
            }
        }

        Ok(())
    }

    fn emit_package(
        &self,
        entry: &WalkEntry,
        name: &ModulePath,
        is_namespace: bool,
        classifier: &Classifier<'_>,
        plan: &mut Plan,
    ) {
        let subpackages: Vec<ModulePath> = entry
            .subdirs
            .iter()
            .filter(|sub| !classifier.is_skipped_package(&entry.dir.join(sub.as_str())))
            .map(|sub| name.join(sub))
            .collect();

        let mut basenames: Vec<String> = entry
            .files
            .iter()
            .filter(|f| !classifier.is_init_marker(f))
            .filter(|f| !classifier.is_skipped_module(&entry.dir.join(f.as_str())))
            .map(|f| classifier.module_basename(f).to_string())
            .collect();
        basenames.sort();
        basenames.dedup();
        let submodules: Vec<ModulePath> = basenames.iter().map(|b| name.join(b)).collect();

        plan.units.push(DocUnit::Package(PackageUnit {
            name: name.clone(),
            subpackages,
            submodules: submodules.clone(),
            is_namespace,
        }));

        // flattened submodules follow their package immediately, in the
        // same sorted order
        if self.settings.separate_modules {
            for submodule in submodules {
                plan.units.push(DocUnit::Module(ModuleUnit {
                    package: None,
                    basename: submodule.dotted(),
                }));
            }
        }
    }

    fn qualified_name(&self, root_package: Option<&str>, dir: &Path) -> ModulePath {
        let mut segments: Vec<String> =
            root_package.map(str::to_string).into_iter().collect();
        if let Ok(rel) = dir.strip_prefix(&self.root) {
            segments.extend(
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned()),
            );
        }
        ModulePath::from_segments(segments)
    }
}
