//! Fixed project skeleton: directory plan and generated file locations.

use std::path::{Path, PathBuf};

/// Per-concern packages under `internal/pkg/`.
pub const INTERNAL_PACKAGES: &[&str] = &["config", "handlers", "models", "services"];

/// Directory plan relative to the project root.
///
/// Order carries no meaning for correctness (each entry is created with its
/// parents) but is fixed so logs are deterministic.
pub fn directory_plan(project: &str) -> Vec<PathBuf> {
    let mut plan = vec![
        Path::new("cmd").join(project),
        Path::new("internal").join("app").join(project),
    ];
    plan.extend(
        INTERNAL_PACKAGES
            .iter()
            .map(|pkg| Path::new("internal").join("pkg").join(pkg)),
    );
    plan.extend([
        Path::new("pkg").join(project),
        Path::new("pkg").join("utils"),
        Path::new("api").join("v1"),
        PathBuf::from("docs"),
        Path::new("tests").join("unit"),
        Path::new("tests").join("integration"),
    ]);
    plan
}

/// All canonical paths for a scaffolded project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub entry_point_path: PathBuf,
    pub makefile_path: PathBuf,
    pub gitignore_path: PathBuf,
}

impl ProjectLayout {
    /// Layout for `project` rooted at `base_dir/project`.
    pub fn new(base_dir: &Path, project: &str) -> Self {
        let root = base_dir.join(project);
        let directories = directory_plan(project)
            .into_iter()
            .map(|rel| root.join(rel))
            .collect();
        Self {
            entry_point_path: root.join("cmd").join(project).join("main.go"),
            makefile_path: root.join("Makefile"),
            gitignore_path: root.join(".gitignore"),
            directories,
            root,
        }
    }
}
