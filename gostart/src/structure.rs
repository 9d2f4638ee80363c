//! Structure builder: directory skeleton and generated starter files.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::core::action::Action;
use crate::core::content;
use crate::core::layout::ProjectLayout;
use crate::io::dispatch::{ActionRunner, Dispatcher};

/// Actions that create the skeleton: every directory in plan order, then the
/// entry point, `Makefile` and `.gitignore`.
///
/// Generated files are written unconditionally, so running this against an
/// existing project overwrites them in place.
pub fn structure_actions(layout: &ProjectLayout, project: &str) -> Result<Vec<Action>> {
    let mut actions: Vec<Action> = layout
        .directories
        .iter()
        .map(|dir| Action::create_dir(dir.as_path()))
        .collect();

    let entry_point = content::entry_point(project).context("render entry point")?;
    let makefile = content::makefile(project).context("render Makefile")?;
    let gitignore = content::gitignore(project).context("render .gitignore")?;

    actions.push(Action::write_file(
        layout.entry_point_path.as_path(),
        entry_point,
    ));
    actions.push(Action::write_file(layout.makefile_path.as_path(), makefile));
    actions.push(Action::write_file(layout.gitignore_path.as_path(), gitignore));
    Ok(actions)
}

/// Dispatch the skeleton for `project` under `layout.root`.
#[instrument(skip_all, fields(root = %layout.root.display()))]
pub fn build_structure<R: ActionRunner>(
    dispatcher: &Dispatcher<R>,
    layout: &ProjectLayout,
    project: &str,
) -> Result<usize> {
    let actions = structure_actions(layout, project)?;
    info!(
        directories = layout.directories.len(),
        files = actions.len() - layout.directories.len(),
        "creating project structure"
    );
    dispatcher.dispatch_all(&actions)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::core::layout::directory_plan;
    use crate::test_support::RecordingRunner;

    #[test]
    fn directories_come_before_files_in_fixed_order() {
        let layout = ProjectLayout::new(Path::new("/work"), "demo");
        let actions = structure_actions(&layout, "demo").expect("actions");

        let plan_len = directory_plan("demo").len();
        assert_eq!(actions.len(), plan_len + 3);
        assert!(
            actions[..plan_len]
                .iter()
                .all(|a| matches!(a, Action::CreateDir { .. }))
        );

        let written: Vec<&Path> = actions[plan_len..]
            .iter()
            .map(|a| match a {
                Action::WriteFile { path, .. } => path.as_path(),
                other => panic!("unexpected action {other}"),
            })
            .collect();
        assert_eq!(
            written,
            vec![
                Path::new("/work/demo/cmd/demo/main.go"),
                Path::new("/work/demo/Makefile"),
                Path::new("/work/demo/.gitignore"),
            ]
        );
    }

    #[test]
    fn build_structure_dispatches_every_action() {
        let layout = ProjectLayout::new(Path::new("/work"), "demo");
        let dispatcher = Dispatcher::new(RecordingRunner::default(), false);
        let count = build_structure(&dispatcher, &layout, "demo").expect("build");
        assert_eq!(count, dispatcher.runner().performed().len());
        assert_eq!(
            dispatcher.runner().descriptions()[0],
            "mkdir -p /work/demo/cmd/demo"
        );
    }

    #[test]
    fn build_structure_writes_skeleton_to_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let layout = ProjectLayout::new(temp.path(), "svc");
        let dispatcher = Dispatcher::system(false);

        build_structure(&dispatcher, &layout, "svc").expect("build");

        for dir in &layout.directories {
            assert!(dir.is_dir(), "missing {}", dir.display());
        }
        for file in [
            &layout.entry_point_path,
            &layout.makefile_path,
            &layout.gitignore_path,
        ] {
            let contents = fs::read_to_string(file).expect("read generated file");
            assert!(contents.contains("svc"), "{} lacks project name", file.display());
        }
    }

    #[test]
    fn rebuilding_overwrites_generated_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let layout = ProjectLayout::new(temp.path(), "svc");
        let dispatcher = Dispatcher::system(false);

        build_structure(&dispatcher, &layout, "svc").expect("first build");
        fs::write(&layout.makefile_path, "custom").expect("edit Makefile");
        fs::write(layout.root.join("docs").join("notes.md"), "keep").expect("user file");

        build_structure(&dispatcher, &layout, "svc").expect("second build");

        let makefile = fs::read_to_string(&layout.makefile_path).expect("read");
        assert_eq!(makefile, content::makefile("svc").expect("render"));
        assert!(layout.root.join("docs").join("notes.md").is_file());
    }

    #[test]
    fn dry_run_build_creates_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let layout = ProjectLayout::new(temp.path(), "svc");
        let dispatcher = Dispatcher::system(true);

        build_structure(&dispatcher, &layout, "svc").expect("build");

        assert!(!layout.root.exists());
    }
}
