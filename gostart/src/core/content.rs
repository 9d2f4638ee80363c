//! Starter file contents for a new service.
//!
//! Each generator is a pure function of the project name. Templates are fixed
//! and compiled into the binary; the only substitution is `project`.

use anyhow::Result;
use minijinja::Environment;
use serde::Serialize;

const MAKEFILE_TEMPLATE: &str = include_str!("templates/Makefile.j2");
const ENTRY_POINT_TEMPLATE: &str = include_str!("templates/main.go.j2");
const GITIGNORE_TEMPLATE: &str = include_str!("templates/gitignore.j2");

/// Values available to every template.
#[derive(Debug, Clone, Serialize)]
struct TemplateContext<'a> {
    project: &'a str,
}

/// Template engine wrapper around minijinja.
struct ContentEngine {
    env: Environment<'static>,
}

impl ContentEngine {
    fn new() -> Self {
        let mut env = Environment::new();
        // Generated files must end with a newline.
        env.set_keep_trailing_newline(true);
        env.add_template("makefile", MAKEFILE_TEMPLATE)
            .expect("makefile template should be valid");
        env.add_template("entry_point", ENTRY_POINT_TEMPLATE)
            .expect("entry point template should be valid");
        env.add_template("gitignore", GITIGNORE_TEMPLATE)
            .expect("gitignore template should be valid");
        Self { env }
    }

    fn render(&self, name: &str, project: &str) -> Result<String> {
        let template = self.env.get_template(name)?;
        let rendered = template.render(TemplateContext { project })?;
        Ok(rendered)
    }
}

/// `Makefile` with build/test/lint/run/clean targets for `cmd/<project>`.
pub fn makefile(project: &str) -> Result<String> {
    ContentEngine::new().render("makefile", project)
}

/// `cmd/<project>/main.go` boilerplate.
pub fn entry_point(project: &str) -> Result<String> {
    ContentEngine::new().render("entry_point", project)
}

/// `.gitignore` covering Go build output plus the project's own binary.
pub fn gitignore(project: &str) -> Result<String> {
    ContentEngine::new().render("gitignore", project)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_body<'a>(makefile: &'a str, target: &str) -> Vec<&'a str> {
        let header = format!("{target}:");
        makefile
            .lines()
            .skip_while(|line| *line != header)
            .skip(1)
            .take_while(|line| line.starts_with('\t'))
            .collect()
    }

    #[test]
    fn makefile_build_target_references_entry_point() {
        let out = makefile("testproj").expect("render");
        let build = target_body(&out, "build");
        assert_eq!(build, vec!["\tgo build -o bin/testproj ./cmd/testproj"]);
    }

    #[test]
    fn makefile_clean_target_references_project() {
        let out = makefile("testproj").expect("render");
        let clean = target_body(&out, "clean");
        assert!(clean.iter().any(|line| line.contains("testproj")));
    }

    #[test]
    fn makefile_declares_all_targets() {
        let out = makefile("svc").expect("render");
        for target in ["build", "test", "lint", "run", "clean"] {
            assert!(
                out.lines().any(|line| line == format!("{target}:")),
                "missing target {target}"
            );
            assert!(!target_body(&out, target).is_empty(), "empty target {target}");
        }
        assert!(out.starts_with(".PHONY: build test lint run clean\n"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn entry_point_names_project() {
        let out = entry_point("demo").expect("render");
        assert!(out.starts_with("package main\n"));
        assert!(out.contains("Starting demo..."));
        assert!(out.contains("func main()"));
    }

    #[test]
    fn gitignore_lists_project_binary() {
        let out = gitignore("demo").expect("render");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.contains(&"/demo"));
        assert!(lines.contains(&"bin/"));
        assert!(lines.contains(&"vendor/"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn output_depends_only_on_project_name() {
        assert_eq!(makefile("a").expect("a"), makefile("a").expect("a again"));
        assert_ne!(makefile("a").expect("a"), makefile("b").expect("b"));
        assert_eq!(gitignore("x").expect("x"), gitignore("x").expect("x again"));
    }
}
