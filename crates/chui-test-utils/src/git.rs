//! Git fixtures for app sources.
//!
//! Sources are real repositories on the local filesystem so clones run
//! without network access.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature};

/// Files every cloneable Chui app ships: a Pulumi project template under
/// `.chui/` and an app descriptor template at the root.
pub const SAMPLE_APP_FILES: &[(&str, &str)] = &[
    (
        ".chui/chui.Pulumi.yaml",
        "name: {{globalAppName}}-{{application}}\nbackend:\n  org: {{pulumiOrgName}}\n",
    ),
    (
        "chui-app.sample.yaml",
        "name: {{application}}\nglobalAppName: {{globalAppName}}\npulumiOrgName: {{pulumiOrgName}}\n",
    ),
];

/// Create a repository at `path` containing `files` in one commit on `main`.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn app_source_repo(path: &Path, files: &[(&str, &str)]) -> Repository {
    let repo = Repository::init(path)
        .unwrap_or_else(|e| panic!("app_source_repo: init {} failed: {e}", path.display()));

    for (relative, content) in files {
        let full = path.join(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content)
            .unwrap_or_else(|e| panic!("app_source_repo: write {relative} failed: {e}"));
    }

    commit_all(&repo, "Initial commit");
    repo
}

/// Stage everything in the working tree and commit it on `refs/heads/main`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = Signature::now("Test User", "test@test.com").unwrap();

    let parent = repo
        .refname_to_id("refs/heads/main")
        .ok()
        .and_then(|id| repo.find_commit(id).ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    let oid = repo
        .commit(
            Some("refs/heads/main"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )
        .unwrap();
    repo.set_head("refs/heads/main").unwrap();
    oid
}

/// Create a lightweight tag `name` at HEAD.
///
/// # Panics
/// Panics if the tag cannot be created.
pub fn tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}
