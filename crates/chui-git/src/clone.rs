//! Clone an app repository and swap its remotes

use crate::{Error, Result};
use chui_fs::NormalizedPath;
use git2::Repository;
use git2::build::RepoBuilder;

/// Name of the remote pointing back at the app's source after cloning.
pub const UPSTREAM_REMOTE: &str = "chui";

/// Options for [`clone_app`].
#[derive(Debug, Clone, Default)]
pub struct CloneOptions<'a> {
    /// Tag, branch or commit to check out after cloning
    pub revision: Option<&'a str>,
}

/// Clone `source` into `dest`, then replace `origin` with the `chui` remote.
///
/// `dest` must not exist or be an empty directory.
pub fn clone_app(source: &str, dest: &NormalizedPath, options: &CloneOptions<'_>) -> Result<()> {
    let dest_native = dest.to_native();
    if dest_native.is_dir()
        && std::fs::read_dir(&dest_native)
            .map_err(|e| chui_fs::Error::io(&dest_native, e))?
            .next()
            .is_some()
    {
        return Err(Error::DestinationExists { path: dest_native });
    }

    if let Some(parent) = dest_native.parent() {
        std::fs::create_dir_all(parent).map_err(|e| chui_fs::Error::io(parent, e))?;
    }

    tracing::info!(%source, dest = %dest, "Cloning app");
    let repo = RepoBuilder::new()
        .clone(source, &dest_native)
        .map_err(|e| Error::Clone {
            url: source.to_string(),
            message: e.message().to_string(),
        })?;

    if let Some(revision) = options.revision {
        checkout_revision(&repo, source, revision)?;
    }

    repo.remote_delete("origin")?;
    repo.remote(UPSTREAM_REMOTE, source)?;
    tracing::debug!(remote = UPSTREAM_REMOTE, "Replaced origin remote");

    Ok(())
}

fn checkout_revision(repo: &Repository, source: &str, revision: &str) -> Result<()> {
    let (object, reference) = repo
        .revparse_ext(revision)
        .or_else(|_| repo.revparse_ext(&format!("origin/{revision}")))
        .map_err(|_| Error::RevisionNotFound {
            url: source.to_string(),
            revision: revision.to_string(),
        })?;

    repo.checkout_tree(&object, None)?;
    match reference.as_ref().and_then(|r| r.name()) {
        Some(name) if name.starts_with("refs/heads/") => repo.set_head(name)?,
        _ => repo.set_head_detached(object.id())?,
    }
    tracing::debug!(%revision, "Checked out revision");
    Ok(())
}
