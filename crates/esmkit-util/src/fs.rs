use std::fs;
use std::io;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Directory name that is never descended into while scanning.
pub const NODE_MODULES: &str = "node_modules";

/// Returns true if `path` exists and is a directory.
///
/// Symlinks are not followed: a symlink pointing at a directory returns false.
#[must_use]
pub fn exists_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

/// Returns true if `path` exists and is not a directory.
///
/// Symlinks are not followed, so a symlink counts as a file.
#[must_use]
pub fn exists_file(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| !m.is_dir())
}

/// Create `dir` (and any missing parents) if it does not exist yet.
///
/// # Errors
/// Returns an error if the directory cannot be inspected or created.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    match fs::symlink_metadata(dir) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir),
        Err(e) => Err(e),
    }
}

/// Recursively collect the regular files under `root` accepted by `predicate`.
///
/// Paths are reported relative to `root`, joined with `/` on every platform,
/// and prefixed with `prefix/` when `prefix` is non-empty. The predicate sees
/// the same string that ends up in the result.
///
/// Directories named `node_modules` are skipped at any depth. Symlinks are
/// never followed and never reported, whether they point at a directory or a
/// file. Entries come back in directory-read order, so callers that need a
/// stable order must sort.
///
/// # Errors
/// Returns an error if `root` cannot be made absolute, is not a directory,
/// if any directory below it cannot be read, or if a file name is not valid
/// UTF-8 (`InvalidData`). The first error aborts the whole scan.
pub fn find_files<F>(root: &Path, prefix: &str, mut predicate: F) -> io::Result<Vec<String>>
where
    F: FnMut(&str) -> bool,
{
    let root = std::path::absolute(root)?;
    if !fs::metadata(&root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a directory: {}", root.display()),
        ));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(&root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir() && e.file_name().to_str() == Some(NODE_MODULES))
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        let rel = slash_join(rel)?;
        let path = if prefix.is_empty() {
            rel
        } else {
            format!("{prefix}/{rel}")
        };

        if predicate(&path) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Join the normal components of a relative path with `/`.
fn slash_join(path: &Path) -> io::Result<String> {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("file name is not valid UTF-8: {}", path.display()),
                )
            })?;
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(part);
        }
    }
    Ok(out)
}
