//! File-system helpers for unit actions.
//!
//! Thin wrappers over [`std::fs`] whose errors name the path involved, so an
//! action can simply use `?` and still produce a useful diagnostic.

use crate::utils::IResult;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;

/// Returns true if `p` exists and is a regular file.
pub fn file_exists(p: impl AsRef<Path>) -> bool {
    p.as_ref().is_file()
}

/// Returns true if `p` exists and is a directory.
pub fn dir_exists(p: impl AsRef<Path>) -> bool {
    p.as_ref().is_dir()
}

/// Makes `p` absolute by joining it onto the current directory, then normalizes it.
pub fn abs(p: impl AsRef<Path>) -> IResult<PathBuf> {
    let path = p.as_ref();
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir()
        .with_context(|| "couldn't get the current directory of the process")?;
    Ok(normalize(cwd.join(path)))
}

/// Equivalent to [`std::fs::create_dir_all`] with better error messages.
pub fn create_dir_all(p: impl AsRef<Path>) -> IResult<()> {
    let path = p.as_ref();
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory `{}`", path.display()))
}

/// Equivalent to [`std::fs::read`] with better error messages.
pub fn read_bytes(p: impl AsRef<Path>) -> IResult<Vec<u8>> {
    let path = p.as_ref();
    fs::read(path)
        .with_context(|| format!("failed to read file `{}`", path.display()))
}

/// Equivalent to [`std::fs::read_to_string`] with better error messages.
pub fn read_string(p: impl AsRef<Path>) -> IResult<String> {
    let path = p.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file `{}`", path.display()))
}

/// Equivalent to [`std::fs::write`] with better error messages.
pub fn write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> IResult<()> {
    let path = path.as_ref();
    fs::write(path, contents.as_ref())
        .with_context(|| format!("failed to write `{}`", path.display()))
}

/// Deletes each of the given files.
pub fn remove_files<P: AsRef<Path>>(files: &[P]) -> IResult<()> {
    for file in files {
        let path = file.as_ref();
        fs::remove_file(path)
            .with_context(|| format!("failed to remove file `{}`", path.display()))?;
    }
    Ok(())
}

/// Recursively deletes each of the given directories. Missing directories are ignored.
pub fn remove_dirs<P: AsRef<Path>>(dirs: &[P]) -> IResult<()> {
    for dir in dirs {
        let path = dir.as_ref();
        if !path.exists() {
            continue;
        }
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory `{}`", path.display()))?;
    }
    Ok(())
}

/// Copies the contents of file `src` to `dst`, replacing `dst` if it exists.
pub fn copy_file(dst: impl AsRef<Path>, src: impl AsRef<Path>) -> IResult<()> {
    let (dst, src) = (dst.as_ref(), src.as_ref());
    fs::copy(src, dst)
        .with_context(|| format!("failed to copy `{}` to `{}`", src.display(), dst.display()))?;
    Ok(())
}

/// Recursively copies directory `src` and everything in it into `dst`.
pub fn copy_dir(dst: impl AsRef<Path>, src: impl AsRef<Path>) -> IResult<()> {
    let (dst, src) = (dst.as_ref(), src.as_ref());
    create_dir_all(dst)?;
    let entries = fs::read_dir(src)
        .with_context(|| format!("failed to read directory `{}`", src.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read directory `{}`", src.display()))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_dir(&to, &from)?;
        } else {
            copy_file(&to, &from)?;
        }
    }
    Ok(())
}

/// Moves file `src` to `dst` by copying and then deleting it,
/// so it also works across file systems.
pub fn move_file(dst: impl AsRef<Path>, src: impl AsRef<Path>) -> IResult<()> {
    copy_file(dst, &src)?;
    remove_files(&[src])
}

/// Path normalization - like `canonicalize` but without using std::fs
pub fn normalize(p: impl AsRef<Path>) -> PathBuf {
    let path = p.as_ref();
    let mut out = PathBuf::new();
    for component in path.components() {
        let comp = component.as_os_str();
        if comp == "." {
            continue;
        }
        else if comp == ".." {
            out.pop();
        }
        else {
            out.push(comp)
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_() {
        assert_eq!(PathBuf::from("a/b/c"), normalize("a/b/c"));
        assert_eq!(PathBuf::from("a/b/c/e"), normalize("a/b/c/./e"));
        assert_eq!(PathBuf::from("a/b/e"), normalize("a/b/c/../e"));
        #[cfg(windows)]
        assert_eq!(PathBuf::from("a/b/e"), normalize("a\\b\\c\\..\\e"));
    }

    #[test]
    fn abs_() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(abs("a/../b").unwrap(), normalize(cwd.join("b")));
        assert!(abs("x").unwrap().is_absolute());
    }

    #[test]
    fn copy_and_remove_tree() {
        let td = tempfile::tempdir().unwrap();
        let src = td.path().join("assets");
        create_dir_all(src.join("img")).unwrap();
        write(src.join("file.txt"), "hello").unwrap();
        write(src.join("img/logo.svg"), "<svg/>").unwrap();

        let dst = td.path().join("bin");
        copy_dir(&dst, &src).unwrap();
        assert_eq!(read_string(dst.join("file.txt")).unwrap(), "hello");
        assert_eq!(read_bytes(dst.join("img/logo.svg")).unwrap(), b"<svg/>");

        move_file(dst.join("moved.txt"), dst.join("file.txt")).unwrap();
        assert!(file_exists(dst.join("moved.txt")));
        assert!(!file_exists(dst.join("file.txt")));

        remove_dirs(&[&dst, &td.path().join("missing")]).unwrap();
        assert!(!dir_exists(&dst));
        assert!(dir_exists(&src));
    }

    #[test]
    fn errors_name_the_path() {
        let td = tempfile::tempdir().unwrap();
        let missing = td.path().join("nope.txt");
        let err = read_string(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.txt"), "{}", err);
        assert!(remove_files(&[&missing]).is_err());
    }
}
