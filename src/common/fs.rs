//! Common file system operations

use std::fs;
use std::path::Path;

/// Copy a file, or a directory recursively, to `dst`
///
/// An existing file at `dst` is overwritten; an existing directory is merged into.
pub fn copy_entry<P1, P2>(src: P1, dst: P2) -> std::io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if src_ref.is_dir() {
        copy_dir_recursive(src_ref, dst_ref)
    } else {
        fs::copy(src_ref, dst_ref).map(|_| ())
    }
}

/// Copy a directory recursively
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> std::io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_entry_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("thrift-0.1.egg");
        let dst = temp.path().join("copy.egg");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old").unwrap();

        copy_entry(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn test_copy_entry_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("hbase-0.2.egg");
        fs::create_dir_all(src.join("hbase")).unwrap();
        fs::write(src.join("hbase/__init__.py"), "").unwrap();
        fs::write(src.join("PKG-INFO"), "Name: hbase").unwrap();

        let dst = temp.path().join("site/hbase-0.2.egg");
        copy_entry(&src, &dst).unwrap();

        assert!(dst.join("hbase/__init__.py").is_file());
        assert_eq!(
            fs::read_to_string(dst.join("PKG-INFO")).unwrap(),
            "Name: hbase"
        );
    }

    #[test]
    fn test_copy_entry_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = copy_entry(temp.path().join("nope"), temp.path().join("dst"));
        assert!(result.is_err());
    }
}
