use std::fs;
use std::io;
use std::path::Path;

pub fn ensure_folder_exists(folder: &impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(folder)
}

/// Creates missing parent folders, then writes the text with a single write.
pub fn write_text_file(file_path: &impl AsRef<Path>, text: &str) -> io::Result<()> {
    if let Some(parent_dir) = file_path.as_ref().parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(file_path, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_missing_folders() {
        let root = tempdir().unwrap();
        let target = root.path().join("levels").join("castle").join("collision.s");

        write_text_file(&target, "colEnd\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "colEnd\n");
    }

    #[test]
    fn test_existing_folder_is_fine() {
        let root = tempdir().unwrap();

        ensure_folder_exists(&root.path()).unwrap();
        ensure_folder_exists(&root.path()).unwrap();

        assert!(root.path().is_dir());
    }
}
