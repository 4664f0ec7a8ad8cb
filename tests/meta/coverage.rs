//! Enforces that `tests/unit` mirrors `src` one file per source file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't need a mirror
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|e| io::Error::other(e.to_string()))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                collect_relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn relative_paths(dir: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let base = Path::new(dir);
        if let Err(error) = collect_relative_paths(base, base, &mut paths) {
            unreachable!("Failed to scan {dir}: {error}");
        }
        paths
    }

    // Tests every source file has a unit test counterpart
    // Verified by deleting tests/unit/math/precision.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = relative_paths("src");
        let unit = relative_paths("tests/unit");

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file has a source counterpart
    // Verified by adding tests/unit/io/stale.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = relative_paths("src");
        let unit = relative_paths("tests/unit");

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file declares at least one test
    // Verified by emptying tests/unit/io/logging.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let without_tests: Vec<_> = relative_paths("tests")
            .into_iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
