use anyhow::{anyhow, Result};
use pathdiff::diff_paths;
use std::path::{Component, Path};

const ASCENT: &str = "../";

pub fn diff(from_path: &Path, to_path: &Path) -> Result<std::path::PathBuf> {
    diff_paths(to_path, from_path).ok_or_else(|| {
        anyhow!(
            "Failed to get relative path from {:?} to {:?}",
            from_path,
            to_path,
        )
    })
}

/// Number of directories between `root` and the directory containing `file`.
pub fn depth(file: &Path, root: &Path) -> Result<usize> {
    let rel_path = diff(root, file)?;

    let mut depth = 0;
    for component in rel_path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => (),
            _ => return Err(anyhow!("{:?} is not inside {:?}", file, root)),
        }
    }

    match depth {
        0 => Err(anyhow!("{:?} is not a file inside {:?}", file, root)),
        depth => Ok(depth - 1),
    }
}

/// Relative prefix that climbs out of a file at `depth` to the parent of the root.
pub fn ascent_prefix(depth: usize) -> String {
    match depth {
        0 => ASCENT.to_string(),
        depth => ASCENT.repeat(depth + 1),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    macro_rules! depth_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (file, root, expected) = $value;
                let file: PathBuf = file.into();
                let root: PathBuf = root.into();
                let result = super::depth(&file, &root).unwrap();
                assert_eq!(expected, result);
            }
        )*
        }
    }

    depth_tests! {
        depth_0: ("modules/slots/index.js", "modules/slots", 0),
        depth_1: ("modules/slots/a/c.js", "modules/slots", 1),
        depth_2: ("modules/slots/a/b/c.js", "modules/slots", 2),
        depth_3: ("/tmp/x/slots/a/b/c/d.js", "/tmp/x/slots", 3),
        depth_4: ("modules/slots/./a/c.js", "modules/slots", 1),
    }

    #[test]
    fn it_rejects_files_outside_root() {
        let file: PathBuf = "modules/engine/index.js".into();
        let root: PathBuf = "modules/slots".into();

        assert!(super::depth(&file, &root).is_err());
    }

    #[test]
    fn it_rejects_the_root_itself() {
        let root: PathBuf = "modules/slots".into();

        assert!(super::depth(&root, &root).is_err());
    }

    macro_rules! ascent_prefix_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (depth, expected) = $value;
                assert_eq!(expected, super::ascent_prefix(depth));
            }
        )*
        }
    }

    ascent_prefix_tests! {
        ascent_0: (0, "../"),
        ascent_1: (1, "../../"),
        ascent_2: (2, "../../../"),
        ascent_5: (5, "../../../../../../"),
    }
}
