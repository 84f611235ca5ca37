//! Path Resolver
//!
//! Maps a textual path plus the current node to a node handle without
//! touching the tree. Only the leading segment may carry special meaning:
//! an empty leading segment (absolute path), `..` or `.`. Every later
//! segment is an exact, case-sensitive child name.

use super::tree::RamFs;
use super::types::{FsError, NodeId, SEPARATOR};

/// Where traversal starts, decided by the leading segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Start {
    Root,
    Parent,
    Current,
}

impl Start {
    fn prefix(self) -> &'static str {
        match self {
            Start::Root => "/",
            Start::Parent => "..",
            Start::Current => "",
        }
    }
}

/// Split a path on the separator. Empty segments are kept; the caller
/// decides what they mean.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Resolve `path` relative to `current`.
pub fn resolve(fs: &RamFs, current: NodeId, path: &str) -> Result<NodeId, FsError> {
    if path.is_empty() {
        return Err(FsError::EmptyInput {
            operation: "resolve".to_string(),
        });
    }

    let segments = split_path(path);
    let (start, mut node, rest) = match segments[0] {
        "" => (Start::Root, fs.root(), &segments[1..]),
        ".." => {
            let parent = fs.parent(current).unwrap_or(current);
            (Start::Parent, parent, &segments[1..])
        }
        "." => return Ok(current),
        _ => (Start::Current, current, &segments[..]),
    };

    let mut consumed: Vec<&str> = Vec::new();
    let mut at_file = false;

    for segment in rest.iter().copied().filter(|s| !s.is_empty()) {
        if at_file {
            return Err(FsError::NotADirectory {
                path: render_consumed(start, &consumed),
            });
        }

        let Some(child) = fs.node(node).and_then(|n| n.child(segment)) else {
            return Err(FsError::PathNotFound {
                segment: segment.to_string(),
                consumed: render_consumed(start, &consumed),
            });
        };
        consumed.push(segment);

        match fs.node(child) {
            Some(entry) if entry.is_directory() => node = child,
            Some(_) => {
                at_file = true;
                node = child;
            }
            None => {
                return Err(FsError::PathNotFound {
                    segment: segment.to_string(),
                    consumed: render_consumed(start, &consumed[..consumed.len() - 1]),
                });
            }
        }
    }

    Ok(node)
}

fn render_consumed(start: Start, consumed: &[&str]) -> String {
    let joined = consumed.join("/");
    match start {
        Start::Root => format!("{}{}", start.prefix(), joined),
        Start::Parent if joined.is_empty() => start.prefix().to_string(),
        Start::Parent => format!("{}/{}", start.prefix(), joined),
        Start::Current if joined.is_empty() => ".".to_string(),
        Start::Current => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// /a/b/c (dirs), /a/f (file), /top (file)
    fn sample() -> (RamFs, NodeId, NodeId, NodeId) {
        let mut fs = RamFs::new();
        let a = fs.make_dir("a").unwrap();
        fs.make_file("top").unwrap();
        fs.change_dir("a").unwrap();
        let b = fs.make_dir("b").unwrap();
        fs.make_file("f").unwrap();
        fs.change_dir("b").unwrap();
        let c = fs.make_dir("c").unwrap();
        fs.change_dir("/").unwrap();
        (fs, a, b, c)
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/a/b"), vec!["", "a", "b"]);
        assert_eq!(split_path("a//b/"), vec!["a", "", "b", ""]);
        assert_eq!(split_path("."), vec!["."]);
    }

    #[test]
    fn test_resolve_absolute() {
        let (fs, a, b, c) = sample();
        assert_eq!(resolve(&fs, c, "/"), Ok(fs.root()));
        assert_eq!(resolve(&fs, c, "/a"), Ok(a));
        assert_eq!(resolve(&fs, c, "/a/b"), Ok(b));
        assert_eq!(resolve(&fs, a, "//a//b/c/"), Ok(c));
    }

    #[test]
    fn test_resolve_relative() {
        let (fs, a, b, c) = sample();
        assert_eq!(resolve(&fs, fs.root(), "a/b/c"), Ok(c));
        assert_eq!(resolve(&fs, a, "b"), Ok(b));
        assert_eq!(resolve(&fs, b, "c/"), Ok(c));
    }

    #[test]
    fn test_resolve_dot_forms() {
        let (fs, a, b, c) = sample();
        assert_eq!(resolve(&fs, b, "."), Ok(b));
        assert_eq!(resolve(&fs, b, "./c"), Ok(b));
        assert_eq!(resolve(&fs, b, ".."), Ok(a));
        assert_eq!(resolve(&fs, c, "../.."), Err(FsError::PathNotFound {
            segment: "..".to_string(),
            consumed: "..".to_string(),
        }));
        assert_eq!(resolve(&fs, a, "../a/b"), Ok(b));
        // root has no parent, so `..` stays put
        assert_eq!(resolve(&fs, fs.root(), ".."), Ok(fs.root()));
        assert_eq!(resolve(&fs, fs.root(), "../a"), Ok(a));
    }

    #[test]
    fn test_resolve_terminal_file() {
        let (fs, a, _, _) = sample();
        let f = resolve(&fs, a, "f").unwrap();
        assert!(!fs.node(f).unwrap().is_directory());
        assert_eq!(resolve(&fs, fs.root(), "/a/f"), Ok(f));
        assert_eq!(resolve(&fs, fs.root(), "a/f/"), Ok(f));
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let (fs, a, _, _) = sample();
        for path in ["/a/f/b", "a/f/b", "f/missing", "../a/f/x"] {
            let current = if path.starts_with("f") || path.starts_with("..") { a } else { fs.root() };
            assert!(
                matches!(resolve(&fs, current, path), Err(FsError::NotADirectory { .. })),
                "{path}"
            );
        }
        assert_eq!(
            resolve(&fs, fs.root(), "/top/x"),
            Err(FsError::NotADirectory { path: "/top".to_string() })
        );
    }

    #[test]
    fn test_resolve_missing_segment() {
        let (fs, _, _, c) = sample();
        assert_eq!(
            resolve(&fs, c, "/a/nope/c"),
            Err(FsError::PathNotFound {
                segment: "nope".to_string(),
                consumed: "/a".to_string(),
            })
        );
        assert_eq!(
            resolve(&fs, fs.root(), "zzz"),
            Err(FsError::PathNotFound {
                segment: "zzz".to_string(),
                consumed: ".".to_string(),
            })
        );
        // case-sensitive, no globbing
        assert!(resolve(&fs, fs.root(), "A").is_err());
        assert!(resolve(&fs, fs.root(), "*").is_err());
    }

    #[test]
    fn test_resolve_empty() {
        let (fs, _, _, _) = sample();
        assert!(matches!(
            resolve(&fs, fs.root(), ""),
            Err(FsError::EmptyInput { .. })
        ));
    }
}
