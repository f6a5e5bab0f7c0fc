// src/infra/paths.rs — Storage root resolution
//
// The storage root holds the daily event logs, the pattern index, and the
// optional indexer.toml. KOI_INDEXER_HOME overrides the default location,
// which is `.claude/memory` under the current working directory.

use std::path::{Path, PathBuf};

/// Default storage root, relative to the working directory.
pub const DEFAULT_ROOT: &str = ".claude/memory";

/// Config file name looked up inside the storage root.
pub const CONFIG_FILE: &str = "indexer.toml";

/// Returns the KOI_INDEXER_HOME override, if set.
fn indexer_home() -> Option<PathBuf> {
    std::env::var_os("KOI_INDEXER_HOME").map(PathBuf::from)
}

/// Root override, if any: explicit path > $KOI_INDEXER_HOME
pub fn root_override(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(indexer_home)
}

/// Storage root: explicit override > $KOI_INDEXER_HOME > ./.claude/memory
pub fn storage_root(explicit: Option<&Path>) -> PathBuf {
    root_override(explicit).unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

/// Config file path inside a storage root
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        let root = storage_root(Some(Path::new("/data/koi")));
        assert_eq!(root, PathBuf::from("/data/koi"));
    }

    #[test]
    fn test_config_file_inside_root() {
        let path = config_file_path(Path::new("/data/koi"));
        assert_eq!(path, PathBuf::from("/data/koi/indexer.toml"));
    }
}
