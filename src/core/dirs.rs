use std::path::{Path, PathBuf};

/// Resolve the user's home directory.
///
/// `HOME` wins when it is set and non-empty, otherwise the platform lookup from
/// `dirs` is used. A home of `/` is treated as no home at all, since collapsing the
/// filesystem root into `~` would swallow every path.
pub fn get_home_directory() -> Option<PathBuf> {
    let from_env = std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    from_env
        .or_else(dirs::home_dir)
        .filter(|home| home.is_absolute() && home != Path::new("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_directory_is_never_root() {
        if let Some(home) = get_home_directory() {
            assert_ne!(home, PathBuf::from("/"));
            assert!(home.is_absolute());
        }
    }
}
