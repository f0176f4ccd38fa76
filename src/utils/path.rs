//! Path utilities: expand ~ in user-supplied paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/x.json"), PathBuf::from("/tmp/x.json"));
        assert_eq!(expand_tilde("rel/x.json"), PathBuf::from("rel/x.json"));
    }
}
