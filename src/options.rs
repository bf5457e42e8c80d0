use std::path::PathBuf;
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".js", ".html", ".css", ".py"];
pub const DEFAULT_EXCLUDED_DIRS: [&str; 1] = ["node_modules"];
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanBuilder {
    options: ScanOptions,
}
impl ScanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn excluded_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.excluded_dirs = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
