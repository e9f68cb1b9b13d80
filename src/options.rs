use std::path::PathBuf;

/// Name of the report written when no output file is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "project_documentation.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone)]
pub struct ProjdocOptions {
    pub root: PathBuf,
    /// The report file. It is skipped during traversal so reruns are stable.
    pub output_file: PathBuf,
    pub binary_detection: BinaryDetection,
}
impl Default for ProjdocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            binary_detection: BinaryDetection::None,
        }
    }
}
#[derive(Debug, Default)]
pub struct ProjdocBuilder {
    options: ProjdocOptions,
}
impl ProjdocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ProjdocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_file = path.into();
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> ProjdocOptions {
        self.options
    }
}
