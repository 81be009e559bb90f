//! Build configuration.
//!
//! Every path and program name the build uses lives here. Values come from,
//! in increasing precedence: built-in defaults, a `.env` file in the project
//! directory, the process environment, and command-line flags.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "main.tex";
pub const DEFAULT_WORK_DIR: &str = "tmp";
pub const DEFAULT_ARTIFACT: &str = "report.pdf";
pub const DEFAULT_COMPILER: &str = "pdflatex";
pub const DEFAULT_COMPILER_ARGS: &[&str] = &["-interaction=nonstopmode"];

/// Job name TeX falls back to when the input has no usable stem.
const FALLBACK_JOBNAME: &str = "texput";

/// Value of `TEXBUILD_ARTIFACT` that names the artifact after the input.
const ARTIFACT_FROM_SOURCE: &str = "source";

/// Name of the final PDF placed in the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactName {
    /// A fixed file name, independent of the input document.
    Fixed(String),
    /// `<input stem>.pdf`.
    SourceStem,
}

impl ArtifactName {
    /// Parse a configured value. `source` selects [`ArtifactName::SourceStem`].
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" => Self::default(),
            ARTIFACT_FROM_SOURCE => Self::SourceStem,
            name => Self::Fixed(name.to_string()),
        }
    }
}

impl Default for ArtifactName {
    fn default() -> Self {
        Self::Fixed(DEFAULT_ARTIFACT.to_string())
    }
}

/// Program used to open the finished PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub program: String,
    /// Arguments placed before the file path.
    pub args: Vec<String>,
}

impl Viewer {
    /// Split a configured command line (`"zathura --fork"`) into program and args.
    pub fn parse(value: &str) -> Option<Self> {
        let mut words = value.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// The OS handler for opening files.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "windows") {
            Self {
                program: "cmd".to_string(),
                args: vec!["/C".into(), "start".into(), String::new()],
            }
        } else if cfg!(target_os = "macos") {
            Self {
                program: "open".to_string(),
                args: Vec::new(),
            }
        } else {
            Self {
                program: "xdg-open".to_string(),
                args: Vec::new(),
            }
        }
    }
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub work_dir: Option<PathBuf>,
    pub artifact: Option<String>,
    pub compiler: Option<String>,
    pub viewer: Option<String>,
    pub no_open: bool,
}

/// Resolved build configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the build runs in; relative paths below resolve against it.
    pub project_dir: PathBuf,
    /// LaTeX source document.
    pub input: PathBuf,
    /// Directory receiving the compiler's output.
    pub work_dir: PathBuf,
    pub artifact: ArtifactName,
    pub compiler: String,
    pub compiler_args: Vec<String>,
    pub viewer: Viewer,
    pub open_viewer: bool,
}

impl Config {
    /// Defaults only, rooted at `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self::from_vars(project_dir, &HashMap::new())
    }

    /// Load from `<project_dir>/.env` and the process environment, then apply overrides.
    pub fn load(project_dir: &Path, overrides: &Overrides) -> Result<Self> {
        let mut vars = HashMap::new();

        let env_path = project_dir.join(".env");
        if env_path.exists() {
            let iter = dotenvy::from_path_iter(&env_path)
                .with_context(|| format!("Failed to read {}", env_path.display()))?;
            for item in iter {
                let (key, value) =
                    item.with_context(|| format!("Malformed line in {}", env_path.display()))?;
                vars.insert(key, value);
            }
        }

        // Process environment wins over .env
        vars.extend(std::env::vars().filter(|(k, _)| k.starts_with("TEXBUILD_")));

        let mut config = Self::from_vars(project_dir, &vars);
        config.apply(overrides);
        Ok(config)
    }

    /// Build from a variable map. Unknown keys are ignored.
    pub fn from_vars(project_dir: impl Into<PathBuf>, vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let compiler_args = match vars.get("TEXBUILD_COMPILER_ARGS") {
            Some(args) => args.split_whitespace().map(str::to_string).collect(),
            None => DEFAULT_COMPILER_ARGS.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            project_dir: project_dir.into(),
            input: PathBuf::from(get("TEXBUILD_INPUT").unwrap_or(DEFAULT_INPUT)),
            work_dir: PathBuf::from(get("TEXBUILD_WORK_DIR").unwrap_or(DEFAULT_WORK_DIR)),
            artifact: get("TEXBUILD_ARTIFACT")
                .map(ArtifactName::parse)
                .unwrap_or_default(),
            compiler: get("TEXBUILD_COMPILER")
                .unwrap_or(DEFAULT_COMPILER)
                .to_string(),
            compiler_args,
            viewer: get("TEXBUILD_VIEWER")
                .and_then(Viewer::parse)
                .unwrap_or_else(Viewer::platform_default),
            open_viewer: get("TEXBUILD_NO_OPEN").is_none(),
        }
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(input) = &overrides.input {
            self.input = input.clone();
        }
        if let Some(work_dir) = &overrides.work_dir {
            self.work_dir = work_dir.clone();
        }
        if let Some(artifact) = &overrides.artifact {
            self.artifact = ArtifactName::parse(artifact);
        }
        if let Some(compiler) = &overrides.compiler {
            self.compiler = compiler.clone();
        }
        if let Some(viewer) = overrides.viewer.as_deref().and_then(Viewer::parse) {
            self.viewer = viewer;
        }
        if overrides.no_open {
            self.open_viewer = false;
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.resolve(&self.input)
    }

    pub fn work_dir_path(&self) -> PathBuf {
        self.resolve(&self.work_dir)
    }

    /// TeX job name: the input file name without its extension.
    pub fn jobname(&self) -> String {
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_JOBNAME.to_string())
    }

    /// Where the compiler leaves the PDF.
    pub fn produced_pdf(&self) -> PathBuf {
        self.work_dir_path().join(format!("{}.pdf", self.jobname()))
    }

    /// Final location of the PDF in the project directory.
    pub fn artifact_path(&self) -> PathBuf {
        match &self.artifact {
            ArtifactName::Fixed(name) => self.resolve(Path::new(name)),
            ArtifactName::SourceStem => self.project_dir.join(format!("{}.pdf", self.jobname())),
        }
    }

    pub fn print(&self) {
        println!("Configuration:");
        println!("  TEXBUILD_PROJECT_DIR: {}", self.project_dir.display());
        println!("  TEXBUILD_INPUT: {}", self.input.display());
        println!("  TEXBUILD_WORK_DIR: {}", self.work_dir.display());
        match &self.artifact {
            ArtifactName::Fixed(name) => println!("  TEXBUILD_ARTIFACT: {}", name),
            ArtifactName::SourceStem => {
                println!("  TEXBUILD_ARTIFACT: {} (input stem)", ARTIFACT_FROM_SOURCE)
            }
        }
        println!("  TEXBUILD_COMPILER: {}", self.compiler);
        println!("  TEXBUILD_COMPILER_ARGS: {}", self.compiler_args.join(" "));
        println!(
            "  TEXBUILD_VIEWER: {} {}",
            self.viewer.program,
            self.viewer.args.join(" ")
        );
        println!("  Open viewer: {}", if self.open_viewer { "yes" } else { "no" });
        println!("  Artifact path: {}", self.artifact_path().display());
    }
}
