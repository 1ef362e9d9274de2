//! Generate command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::GenerateArgs;
use crate::config::{Config, OutputConfig};
use crate::error::{Result, StructureError};
use crate::tree::{parse_name_list, Exclusions, RenderOptions, RenderSummary, TreeRenderer};

/// File name stem used when the root has no final component
const FALLBACK_STEM: &str = "folder";

/// Run the generate command
pub fn run(args: GenerateArgs, config: &Config, quiet: bool) -> Result<()> {
    // All input checks happen before the output file is created.
    let root = resolve_root(&args.path)?;
    let output = if args.stdout {
        None
    } else {
        Some(resolve_output(args.output.as_deref(), &root, &config.output)?)
    };

    let exclusions = config.exclusions().merge(cli_exclusions(&args));
    let options = RenderOptions::new().with_glyphs(args.glyphs.unwrap_or(config.render.glyphs));
    let renderer = TreeRenderer::new(exclusions).with_options(options);

    tracing::info!(
        root = %root.display(),
        exclusions = ?renderer.exclusions(),
        "Rendering folder structure"
    );

    let summary = match &output {
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = renderer.render(&root, &mut out)?;
            out.flush().map_err(StructureError::Write)?;
            summary
        }
        Some(path) => render_to_file(&renderer, &root, path)?,
    };

    tracing::info!(
        lines = summary.lines,
        files = summary.files,
        directories = summary.directories,
        truncated = summary.truncated,
        "Render complete"
    );

    if let (Some(path), false) = (&output, quiet) {
        println!("Folder structure has been saved to:\n{}", path.display());
    }

    Ok(())
}

fn render_to_file(renderer: &TreeRenderer, root: &Path, path: &Path) -> Result<RenderSummary> {
    let file = File::create(path).map_err(|source| StructureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    let summary = renderer.render(root, &mut out)?;
    out.flush().map_err(|source| StructureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(summary)
}

/// Exclusions given on the command line, each value a comma-separated list
fn cli_exclusions(args: &GenerateArgs) -> Exclusions {
    Exclusions::new()
        .with_skip_entirely(args.skip.iter().flat_map(|s| parse_name_list(s)))
        .with_skip_contents(args.skip_contents.iter().flat_map(|s| parse_name_list(s)))
}

/// Validate the root folder and return its canonical path.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(StructureError::MissingRoot);
    }

    let root = path.canonicalize().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StructureError::PathNotFound(path.to_path_buf())
        } else {
            StructureError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !root.is_dir() {
        return Err(StructureError::NotADirectory(root));
    }

    Ok(root)
}

/// Pick the output file: the explicit path, or `<dir>/<root-name><suffix>`.
pub fn resolve_output(
    explicit: Option<&Path>,
    root: &Path,
    config: &OutputConfig,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(StructureError::MissingOutput);
        }
        return Ok(path.to_path_buf());
    }

    let stem = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    let file_name = format!("{}{}", stem, config.file_suffix);

    let dir = config
        .directory
        .clone()
        .or_else(|| dirs::desktop_dir().filter(|d| d.is_dir()))
        .or_else(|| std::env::current_dir().ok())
        .ok_or(StructureError::MissingOutput)?;

    Ok(dir.join(file_name))
}
