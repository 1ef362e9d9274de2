use std::io::Write;
use std::path::Path;

use crate::error::{Result, StructureError};

use super::exclusions::Exclusions;
use super::listing::{DirLister, FsLister};
use super::options::{Branch, GlyphPolicy, RenderOptions, INDENT_UNIT};

/// Counts collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Lines written, root line included
    pub lines: usize,
    /// File lines written
    pub files: usize,
    /// Directory lines written below root
    pub directories: usize,
    /// Directories listed without their contents
    pub truncated: usize,
}

/// One child of a directory, ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Child {
    name: String,
    kind: ChildKind,
    branch: Branch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    File,
    Dir { contents_skipped: bool },
}

/// Renders a directory tree as indented ASCII-art text.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer<L = FsLister> {
    lister: L,
    exclusions: Exclusions,
    options: RenderOptions,
}

impl TreeRenderer<FsLister> {
    /// Renderer over the real filesystem
    pub fn new(exclusions: Exclusions) -> Self {
        Self::with_lister(FsLister, exclusions)
    }
}

impl<L: DirLister> TreeRenderer<L> {
    pub fn with_lister(lister: L, exclusions: Exclusions) -> Self {
        Self {
            lister,
            exclusions,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// Render the tree under `root` into `out`.
    ///
    /// The first failure aborts the render. Lines written before it stay in
    /// the sink.
    pub fn render<W: Write>(&self, root: &Path, out: &mut W) -> Result<RenderSummary> {
        let mut summary = RenderSummary::default();

        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "{}/", root_name).map_err(StructureError::Write)?;
        summary.lines += 1;

        self.render_dir(root, 1, out, &mut summary)?;

        tracing::debug!(
            root = %root.display(),
            lines = summary.lines,
            files = summary.files,
            directories = summary.directories,
            "Render finished"
        );

        Ok(summary)
    }

    /// Render into an in-memory string
    pub fn render_to_string(&self, root: &Path) -> Result<String> {
        let mut buf = Vec::new();
        self.render(root, &mut buf)?;
        // Names are converted lossily, so the buffer is always valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render into a list of lines, without terminators
    pub fn render_lines(&self, root: &Path) -> Result<Vec<String>> {
        Ok(self
            .render_to_string(root)?
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn render_dir<W: Write>(
        &self,
        dir: &Path,
        depth: usize,
        out: &mut W,
        summary: &mut RenderSummary,
    ) -> Result<()> {
        tracing::debug!(dir = %dir.display(), depth, "Expanding directory");

        let children = self.collect_children(dir)?;
        let indent = INDENT_UNIT.repeat(depth);

        for child in &children {
            let suffix = match child.kind {
                ChildKind::File => "",
                ChildKind::Dir { .. } => "/",
            };
            writeln!(out, "{}{}{}{}", indent, child.branch.as_str(), child.name, suffix)
                .map_err(StructureError::Write)?;
            summary.lines += 1;

            match child.kind {
                ChildKind::File => summary.files += 1,
                ChildKind::Dir { contents_skipped } => {
                    summary.directories += 1;
                    if contents_skipped {
                        tracing::trace!(dir = %dir.join(&child.name).display(), "Contents skipped");
                        summary.truncated += 1;
                    } else {
                        self.render_dir(&dir.join(&child.name), depth + 1, out, summary)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Enumerate, filter and sort the children of `dir`, then assign glyphs.
    fn collect_children(&self, dir: &Path) -> Result<Vec<Child>> {
        let listing = self.lister.list(dir)?;

        let mut files = listing.files;
        let mut dirs: Vec<String> = listing
            .dirs
            .into_iter()
            .filter(|name| {
                let skipped = self.exclusions.skips_entirely(name);
                if skipped {
                    tracing::trace!(dir = %dir.join(name).display(), "Skipped entirely");
                }
                !skipped
            })
            .collect();

        files.sort();
        dirs.sort();

        Ok(assign_branches(
            files,
            dirs,
            &self.exclusions,
            self.options.glyphs,
        ))
    }
}

/// Lay out files then subdirectories, each with its branch glyph.
///
/// `dirs` must already exclude skip-entirely names.
fn assign_branches(
    files: Vec<String>,
    dirs: Vec<String>,
    exclusions: &Exclusions,
    policy: GlyphPolicy,
) -> Vec<Child> {
    let file_count = files.len();
    let dir_count = dirs.len();
    let total = file_count + dir_count;

    // Legacy: the last file is terminal when no subdirectory will be expanded.
    let last_file_terminal = dirs.iter().all(|name| exclusions.excludes(name));

    let mut children = Vec::with_capacity(total);

    for (i, name) in files.into_iter().enumerate() {
        let branch = match policy {
            GlyphPolicy::Legacy => Branch::terminal_if(i + 1 == file_count && last_file_terminal),
            GlyphPolicy::Precise => Branch::terminal_if(i + 1 == total),
        };
        children.push(Child {
            name,
            kind: ChildKind::File,
            branch,
        });
    }

    for (i, name) in dirs.into_iter().enumerate() {
        let contents_skipped = exclusions.skips_contents(&name);
        let branch = match policy {
            GlyphPolicy::Legacy => Branch::terminal_if(contents_skipped || i + 1 == dir_count),
            GlyphPolicy::Precise => Branch::terminal_if(file_count + i + 1 == total),
        };
        children.push(Child {
            name,
            kind: ChildKind::Dir { contents_skipped },
            branch,
        });
    }

    children
}
