use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use minify_html::{Cfg, minify};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    assets::{MissingAsset, copy_assets, missing_assets},
    config::{ASSET_DIRS, OUTPUT_DIR},
    links::{LinkReport, audit},
    pages::Page,
};

/// Knobs for a single build.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Output directory; relative paths are resolved against the site root.
    pub output_dir: PathBuf,
    /// Minify emitted HTML and copied CSS.
    pub minify: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            minify: false,
        }
    }
}

/// A page as written to disk.
#[derive(Clone, Debug)]
pub struct EmittedPage {
    pub page: Page,
    pub path: PathBuf,
    pub html: String,
}

/// What a build produced and what it found wrong.
#[derive(Clone, Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<EmittedPage>,
    pub assets: Vec<PathBuf>,
    pub missing_assets: Vec<MissingAsset>,
    pub links: LinkReport,
}

pub fn build_at(root: &Path, options: &BuildOptions) -> color_eyre::Result<BuildReport> {
    let ctx = BuildCtx::load_at(root, options)?;
    fs::create_dir_all(&ctx.output_dir)
        .with_note(|| format!("While creating {}", ctx.output_dir.display()))?;

    Pipeline::new(ctx).render()?.audit().emit()
}

struct BuildCtx {
    root: PathBuf,
    output_dir: PathBuf,
    pages: Vec<Page>,
    minify: bool,
    min_cfg: Cfg,
}

impl BuildCtx {
    fn load_at(root: &Path, options: &BuildOptions) -> color_eyre::Result<Self> {
        let output_dir = checked_output_dir(root, &options.output_dir)?;

        let mut min_cfg = Cfg::new();
        min_cfg.keep_input_type_text_attr = true;

        Ok(Self {
            root: root.to_path_buf(),
            output_dir,
            pages: Page::ALL.to_vec(),
            minify: options.minify,
            min_cfg,
        })
    }
}

/// Resolve `output_dir` against `root`, refusing targets that would make
/// asset copies overwrite their own sources.
fn checked_output_dir(root: &Path, output_dir: &Path) -> color_eyre::Result<PathBuf> {
    let canonical_root = root
        .canonicalize()
        .with_note(|| format!("While resolving site root {}", root.display()))?;
    let resolved = normalize(&canonical_root.join(output_dir));
    let resolved = resolved.canonicalize().unwrap_or(resolved);

    if resolved == canonical_root {
        return Err(eyre!(
            "Output directory {} is the site root; assets would be copied onto themselves",
            output_dir.display()
        ));
    }
    for dir in ASSET_DIRS {
        if resolved.starts_with(canonical_root.join(dir)) {
            return Err(eyre!(
                "Output directory {} lies inside the {dir} asset directory",
                output_dir.display()
            ));
        }
    }

    Ok(root.join(output_dir))
}

/// Lexically fold `.` and `..`; the output directory may not exist yet.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

type RenderedPage = (Page, String);

fn render_pages(ctx: &BuildCtx) -> color_eyre::Result<Vec<RenderedPage>> {
    ctx.pages
        .par_iter()
        .map(|&page| -> color_eyre::Result<RenderedPage> {
            let html = page.render();
            if !ctx.minify {
                return Ok((page, html));
            }
            let minified = String::from_utf8(minify(html.as_bytes(), &ctx.min_cfg))
                .map_err(|e| eyre!("Minifier produced invalid UTF-8 for {page}: {e}"))?;
            Ok((page, minified))
        })
        .collect()
}

fn emit_pages(
    ctx: &BuildCtx,
    rendered: Vec<RenderedPage>,
    links: LinkReport,
) -> color_eyre::Result<BuildReport> {
    let mut pages = Vec::with_capacity(rendered.len());
    for (page, html) in rendered {
        let path = ctx.output_dir.join(page.file_name());
        fs::write(&path, &html).with_note(|| format!("While writing {}", path.display()))?;
        info!(page = %page, path = %path.display(), "wrote page");
        pages.push(EmittedPage { page, path, html });
    }

    let assets = copy_assets(&ctx.root, &ctx.output_dir, ctx.minify)
        .with_note(|| "While copying assets")?;
    info!(count = assets.len(), "copied assets");

    let missing = missing_assets(&ctx.output_dir, &ctx.pages);

    Ok(BuildReport {
        output_dir: ctx.output_dir.clone(),
        pages,
        assets,
        missing_assets: missing,
        links,
    })
}

trait PipelineStage {}
/// Pipeline typestate driver
struct Pipeline<S: PipelineStage> {
    ctx: BuildCtx,
    state: S,
}

// initial state
impl Pipeline<()> {
    fn new(ctx: BuildCtx) -> Self {
        Self { ctx, state: () }
    }

    fn render(self) -> color_eyre::Result<Pipeline<Rendered>> {
        let pages = render_pages(&self.ctx)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Rendered(pages),
        })
    }
}

struct Rendered(Vec<RenderedPage>);
impl PipelineStage for Rendered {}
struct Audited {
    pages: Vec<RenderedPage>,
    links: LinkReport,
}
impl PipelineStage for Audited {}
impl PipelineStage for () {}

impl Pipeline<Rendered> {
    fn audit(self) -> Pipeline<Audited> {
        let links = audit(&self.ctx.pages);
        for entry in links.dangling() {
            warn!(link = %entry, "link target is not a delivered page");
        }
        Pipeline {
            ctx: self.ctx,
            state: Audited {
                pages: self.state.0,
                links,
            },
        }
    }
}

impl Pipeline<Audited> {
    fn emit(self) -> color_eyre::Result<BuildReport> {
        emit_pages(&self.ctx, self.state.pages, self.state.links)
    }
}

#[cfg(test)]
mod tests;
