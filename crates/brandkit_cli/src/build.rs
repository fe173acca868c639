//! Artifact build orchestration
//!
//! Layers token sources per (brand, mode) and writes every artifact:
//!
//! ```text
//! dist/
//! ├── css/<brand>.<mode>.css
//! ├── json/<brand>.<mode>.json
//! ├── json/core.json
//! ├── tailwind/<brand>.preset.js   (light tokens)
//! └── mui/<brand>.<mode>.ts, mui/<brand>.ts
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brandkit_tokens::{mui_index, Brand, Format, Mode, RenderOptions, TokenSet, TokenSource};
use thiserror::Error;

use crate::config::LoadedConfig;

/// Source layout problems detected before any file is written
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("token source directory not found: {0}")]
    MissingSources(PathBuf),

    #[error("no token sources for brand `{brand}` (expected {expected})")]
    MissingBrand { brand: Brand, expected: PathBuf },
}

/// Files written by a build
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

impl BuildReport {
    fn write(&mut self, path: PathBuf, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Token source layers for one brand and mode
pub struct SourceLayout<'a> {
    root: &'a Path,
}

impl<'a> SourceLayout<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    pub fn core(&self) -> TokenSource {
        TokenSource::new().with_dir(self.root.join("core"))
    }

    pub fn themed(&self, brand: Brand, mode: Mode) -> TokenSource {
        let brand_dir = self.root.join(brand.id());
        self.core()
            .with_file(brand_dir.join("colors.json"))
            .with_file(brand_dir.join(format!("semantic.{mode}.json")))
    }

    fn check(&self, brands: &[Brand]) -> Result<(), BuildError> {
        if !self.root.is_dir() {
            return Err(BuildError::MissingSources(self.root.to_path_buf()));
        }
        for &brand in brands {
            let expected = self.root.join(brand.id());
            if !expected.is_dir() {
                return Err(BuildError::MissingBrand { brand, expected });
            }
        }
        Ok(())
    }
}

fn load(source: &TokenSource, what: &str) -> Result<TokenSet> {
    source
        .load()
        .with_context(|| format!("Failed to load {what} tokens"))
}

/// Build every artifact. `only` restricts the brands; empty means all configured.
pub fn build(loaded: &LoadedConfig, only: &[Brand]) -> Result<BuildReport> {
    let root = loaded.sources_root();
    let out = loaded.output_dir();
    let layout = SourceLayout::new(&root);

    let brands: Vec<Brand> = loaded
        .config
        .build
        .brands
        .iter()
        .copied()
        .filter(|brand| only.is_empty() || only.contains(brand))
        .collect();

    layout.check(&brands)?;
    tracing::info!("Building {}...", loaded.config.project.name);

    let mut report = BuildReport::default();

    for &brand in &brands {
        for &mode in Mode::all() {
            tracing::info!("Building {brand} {mode}...");
            let set = load(&layout.themed(brand, mode), &format!("{brand} {mode}"))?;
            let options = RenderOptions::new(brand, mode);

            for (dir, format) in [
                ("css", Format::CssVariables),
                ("json", Format::JsonNested),
                ("mui", Format::MuiTheme),
            ] {
                let file = format!("{brand}.{mode}.{}", format.extension());
                report.write(out.join(dir).join(file), &format.render(&set, &options))?;
            }
        }

        tracing::info!("Building {brand} Tailwind preset...");
        let light = load(&layout.themed(brand, Mode::Light), &format!("{brand} light"))?;
        let preset = Format::TailwindPreset.render(&light, &RenderOptions::new(brand, Mode::Light));
        report.write(out.join("tailwind").join(format!("{brand}.preset.js")), &preset)?;

        report.write(out.join("mui").join(format!("{brand}.ts")), &mui_index(brand))?;
    }

    tracing::info!("Building core tokens...");
    let core = load(&layout.core(), "core")?;
    report.write(
        out.join("json").join("core.json"),
        &Format::JsonNested.render(&core, &RenderOptions::default()),
    )?;

    tracing::info!("Build complete! {} files written", report.written.len());
    Ok(report)
}

/// Render a single artifact without touching the output directory
pub fn render_one(
    loaded: &LoadedConfig,
    format: Format,
    brand: Brand,
    mode: Mode,
) -> Result<String> {
    let root = loaded.sources_root();
    let layout = SourceLayout::new(&root);
    layout.check(&[brand])?;
    // The preset is always built from light tokens.
    let mode = match format {
        Format::TailwindPreset => Mode::Light,
        _ => mode,
    };
    let set = load(&layout.themed(brand, mode), &format!("{brand} {mode}"))?;
    Ok(format.render(&set, &RenderOptions::new(brand, mode)))
}
