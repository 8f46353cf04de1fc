//! discover → parse → emit → write
//!
//! Parsing fans out per file but the registry is assembled in discovery
//! order, so duplicate names resolve deterministically. Emission only starts
//! once the registry is complete.
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::emit::{self, EmitOptions, MockModule};
use crate::error::{GenError, Result};
use crate::fs_layer::{self, ClearReport, WriteOutcome};
use crate::parser;
use crate::registry::Registry;
use crate::synth::{FakerProvider, ValueProvider};

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub emit: EmitOptions,
    pub clear_recursive: bool,
}

#[derive(Debug)]
pub struct RunSummary {
    pub cleared: ClearReport,
    pub interfaces: usize,
    pub outcomes: Vec<WriteOutcome>,
}

impl RunSummary {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }
    pub fn failed(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }
}

pub fn ensure_source(src: &Path) -> Result<()> {
    if !src.is_dir() {
        return Err(GenError::SourceNotFound(src.to_path_buf()));
    }
    Ok(())
}

/// Parse every declaration below `src` into a registry.
pub fn build_registry(src: &Path, ext: &str) -> Result<Registry> {
    let files = fs_layer::discover_declarations(src, ext)?;
    tracing::info!(files = files.len(), "discovered declaration files");
    let parsed = files
        .par_iter()
        .map(|path| match fs_layer::read_declaration(path) {
            Ok(source) => parser::parse_declaration(path, &source),
            Err(error) => {
                tracing::warn!(%error, "skipping declaration");
                None
            }
        })
        .collect::<Vec<_>>();
    Ok(parsed.into_iter().flatten().collect())
}

/// One module per registered interface. Each task gets its own provider.
pub fn emit_all<F, P>(registry: &Registry, options: &EmitOptions, provider: F) -> Vec<MockModule>
where
    F: Fn() -> P + Sync,
    P: ValueProvider,
{
    let records = registry.records().collect::<Vec<_>>();
    records
        .par_iter()
        .map(|record| {
            let mut provider = provider();
            emit::emit(record, registry, options, &mut provider)
        })
        .collect()
}

pub fn run(settings: &Settings) -> Result<RunSummary> {
    run_with(settings, FakerProvider::from_entropy)
}

pub fn run_with<F, P>(settings: &Settings, provider: F) -> Result<RunSummary>
where
    F: Fn() -> P + Sync,
    P: ValueProvider,
{
    ensure_source(&settings.src)?;
    let cleared = fs_layer::prepare_destination(&settings.dst, settings.clear_recursive)?;
    tracing::info!(removed = cleared.removed, failed = cleared.failed, dst = %settings.dst.display(), "destination cleared");

    // both sides canonical so declaration imports resolve relative to the output dir
    let src = std::fs::canonicalize(&settings.src)
        .map_err(|_| GenError::SourceNotFound(settings.src.clone()))?;
    let dst = std::fs::canonicalize(&settings.dst)
        .map_err(|source| GenError::DestinationSetup { path: settings.dst.clone(), source })?;
    let options = EmitOptions { out_dir: Some(dst.clone()), ..settings.emit.clone() };

    let registry = build_registry(&src, &options.ext)?;
    let modules = emit_all(&registry, &options, provider);
    let outcomes = fs_layer::write_modules(&dst, &modules);

    let summary = RunSummary { cleared, interfaces: registry.len(), outcomes };
    tracing::info!(
        interfaces = summary.interfaces,
        written = summary.written(),
        failed = summary.failed().count(),
        "generation finished"
    );
    Ok(summary)
}
