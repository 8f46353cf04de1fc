//! Minimal CLI: scan declarations → write mock modules
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use crate::emit::{EmitMode, EmitOptions};
use crate::error::GenError;
use crate::pipeline::{self, Settings};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate mock data modules from `*.interface.<ext>` declaration files
#[derive(Parser, Debug)]
#[command(name = "stub-forge", version)]
pub struct CommandLineInterface {
    /// directory scanned (recursively) for declaration files
    #[arg(long)]
    src: Option<PathBuf>,

    /// output directory; created if missing and emptied before generation
    /// (defaults to `tmp/` next to the executable)
    #[arg(long)]
    dst: Option<PathBuf>,

    /// extension of declaration and generated files
    #[arg(long, default_value = "ts")]
    ext: String,

    /// `linked` emits one mock per interface, `pair` emits two
    #[arg(long, value_enum, default_value_t = EmitMode::Linked)]
    mode: EmitMode,

    /// also remove subdirectories when clearing the destination
    #[arg(long, default_value_t = false)]
    clear_recursive: bool,

    /// parse only and print the interface registry as JSON
    #[arg(long, default_value_t = false)]
    dump_registry: bool,

    /// more logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// only warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Validate and resolve into pipeline settings. Fails before any side effects.
    pub fn settings(&self) -> Result<Settings, anyhow::Error> {
        let src = self.src.clone().ok_or(GenError::MissingSourcePath)?;
        pipeline::ensure_source(&src)?;
        let dst = match &self.dst {
            Some(dst) => dst.clone(),
            None => default_destination()?,
        };
        Ok(Settings {
            src,
            dst,
            emit: EmitOptions {
                mode: self.mode,
                ext: self.ext.trim_start_matches('.').to_string(),
                out_dir: None,
            },
            clear_recursive: self.clear_recursive,
        })
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(())
        }

        let settings = self.settings()?;

        if self.dump_registry {
            let registry = pipeline::build_registry(&settings.src, &settings.emit.ext)?;
            let json = serde_json::to_string_pretty(&registry).context("failed to serialize registry")?;
            println!("{json}");
            return Ok(())
        }

        let summary = pipeline::run(&settings)?;
        println!("{} files removed from destination.", summary.cleared.removed);
        if summary.cleared.failed > 0 {
            println!("{}", format!("{} stale entries could not be removed.", summary.cleared.failed).yellow());
        }
        println!("Found {} interfaces.", summary.interfaces.to_string().bold());
        // each failure was already logged where it happened
        let failed = summary.failed().count();
        if failed > 0 {
            println!("{}", format!("{failed} mock modules could not be written.").red().bold());
        }
        println!("{}", "done".green());
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn default_destination() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe.parent().context("executable has no parent directory")?;
    Ok(dir.join("tmp"))
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> CommandLineInterface {
        CommandLineInterface::try_parse_from(std::iter::once("stub-forge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn missing_source_is_fatal() {
        let err = cli(&[]).settings().unwrap_err();
        assert!(matches!(err.downcast_ref::<GenError>(), Some(GenError::MissingSourcePath)));
    }

    #[test]
    fn nonexistent_source_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = cli(&["--src", missing.to_str().unwrap()]).settings().unwrap_err();
        assert!(matches!(err.downcast_ref::<GenError>(), Some(GenError::SourceNotFound(_))));
    }

    #[test]
    fn defaults_resolve() {
        let tmp = TempDir::new().unwrap();
        let settings = cli(&["--src", tmp.path().to_str().unwrap()]).settings().unwrap();
        assert_eq!(settings.emit.ext, "ts");
        assert_eq!(settings.emit.mode, EmitMode::Linked);
        assert!(settings.dst.ends_with("tmp"));
        assert!(!settings.clear_recursive);
    }

    #[test]
    fn explicit_options() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().to_str().unwrap();
        let settings = cli(&["--src", src, "--dst", "/tmp/out", "--ext", ".mts", "--mode", "pair", "--clear-recursive"])
            .settings()
            .unwrap();
        assert_eq!(settings.dst, PathBuf::from("/tmp/out"));
        assert_eq!(settings.emit.ext, "mts");
        assert_eq!(settings.emit.mode, EmitMode::Pair);
        assert!(settings.clear_recursive);
    }

    #[test]
    fn equals_form_is_accepted() {
        let tmp = TempDir::new().unwrap();
        let arg = format!("--src={}", tmp.path().display());
        assert!(cli(&[&arg]).settings().is_ok());
    }
}
