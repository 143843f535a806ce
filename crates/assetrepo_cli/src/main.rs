use anyhow::Context;
use assetrepo_core::prelude::*;
use assetrepo_fs::FileSystemSource;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assetrepo")]
#[command(about = "Query a stack of asset directories as one namespace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Asset directories, highest priority first
    #[arg(
        short,
        long = "source",
        env = "ASSETREPO_SOURCES",
        value_delimiter = ',',
        required = true
    )]
    sources: Vec<PathBuf>,

    /// Follow symbolic links while listing
    #[arg(long)]
    follow_links: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every asset name, sorted
    Names,
    /// Print an asset's content
    Get {
        name: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show an asset's metadata as JSON
    Info { name: String },
    /// List the entries one level below a prefix (e.g. "textures/")
    Dir {
        #[arg(default_value = "")]
        prefix: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, &mut std::io::stdout().lock())
}

/// Stacks the `--source` directories, earliest first.
fn open_repo(cli: &Cli) -> anyhow::Result<Layered> {
    let mut repo = Layered::new();
    for dir in &cli.sources {
        anyhow::ensure!(dir.is_dir(), "Not a directory: {}", dir.display());
        debug!("Adding source {}", dir.display());
        repo.add_source(FileSystemSource::new(dir).follow_links(cli.follow_links));
    }
    Ok(repo)
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let repo = open_repo(&cli)?;

    match cli.command {
        Commands::Names => {
            for name in repo.names() {
                writeln!(out, "{name}")?;
            }
        }
        Commands::Get { name, output } => {
            let data = repo.get(&name)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &data)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Saved {name} to {} ({} bytes)", path.display(), data.len());
                }
                None => out.write_all(&data)?,
            }
        }
        Commands::Info { name } => {
            let info = repo.info(&name)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        }
        Commands::Dir { prefix } => {
            for entry in repo.dir(&prefix)? {
                writeln!(out, "{entry}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn tree(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    fn exec(sources: &[&Path], args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["assetrepo".to_string()];
        for source in sources {
            argv.push("--source".to_string());
            argv.push(source.display().to_string());
        }
        argv.extend(args.iter().map(|a| a.to_string()));

        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn names_merges_sources_sorted() {
        let mods = tree(&[("textures/stone.png", "mossy")]);
        let base = tree(&[("textures/stone.png", "plain"), ("config.toml", "x")]);

        let out = exec(&[mods.path(), base.path()], &["names"]).unwrap();
        assert_eq!(out, "config.toml\ntextures/stone.png\n");
    }

    #[test]
    fn get_prefers_first_source() {
        let mods = tree(&[("textures/stone.png", "mossy")]);
        let base = tree(&[("textures/stone.png", "plain")]);

        let out = exec(&[mods.path(), base.path()], &["get", "textures/stone.png"]).unwrap();
        assert_eq!(out, "mossy");

        let out = exec(&[base.path(), mods.path()], &["get", "textures/stone.png"]).unwrap();
        assert_eq!(out, "plain");
    }

    #[test]
    fn dir_lists_one_level() {
        let base = tree(&[("ui/theme.css", ""), ("ui/icons/close.svg", "")]);

        let out = exec(&[base.path()], &["dir", "ui/"]).unwrap();
        assert_eq!(out, "icons\ntheme.css\n");
    }

    #[test]
    fn info_prints_json() {
        let base = tree(&[("config.toml", "answer = 42")]);

        let out = exec(&[base.path()], &["info", "config.toml"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["name"], "config.toml");
        assert_eq!(json["size"], 11);
    }

    #[test]
    fn missing_asset_is_an_error() {
        let base = tree(&[("config.toml", "")]);

        let err = exec(&[base.path()], &["get", "nope"]).unwrap_err();
        assert_eq!(err.to_string(), "Asset nope not found");
    }

    #[test]
    fn rejects_missing_source_directory() {
        let base = tree(&[]);
        let missing = base.path().join("absent");

        let err = exec(&[missing.as_path()], &["names"]).unwrap_err();
        assert!(err.to_string().starts_with("Not a directory"));
    }
}
