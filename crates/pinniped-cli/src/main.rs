use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pinniped_config::Config;
use pinniped_engine::{Direction, Document, codec, io};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pinniped", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/pinniped/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse markdown and print the document as JSON
    Parse {
        /// Markdown file, or `-` for stdin
        file: PathBuf,
    },
    /// Render a JSON document back to markdown
    Render {
        /// JSON file, or `-` for stdin
        json: PathBuf,
    },
    /// Rewrite markdown in canonical form
    Format {
        /// Markdown file, or `-` for stdin
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print one table cell
    Cell {
        file: PathBuf,
        #[command(flatten)]
        at: CellArgs,
    },
    /// Move a table cursor one step and print the new position
    Navigate {
        file: PathBuf,
        #[command(flatten)]
        at: CellArgs,
        #[arg(long, value_enum)]
        direction: NavDirection,
    },
}

#[derive(clap::Args, Debug)]
struct CellArgs {
    /// Index of the table block in the document
    #[arg(long)]
    block: usize,
    /// Logical row; the header separator row is not counted
    #[arg(long)]
    row: usize,
    #[arg(long)]
    col: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl From<NavDirection> for Direction {
    fn from(direction: NavDirection) -> Self {
        match direction {
            NavDirection::Up => Direction::Up,
            NavDirection::Down => Direction::Down,
            NavDirection::Left => Direction::Left,
            NavDirection::Right => Direction::Right,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let pretty = cli.pretty || config.pretty_json;
    let output = run(cli.command, &config, pretty)?;
    if let Some(output) = output {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{output}")?;
    }
    Ok(())
}

/// Executes one command, returning what should be printed.
fn run(command: Command, config: &Config, pretty: bool) -> Result<Option<String>> {
    match command {
        Command::Parse { file } => {
            let doc = load_markdown(&file, config)?;
            Ok(Some(encode(&doc, pretty)))
        }
        Command::Render { json } => {
            let text = read_input(&json, config)?;
            let doc = codec::decode_document(&text)
                .with_context(|| format!("decoding {}", json.display()))?;
            Ok(Some(doc.to_markdown()))
        }
        Command::Format { file, output } => {
            let doc = load_markdown(&file, config)?;
            match output {
                Some(path) => {
                    io::write_document(&path, &doc)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("wrote {} blocks to {}", doc.len(), path.display());
                    Ok(None)
                }
                None => Ok(Some(doc.to_markdown())),
            }
        }
        Command::Cell { file, at } => {
            let doc = load_markdown(&file, config)?;
            let cell = pinniped_engine::get_table_cell(&doc, at.block, at.row, at.col)?;
            Ok(Some(cell.to_string()))
        }
        Command::Navigate { file, at, direction } => {
            let doc = load_markdown(&file, config)?;
            let position =
                pinniped_engine::navigate_table(&doc, at.block, at.row, at.col, direction.into())?;
            Ok(Some(codec::encode_position(&position)))
        }
    }
}

fn encode(doc: &Document, pretty: bool) -> String {
    if pretty {
        codec::encode_document_pretty(doc)
    } else {
        codec::encode_document(doc)
    }
}

fn load_markdown(path: &Path, config: &Config) -> Result<Document> {
    if is_stdin(path) {
        let text = read_input(path, config)?;
        return Ok(pinniped_engine::parse(&text));
    }
    let resolved = config.resolve_document(path);
    io::read_document(&resolved).with_context(|| format!("reading {}", resolved.display()))
}

fn read_input(path: &Path, config: &Config) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    let resolved = config.resolve_document(path);
    std::fs::read_to_string(&resolved).with_context(|| format!("reading {}", resolved.display()))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "pinniped", "navigate", "doc.md", "--block", "2", "--row", "1", "--col", "0",
            "--direction", "left", "--pretty",
        ])
        .unwrap();
        assert!(cli.pretty);
        match cli.command {
            Command::Navigate { at, direction, .. } => {
                assert_eq!((at.block, at.row, at.col), (2, 1, 0));
                assert!(matches!(direction, NavDirection::Left));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_format_to_file() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "in.md", "#  Title\n\n*  a\n*  b\n");
        let output = dir.path().join("out").join("formatted.md");

        let printed = run(
            Command::Format {
                file: input,
                output: Some(output.clone()),
            },
            &Config::default(),
            false,
        )
        .unwrap();

        assert_eq!(printed, None);
        assert_eq!(
            std::fs::read_to_string(output).unwrap(),
            "# Title\n\n- a\n- b\n"
        );
    }

    #[test]
    fn test_cell_resolves_against_documents_path() {
        let dir = TempDir::new().unwrap();
        write(&dir, "table.md", "| A | B |\n|---|---|\n| 1 | 2 |\n");
        let config = Config {
            documents_path: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let printed = run(
            Command::Cell {
                file: PathBuf::from("table.md"),
                at: CellArgs {
                    block: 0,
                    row: 1,
                    col: 1,
                },
            },
            &config,
            false,
        )
        .unwrap();
        assert_eq!(printed.as_deref(), Some("2"));
    }

    #[test]
    fn test_render_json() {
        let dir = TempDir::new().unwrap();
        let json = write(&dir, "doc.json", r#"{"blocks":[{"Paragraph":[{"Text":"hi"}]}]}"#);
        let printed = run(Command::Render { json }, &Config::default(), false).unwrap();
        assert_eq!(printed.as_deref(), Some("hi"));
    }

    #[test]
    fn test_navigate_on_non_table_fails() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "doc.md", "just text");
        let result = run(
            Command::Navigate {
                file,
                at: CellArgs {
                    block: 0,
                    row: 0,
                    col: 0,
                },
                direction: NavDirection::Down,
            },
            &Config::default(),
            false,
        );
        assert!(result.unwrap_err().to_string().contains("not a table"));
    }
}
