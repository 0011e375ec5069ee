//! Collate command - prompt for a folder, gather first lines, write output

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use firstline::{collector, writer, Config};

const PROMPT: &str = "Enter the path to the folder containing the TXT and PNG files: ";

/// What a run ended with
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Folder was missing or not a directory; nothing written
    InvalidFolder,
    /// Output written to this absolute path
    Written(PathBuf),
}

/// Execute the collate command against the real terminal
pub fn execute(folder: Option<String>, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(folder, output, config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Collecting → Writing → Done, with the status line written to `out`
pub fn run<R: BufRead, W: Write>(
    folder: Option<String>,
    output: Option<PathBuf>,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let folder_path = match folder {
        Some(path) => path.trim().to_string(),
        None => prompt_folder(input, out)?,
    };
    tracing::debug!(folder = %folder_path, "collecting");

    let lines = match collector::collect(&folder_path) {
        Ok(lines) => lines,
        Err(e) if e.is_invalid_folder() => {
            writeln!(out, "{e}")?;
            return Ok(Outcome::InvalidFolder);
        }
        Err(e) => return Err(e).context("Failed to collect first lines"),
    };
    tracing::debug!(count = lines.len(), "collected");

    let dest = match output {
        Some(path) => path,
        None => config.output_path()?,
    };
    let written = writer::write_to(&lines, &dest).context("Failed to write combined output")?;

    writeln!(out, "Output written to: {}", written.display())?;
    Ok(Outcome::Written(written))
}

fn prompt_folder<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("No folder path given on stdin");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_into(dir: &Path) -> Config {
        let mut config = Config::default();
        config.output.directory = Some(dir.to_path_buf());
        config
    }

    fn run_with_stdin(stdin: &str, config: &Config) -> (Result<Outcome>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(None, None, config, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompted_folder_is_collected() {
        let src = TempDir::new().unwrap();
        let desktop = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "one\n").unwrap();
        fs::write(src.path().join("b.TXT"), "two\nmore\n").unwrap();
        fs::write(src.path().join("c.md"), "ignored\n").unwrap();

        let stdin = format!("  {}  \n", src.path().display());
        let (result, console) = run_with_stdin(&stdin, &config_into(desktop.path()));

        let dest = desktop.path().join("combined_txt_output.txt");
        assert_eq!(result.unwrap(), Outcome::Written(dest.clone()));
        assert!(console.starts_with(PROMPT));
        assert!(console.ends_with(&format!("Output written to: {}\n", dest.display())));

        let content = fs::read_to_string(&dest).unwrap();
        let mut got: Vec<&str> = content.lines().collect();
        got.sort();
        assert_eq!(got, vec!["one", "two"]);
    }

    #[test]
    fn test_invalid_folder_writes_nothing() {
        let desktop = TempDir::new().unwrap();
        let missing = desktop.path().join("missing");

        let (result, console) =
            run_with_stdin(&format!("{}\n", missing.display()), &config_into(desktop.path()));

        assert_eq!(result.unwrap(), Outcome::InvalidFolder);
        assert!(console.ends_with("Invalid folder path.\n"));
        assert!(!desktop.path().join("combined_txt_output.txt").exists());
    }

    #[test]
    fn test_invalid_folder_leaves_existing_output_untouched() {
        let desktop = TempDir::new().unwrap();
        let dest = desktop.path().join("combined_txt_output.txt");
        fs::write(&dest, "previous\n").unwrap();

        let (result, _) = run_with_stdin("/definitely/not/here\n", &config_into(desktop.path()));

        assert_eq!(result.unwrap(), Outcome::InvalidFolder);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "previous\n");
    }

    #[test]
    fn test_folder_argument_skips_prompt() {
        let src = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        fs::write(src.path().join("only.txt"), "solo").unwrap();
        let dest = out_dir.path().join("custom.txt");

        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let outcome = run(
            Some(src.path().display().to_string()),
            Some(dest.clone()),
            &Config::default(),
            &mut input,
            &mut out,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Written(dest.clone()));
        let console = String::from_utf8(out).unwrap();
        assert!(!console.contains(PROMPT));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "solo\n");
    }

    #[test]
    fn test_eof_on_prompt_is_error() {
        let desktop = TempDir::new().unwrap();
        let (result, _) = run_with_stdin("", &config_into(desktop.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_output_dir_is_fatal() {
        let src = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "one\n").unwrap();

        let config = config_into(&root.path().join("Desktop"));
        let (result, console) = run_with_stdin(&format!("{}\n", src.path().display()), &config);

        assert!(result.is_err());
        assert!(!console.contains("Output written to"));
    }

    #[test]
    fn test_non_utf8_file_is_fatal() {
        let src = TempDir::new().unwrap();
        let desktop = TempDir::new().unwrap();
        fs::write(src.path().join("bad.txt"), b"\xff\xfe\xfd\n").unwrap();

        let (result, _) =
            run_with_stdin(&format!("{}\n", src.path().display()), &config_into(desktop.path()));

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<firstline::CollectError>().is_some());
        assert!(!desktop.path().join("combined_txt_output.txt").exists());
    }
}
