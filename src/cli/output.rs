/// Output formatting: JSON, table, plain, path/alias modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, FolderOutput, TargetOutput};

/// Width the alias column is padded to in plain output.
const PLAIN_ALIAS_WIDTH: usize = 12;

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Plain
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, fields: Option<&str>, no_header: bool) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
        }
    }

    /// Whether a field should be included in output.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n == name))
    }
}

// --- Folder listing ---

/// Render the listing as `alias path` lines.
#[must_use]
pub fn plain_lines(folders: &[FolderOutput]) -> Vec<String> {
    folders
        .iter()
        .map(|f| format!("{:<width$} {}", f.alias, f.path, width = PLAIN_ALIAS_WIDTH))
        .collect()
}

/// Write the folder listing to stdout.
pub fn write_folders(folders: &[FolderOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(folders),
        OutputFormat::Compact => print_compact_json(folders),
        OutputFormat::Ndjson => print_ndjson(folders),
        OutputFormat::Path => {
            for f in folders {
                println!("{}", f.path);
            }
        }
        OutputFormat::Alias => {
            for f in folders {
                println!("{}", f.alias);
            }
        }
        OutputFormat::Plain => {
            for line in plain_lines(folders) {
                println!("{line}");
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_folders_table(folders, ctx),
    }
}

fn write_folders_table(folders: &[FolderOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let mut headers: Vec<Cell> = Vec::new();
    if ctx.include_field("alias") {
        headers.push(Cell::new("ALIAS"));
    }
    if ctx.include_field("path") {
        headers.push(Cell::new("PATH"));
    }
    if ctx.include_field("host") {
        headers.push(Cell::new("HOST"));
    }

    if !ctx.no_header {
        table.set_header(headers);
    }

    for f in folders {
        let mut row: Vec<Cell> = Vec::new();
        if ctx.include_field("alias") {
            row.push(Cell::new(&f.alias));
        }
        if ctx.include_field("path") {
            row.push(Cell::new(&f.path));
        }
        if ctx.include_field("host") {
            row.push(Cell::new(&f.host));
        }
        table.add_row(row);
    }

    println!("{table}");
}

// --- Resolved target ---

/// Write a resolved target (used by `--dry-run`) to stdout.
pub fn write_target(target: &TargetOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(target),
        OutputFormat::Compact => print_compact_json(target),
        OutputFormat::Ndjson => print_ndjson(std::slice::from_ref(target)),
        OutputFormat::Path => println!("{}", target.path),
        OutputFormat::Alias => println!("{}", target.alias),
        OutputFormat::Table | OutputFormat::Plain | OutputFormat::Auto => {
            println!("{}", shell_words(&target.command));
        }
    }
}

/// Join a command line for display, single-quoting words that need it.
#[must_use]
pub fn shell_words(words: &[String]) -> String {
    words
        .iter()
        .map(|w| {
            let plain = !w.is_empty()
                && w
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "-_./+:=@,".contains(c));
            if plain {
                w.clone()
            } else {
                format!("'{}'", w.replace('\'', r"'\''"))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// --- Error output ---

/// Render an error for `fmt`: a JSON envelope in JSON modes (single line for
/// `compact`/`ndjson`), otherwise `Error: ...` text with suggestions.
#[must_use]
pub fn render_error(err: &ErrorOutput, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(err).unwrap_or_default(),
        OutputFormat::Compact | OutputFormat::Ndjson => {
            serde_json::to_string(err).unwrap_or_default()
        }
        _ => {
            let mut out = format!("Error: {}", err.error.message);
            if let Some(candidates) = &err.error.candidates {
                out.push_str("\n  Did you mean:");
                for c in candidates {
                    out.push_str("\n    ");
                    out.push_str(c);
                }
            }
            out
        }
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let rendered = render_error(err, resolve_format(format, json_flag));
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{rendered}");
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Only visible with `--debug` or `SCODE_LOG=debug`.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    /// Start a named timer.
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!("{}: {ms:.2}ms", self.label);
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
