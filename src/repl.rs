use crate::cli::print_banner;
use crate::config::{ShellConfig, TinyDbConfig};
use crate::engine::Engine;
use anyhow::{Context, Result};
use colored::*;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use std::path::Path;

/// Accumulates input lines until a `;` outside double quotes ends a statement.
/// A line ending in `;` always ends the statement, even with a quote still
/// open; the engine then reports the unterminated literal.
#[derive(Debug, Clone, Default)]
pub struct StatementBuffer {
    pending: String,
}

impl StatementBuffer {
    pub fn new() -> Self {
        StatementBuffer {
            pending: String::new(),
        }
    }

    /// Append a line and return every statement it completed, trimmed and
    /// without the terminating `;`. Empty statements are dropped.
    pub fn push_line(&mut self, line: &str) -> Vec<String> {
        // a separator keeps keywords on adjacent lines apart
        if !self.pending.is_empty() {
            self.pending.push(' ');
        }
        self.pending.push_str(line);

        let mut statements = Vec::new();
        let mut in_quotes = false;
        let mut start = 0;
        for (i, c) in self.pending.char_indices() {
            match c {
                '"' => in_quotes = !in_quotes,
                ';' if !in_quotes => {
                    let statement = self.pending[start..i].trim();
                    if !statement.is_empty() {
                        statements.push(statement.to_string());
                    }
                    start = i + 1;
                }
                _ => {}
            }
        }

        if in_quotes {
            let rest = self.pending[start..].trim_end();
            if let Some(body) = rest.strip_suffix(';') {
                let statement = body.trim().to_string();
                if !statement.is_empty() {
                    statements.push(statement);
                }
                start = self.pending.len();
            }
        }

        self.pending.drain(..start);
        if self.pending.trim().is_empty() {
            self.pending.clear();
        }
        statements
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// `EXIT` ends the session; the engine never sees it.
pub fn is_exit(statement: &str) -> bool {
    statement.trim().eq_ignore_ascii_case("exit")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// An engine plus the line buffer feeding it, reporting one status line per statement.
pub struct Shell {
    pub engine: Engine,
    buffer: StatementBuffer,
    color: bool,
}

impl Shell {
    pub fn new(engine: Engine, color: bool) -> Self {
        Shell {
            engine,
            buffer: StatementBuffer::new(),
            color,
        }
    }

    pub fn from_config(config: &TinyDbConfig) -> Self {
        Self::new(Engine::with_config(config.engine.clone()), config.shell.color)
    }

    /// Feed one input line, executing every statement it completes.
    pub fn feed_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Control> {
        for statement in self.buffer.push_line(line) {
            if is_exit(&statement) {
                self.buffer.clear();
                return Ok(Control::Exit);
            }
            let status = self.execute(&statement);
            writeln!(out, "{}", status)?;
        }
        Ok(Control::Continue)
    }

    /// Execute a complete statement and render its status line.
    pub fn execute(&mut self, statement: &str) -> String {
        match self.engine.execute(statement) {
            Ok(outcome) if self.color => outcome.to_string().bright_green().to_string(),
            Ok(outcome) => outcome.to_string(),
            Err(e) if self.color => format!("{} {}", "Error:".bright_red(), e),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Feed every line of `input`, stopping at EXIT.
    pub fn feed_all<W: Write>(&mut self, input: &str, out: &mut W) -> Result<Control> {
        for line in input.lines() {
            if self.feed_line(line, out)? == Control::Exit {
                return Ok(Control::Exit);
            }
        }
        if self.buffer.is_pending() {
            warn!(
                "discarding unterminated statement at end of input: {}",
                self.buffer.pending()
            );
            self.buffer.clear();
        }
        Ok(Control::Continue)
    }

    pub fn is_pending(&self) -> bool {
        self.buffer.is_pending()
    }

    pub fn discard_pending(&mut self) {
        self.buffer.clear();
    }
}

/// Run a script file through a fresh shell.
pub fn run_file<W: Write>(path: &Path, config: &TinyDbConfig, out: &mut W) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!("running script {}", path.display());
    let mut shell = Shell::from_config(config);
    shell.feed_all(&content, out)?;
    Ok(())
}

fn prompt<'a>(shell: &Shell, config: &'a ShellConfig) -> &'a str {
    if shell.is_pending() {
        &config.continuation_prompt
    } else {
        &config.prompt
    }
}

pub fn start_repl(config: &TinyDbConfig, show_banner: bool) -> Result<()> {
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.shell.history_size)?
        .auto_add_history(false)
        .build();
    let mut rl = DefaultEditor::with_config(editor_config)?;

    let history_file = config.shell.history_path();
    if let Some(path) = &history_file {
        if path.exists() {
            if let Err(e) = rl.load_history(path) {
                eprintln!("Warning: Could not load history: {}", e);
            }
        }
    }

    if show_banner {
        print_banner();
    }

    let mut shell = Shell::from_config(config);
    let mut stdout = std::io::stdout();

    loop {
        match rl.readline(prompt(&shell, &config.shell)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if shell.feed_line(&line, &mut stdout)? == Control::Exit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                shell.discard_pending();
                println!("{}", "Pending input discarded (type 'exit;' to quit)".dimmed());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history_file {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Err(e) = rl.save_history(path) {
            eprintln!("Warning: Could not save history: {}", e);
        }
    }

    Ok(())
}
