//! Rendering of results and non-fatal outcomes.

use std::io::{self, Write};

use serde_json::json;
use todo_core::{ErrorKind, SearchMatch, Task, TaskCounts, TodoError, Undone};

use crate::cli::OutputFormat;

const RULE: &str = "----------------------------------------";
const PROMPT: &str = "todo> ";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Interactive prompt. JSON output stays one document per line, so it
    /// gets none.
    pub fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        write!(out, "{PROMPT}")?;
        out.flush()
    }

    pub fn added(&self, out: &mut impl Write, task: &Task) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty => {
                writeln!(out, "Added '{}' (id {})", task.name(), task.id())
            }
            OutputFormat::Json => json_line(out, &json!({ "added": task })),
        }
    }

    pub fn completed(&self, out: &mut impl Write, task: &Task) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty => writeln!(out, "Completed '{}'", task.name()),
            OutputFormat::Json => json_line(out, &json!({ "completed": task })),
        }
    }

    pub fn deleted(&self, out: &mut impl Write, task: &Task) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty => writeln!(out, "Deleted '{}'", task.name()),
            OutputFormat::Json => json_line(out, &json!({ "deleted": task })),
        }
    }

    pub fn undone(&self, out: &mut impl Write, undone: &Undone) -> io::Result<()> {
        let (what, task) = match undone {
            Undone::Added(task) => ("add", task),
            Undone::Reopened(task) => ("complete", task),
            Undone::Restored(task) => ("delete", task),
        };
        match self.format {
            OutputFormat::Pretty => match undone {
                Undone::Added(_) => writeln!(out, "Undid adding '{}'", task.name()),
                Undone::Reopened(_) => {
                    writeln!(out, "'{}' is marked as not completed again", task.name())
                }
                Undone::Restored(_) => writeln!(out, "'{}' restored", task.name()),
            },
            OutputFormat::Json => json_line(out, &json!({ "undone": what, "task": task })),
        }
    }

    pub fn next(&self, out: &mut impl Write, task: Option<&Task>) -> io::Result<()> {
        match (self.format, task) {
            (OutputFormat::Pretty, Some(task)) => writeln!(
                out,
                "Next up: {} (priority {}, due {})",
                task.name(),
                task.priority(),
                task.due_date()
            ),
            (OutputFormat::Pretty, None) => writeln!(out, "No pending tasks"),
            (OutputFormat::Json, task) => json_line(out, &json!({ "next": task })),
        }
    }

    pub fn list<'a>(
        &self,
        out: &mut impl Write,
        tasks: impl Iterator<Item = &'a Task>,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let tasks: Vec<&Task> = tasks.collect();
            return json_line(out, &json!({ "tasks": tasks }));
        }

        let mut tasks = tasks.peekable();
        if tasks.peek().is_none() {
            return writeln!(out, "No tasks");
        }

        writeln!(out, "TO-DO LIST")?;
        writeln!(out, "{RULE}")?;
        for task in tasks {
            let status = if task.is_completed() { '✓' } else { ' ' };
            writeln!(out, "{}. [{}] {}", task.id(), status, task.name())?;

            let priority = task.priority();
            if priority.is_standard() {
                write!(out, "   Priority: {}", priority.stars())?;
            } else {
                write!(out, "   Priority: {} ({})", priority.stars(), priority)?;
            }
            writeln!(out, " | Due: {}", task.due_date())?;
            writeln!(
                out,
                "   Created: {}",
                task.created_at().format("%Y-%m-%d %H:%M")
            )?;
            writeln!(out, "{RULE}")?;
        }
        Ok(())
    }

    pub fn search<'a>(
        &self,
        out: &mut impl Write,
        keyword: &str,
        hits: impl Iterator<Item = SearchMatch<'a>>,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let hits: Vec<SearchMatch<'a>> = hits.collect();
            return json_line(out, &json!({ "keyword": keyword, "matches": hits }));
        }

        writeln!(out, "Search results for '{keyword}':")?;
        let mut found = false;
        for hit in hits {
            let status = if hit.completed { "completed" } else { "pending" };
            writeln!(out, "{}. {} - {}", hit.id, hit.name, status)?;
            found = true;
        }
        if !found {
            writeln!(out, "No matching tasks")?;
        }
        Ok(())
    }

    pub fn counts(&self, out: &mut impl Write, counts: TaskCounts) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty => writeln!(
                out,
                "{} tasks: {} pending, {} completed",
                counts.total, counts.pending, counts.completed
            ),
            OutputFormat::Json => json_line(out, &json!({ "counts": counts })),
        }
    }

    /// A non-fatal outcome from the list (not found, already done, ...).
    pub fn outcome(&self, out: &mut impl Write, err: &TodoError) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty => writeln!(out, "{err}"),
            OutputFormat::Json => {
                let kind = match err.kind() {
                    ErrorKind::NotFound => "not_found",
                    ErrorKind::NoOp => "no_op",
                };
                json_line(out, &json!({ "error": err.to_string(), "kind": kind }))
            }
        }
    }

    /// Input that never reached the list: parse errors, `help` output.
    pub fn rejected(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty => write!(out, "{message}"),
            OutputFormat::Json => json_line(out, &json!({ "error": message.trim_end() })),
        }
    }
}

fn json_line(out: &mut impl Write, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
