//! Interactive session: read a line, run it against the list, print the result.

use std::io::{BufRead, Write};

use clap::Parser;
use todo_core::{Clock, Priority, SortKey, TaskId, ToDoList};
use tracing::{debug, info};

use crate::cli::{SessionCommand, SessionLine};
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the list for the lifetime of the process.
pub struct Session<C: Clock> {
    todo: ToDoList<C>,
    renderer: Renderer,
}

impl<C: Clock> Session<C> {
    pub fn new(todo: ToDoList<C>, renderer: Renderer) -> Self {
        Self { todo, renderer }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        info!("session started");
        self.renderer.prompt(&mut out)?;
        for line in input.lines() {
            let line = line?;
            if self.execute(&line, &mut out)? == Flow::Quit {
                break;
            }
            self.renderer.prompt(&mut out)?;
        }
        info!(tasks = self.todo.len(), "session ended");
        Ok(())
    }

    /// Parse and run a single line. Blank lines are ignored.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match SessionLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                debug!(%line, "rejected input");
                self.renderer.rejected(out, &err.render().to_string())?;
                return Ok(Flow::Continue);
            }
        };

        self.dispatch(command, out)
    }

    fn dispatch(&mut self, command: SessionCommand, out: &mut impl Write) -> anyhow::Result<Flow> {
        let renderer = self.renderer;
        match command {
            SessionCommand::Add {
                priority,
                due,
                name,
            } => {
                let task = self
                    .todo
                    .add_task(name.join(" "), priority.map(Priority::new), due);
                renderer.added(out, task)?;
            }
            SessionCommand::List { sort } => {
                let sort = sort
                    .as_deref()
                    .map_or(self.todo.config().default_sort, SortKey::from_name);
                renderer.list(out, self.todo.list_tasks(sort))?;
            }
            SessionCommand::Done { id } => match self.todo.complete_task(TaskId::new(id)) {
                Ok(task) => renderer.completed(out, task)?,
                Err(err) => renderer.outcome(out, &err)?,
            },
            SessionCommand::Delete { id } => match self.todo.delete_task(TaskId::new(id)) {
                Ok(task) => renderer.deleted(out, &task)?,
                Err(err) => renderer.outcome(out, &err)?,
            },
            SessionCommand::Undo => match self.todo.undo_last_action() {
                Ok(undone) => renderer.undone(out, &undone)?,
                Err(err) => renderer.outcome(out, &err)?,
            },
            SessionCommand::Next => renderer.next(out, self.todo.next_priority_task())?,
            SessionCommand::Search { keyword } => {
                let keyword = keyword.join(" ");
                renderer.search(out, &keyword, self.todo.search_tasks(&keyword))?;
            }
            SessionCommand::Stats => renderer.counts(out, self.todo.counts())?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
