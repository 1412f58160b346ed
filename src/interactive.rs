use std::io::{BufRead, Write};

use tracing::debug;

use crate::{bfs::find_path, errors::GraphError, matcher::resolve_candidates, script::StringGraph};

enum Choice {
    Picked(String),
    NoMatch,
    Eof,
}

/// Prompt loop asking for two characters and printing how they connect.
pub struct InteractiveSession<'g, R, W> {
    graph: &'g StringGraph,
    input: R,
    output: W,
}

impl<'g, R: BufRead, W: Write> InteractiveSession<'g, R, W> {
    pub fn new(graph: &'g StringGraph, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<(), GraphError> {
        writeln!(self.output, "Welcome to the character connector")?;
        loop {
            writeln!(
                self.output,
                "Enter 2 characters to discover the connection between them!"
            )?;
            let first = match self.ask("Character 1: ")? {
                Choice::Eof => break,
                choice => choice,
            };
            let second = match self.ask("Character 2: ")? {
                Choice::Eof => break,
                choice => choice,
            };
            self.report(&first, &second)?;

            write!(self.output, "\nWould you like to go again? (Y/N) ")?;
            self.output.flush()?;
            match self.next_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Choice, GraphError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        match self.next_line()? {
            Some(typed) => self.choose(typed.trim()),
            None => Ok(Choice::Eof),
        }
    }

    fn choose(&mut self, typed: &str) -> Result<Choice, GraphError> {
        let candidates = resolve_candidates(self.graph, typed);
        debug!(typed, matches = candidates.len(), "resolved name");
        match candidates.len() {
            0 => {
                writeln!(
                    self.output,
                    "Sorry! it seems that {typed} is not a known character."
                )?;
                Ok(Choice::NoMatch)
            }
            1 => Ok(Choice::Picked(candidates[0].clone())),
            count => {
                writeln!(self.output, "Showing all matches for {typed}")?;
                for (idx, name) in candidates.iter().enumerate() {
                    writeln!(self.output, "{} {name}", idx + 1)?;
                }
                loop {
                    write!(self.output, "Enter the number: ")?;
                    self.output.flush()?;
                    let Some(line) = self.next_line()? else {
                        return Ok(Choice::Eof);
                    };
                    if let Ok(pick) = line.trim().parse::<usize>() {
                        if (1..=count).contains(&pick) {
                            return Ok(Choice::Picked(candidates[pick - 1].clone()));
                        }
                    }
                }
            }
        }
    }

    fn report(&mut self, first: &Choice, second: &Choice) -> Result<(), GraphError> {
        let (Choice::Picked(a), Choice::Picked(b)) = (first, second) else {
            writeln!(self.output, "unable to find path!")?;
            return Ok(());
        };
        match find_path(self.graph, a, b)? {
            None => writeln!(
                self.output,
                "Sorry! {a} and {b} don't seem to be connected."
            )?,
            Some(path) if path.is_empty() => writeln!(self.output, "{a} is connected to itself!")?,
            Some(path) => {
                writeln!(self.output, "{a} and {b} are connected.")?;
                for edge in path {
                    writeln!(
                        self.output,
                        "\t{} to {} by the book {}",
                        edge.from, edge.to, edge.label
                    )?;
                }
            }
        }
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<String>, GraphError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
