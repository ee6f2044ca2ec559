use super::evolution_engine::ProgressCallback;
use super::organism::Organism;
use super::population::Population;
use crate::error::HellogenError;
use std::io::{self, Write};

/// Writes the human-readable run log to any text stream (stdout by default).
pub struct ConsoleProgressCallback<W: Write = io::Stdout> {
    out: W,
    verbose: bool,
    print_initial_population: bool,
}

impl ConsoleProgressCallback {
    pub fn stdout(verbose: bool, print_initial_population: bool) -> Self {
        Self::new(io::stdout(), verbose, print_initial_population)
    }
}

impl<W: Write> ConsoleProgressCallback<W> {
    pub fn new(out: W, verbose: bool, print_initial_population: bool) -> Self {
        Self {
            out,
            verbose,
            print_initial_population,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressCallback for ConsoleProgressCallback<W> {
    fn on_initial_population(&mut self, population: &Population) -> Result<(), HellogenError> {
        if !self.print_initial_population {
            return Ok(());
        }

        writeln!(self.out, "Initial Population:")?;
        write!(self.out, "{}", population)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        population: &Population,
        _replacements: usize,
    ) -> Result<(), HellogenError> {
        if !self.verbose {
            return Ok(());
        }

        writeln!(self.out, "Generation {}", generation)?;
        for org in population {
            writeln!(self.out, "Gen {}; {}", generation, org)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn on_winner(&mut self, generation: usize, winner: &Organism) -> Result<(), HellogenError> {
        writeln!(self.out, "\nWinner! Generation {}", generation)?;
        writeln!(self.out, "{}", winner)?;
        self.out.flush()?;
        Ok(())
    }

    fn on_generation_limit(
        &mut self,
        generation: usize,
        best: &Organism,
    ) -> Result<(), HellogenError> {
        writeln!(self.out, "\nNo winner after {} generations", generation)?;
        writeln!(self.out, "Best: {}", best)?;
        self.out.flush()?;
        Ok(())
    }
}
