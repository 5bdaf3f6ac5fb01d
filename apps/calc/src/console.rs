//! # Interactive Console
//!
//! Menu-driven calculator loop over any `BufRead` + `Write` pair.
//!
//! ## Menu
//!
//! - `1`-`4`: basic operations, `5`-`8`: advanced, `11`-`14`: scientific
//! - `20`: view history, `21`: clear history, `0`: exit
//!
//! Codes `0`, `20` and `21` are reserved for the menu. A registry that binds
//! an operation to one of them is refused when the session starts.
//!
//! A failed calculation or malformed input is reported and the loop keeps
//! going. End of input exits like `0`.

use calc_core::{CalculatorEngine, OperationCategory, Selector};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

/// Menu code that leaves the console.
pub const MENU_EXIT: i32 = 0;

/// Menu code that prints the history.
pub const MENU_VIEW_HISTORY: i32 = 20;

/// Menu code that clears the history.
pub const MENU_CLEAR_HISTORY: i32 = 21;

/// Menu codes that can never select an operation.
pub const RESERVED_MENU_CODES: [i32; 3] = [MENU_EXIT, MENU_VIEW_HISTORY, MENU_CLEAR_HISTORY];

const MENU_WIDTH: usize = 60;
const HISTORY_WIDTH: usize = 80;

/// One line of user input, classified.
enum Input<T> {
    Value(T),
    Invalid,
    Eof,
}

/// Interactive session bound to an engine.
pub struct Console<'a, R, W> {
    engine: &'a CalculatorEngine,
    input: R,
    output: W,
    precision: usize,
    recent_count: usize,
    show_welcome: bool,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Create a console with 4-digit precision and full history view.
    pub fn new(engine: &'a CalculatorEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            precision: 4,
            recent_count: 0,
            show_welcome: true,
        }
    }

    /// Decimal places for results and history.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Limit the history view to the last `count` records (0 = all).
    #[must_use]
    pub fn with_recent_count(mut self, count: usize) -> Self {
        self.recent_count = count;
        self
    }

    /// Skip the welcome banner.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_welcome = !quiet;
        self
    }

    /// Run until the user exits or input ends.
    ///
    /// Fails with `InvalidInput` before printing anything if the engine's
    /// registry uses a reserved menu code.
    pub fn run(&mut self) -> io::Result<()> {
        if let Some(code) = RESERVED_MENU_CODES
            .into_iter()
            .find(|&code| self.engine.is_valid_operation(Selector(code)))
        {
            tracing::error!(code, "operation selector collides with a menu code");
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("selector {code} is reserved for the console menu"),
            ));
        }

        tracing::info!("console session started");
        if self.show_welcome {
            self.print_welcome()?;
        }

        loop {
            self.print_menu()?;
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => break,
            };
            if self.process_choice(choice)?.is_break() {
                break;
            }
            writeln!(self.output)?;
        }

        self.print_farewell()?;
        tracing::info!("console session ended");
        Ok(())
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt<T: std::str::FromStr>(&mut self, text: &str) -> io::Result<Input<T>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            None => Input::Eof,
            Some(line) => line.parse().map_or(Input::Invalid, Input::Value),
        })
    }

    /// Re-prompt until a number or end of input.
    fn read_choice(&mut self) -> io::Result<Option<i32>> {
        loop {
            match self.prompt("\nEnter your choice: ")? {
                Input::Value(choice) => return Ok(Some(choice)),
                Input::Eof => return Ok(None),
                Input::Invalid => {
                    writeln!(self.output, "Invalid input! Please enter a number.")?;
                    tracing::warn!("non-numeric menu choice");
                }
            }
        }
    }

    /// Read one operand. `Continue(None)` means the input was not a number.
    fn read_operand(&mut self, text: &str) -> io::Result<ControlFlow<(), Option<f64>>> {
        Ok(match self.prompt(text)? {
            Input::Value(v) => ControlFlow::Continue(Some(v)),
            Input::Invalid => {
                writeln!(
                    self.output,
                    "Invalid number format! Please enter a valid number."
                )?;
                ControlFlow::Continue(None)
            }
            Input::Eof => ControlFlow::Break(()),
        })
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    fn process_choice(&mut self, choice: i32) -> io::Result<ControlFlow<()>> {
        match choice {
            MENU_EXIT => return Ok(ControlFlow::Break(())),
            MENU_VIEW_HISTORY => self.print_history()?,
            MENU_CLEAR_HISTORY => {
                self.engine.clear_history();
                writeln!(self.output, "History cleared successfully!")?;
            }
            code if self.engine.is_valid_operation(Selector(code)) => {
                return self.perform_calculation(Selector(code));
            }
            code => {
                writeln!(self.output, "Invalid operation code! Please try again.")?;
                tracing::warn!(code, "invalid operation code entered");
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn perform_calculation(&mut self, selector: Selector) -> io::Result<ControlFlow<()>> {
        let unary = self
            .engine
            .registry()
            .lookup(selector)
            .is_ok_and(|op| op.is_unary());

        let a = match self.read_operand("\nEnter first number: ")? {
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
            ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Continue(Some(a)) => a,
        };

        let b = if unary {
            0.0
        } else {
            match self.read_operand("Enter second number: ")? {
                ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
                ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
                ControlFlow::Continue(Some(b)) => b,
            }
        };

        match self.engine.calculate_with_details(selector, a, b) {
            Ok(detailed) => {
                let rule = "─".repeat(MENU_WIDTH);
                writeln!(self.output, "\n{rule}")?;
                writeln!(self.output, "RESULT")?;
                writeln!(self.output, "{rule}")?;
                writeln!(self.output, "{:.p$}", detailed, p = self.precision)?;
                writeln!(self.output, "{rule}")?;
            }
            Err(e) => {
                writeln!(self.output, "Calculation error: {e}")?;
                tracing::warn!(%selector, error = %e, "calculation rejected");
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    fn print_welcome(&mut self) -> io::Result<()> {
        let rule = "=".repeat(MENU_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(
            self.output,
            "{:^width$}",
            format!("CALC v{}", env!("CARGO_PKG_VERSION")),
            width = MENU_WIDTH
        )?;
        writeln!(self.output, "{rule}\n")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "═".repeat(MENU_WIDTH);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "{:^width$}", "MAIN MENU", width = MENU_WIDTH)?;
        writeln!(self.output, "{rule}")?;

        let registry = self.engine.registry();
        for category in [
            OperationCategory::Basic,
            OperationCategory::Advanced,
            OperationCategory::Scientific,
        ] {
            let entries: Vec<_> = registry
                .iter()
                .filter(|(_, op)| op.category() == category)
                .collect();
            if entries.is_empty() {
                continue;
            }
            writeln!(
                self.output,
                "  {} OPERATIONS",
                category.name().to_uppercase()
            )?;
            for (selector, op) in entries {
                writeln!(
                    self.output,
                    "   {:>2}. {}",
                    selector.value(),
                    op.description()
                )?;
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "  UTILITIES")?;
        writeln!(self.output, "   {MENU_VIEW_HISTORY:>2}. View History")?;
        writeln!(self.output, "   {MENU_CLEAR_HISTORY:>2}. Clear History")?;
        writeln!(self.output, "   {MENU_EXIT:>2}. Exit")?;
        writeln!(self.output, "{rule}")
    }

    fn print_history(&mut self) -> io::Result<()> {
        let history = self.engine.history();
        let records = if self.recent_count > 0 {
            history.recent(self.recent_count)
        } else {
            history.all()
        };

        if records.is_empty() {
            return writeln!(self.output, "\nHistory is empty. No calculations yet.");
        }

        let rule = "═".repeat(HISTORY_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(
            self.output,
            "{:^width$}",
            "CALCULATION HISTORY",
            width = HISTORY_WIDTH
        )?;
        writeln!(self.output, "{rule}")?;
        for record in &records {
            writeln!(self.output, "{}", record.to_formatted_string(self.precision))?;
        }
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "Total: {} calculation(s) ({} stored, capacity {})",
            records.len(),
            history.size(),
            history.capacity()
        )?;
        writeln!(self.output, "{rule}")
    }

    fn print_farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nGoodbye!")?;
        self.output.flush()
    }
}
