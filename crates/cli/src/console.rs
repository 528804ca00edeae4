//! Line-oriented terminal console for price confirmations.

use std::io::{BufRead, Write};

use catalog_products::PriceConsole;

/// [`PriceConsole`] over any line reader and writer (stdin/stdout in the
/// binary, in-memory buffers in tests).
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> PriceConsole for LineConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{prompt} ").and_then(|_| self.output.flush()) {
            tracing::warn!(error = %e, "failed to write prompt");
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read answer");
                None
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            tracing::warn!(error = %e, "failed to write message");
        }
    }
}
