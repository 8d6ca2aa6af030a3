use std::io::{self, Write};

/// In-place percentage display for a running render.
///
/// Rewrites the same status line for every report and only terminates it at
/// 100. Purely cosmetic: write errors on the status sink are swallowed so a
/// broken pipe can never abort a render.
pub struct PercentPrinter<W: Write> {
    out: W,
}

impl PercentPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PercentPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn report(&mut self, progress: u32) {
        let _ = write!(self.out, "\r{}%", progress);
        if progress == 100 {
            let _ = writeln!(self.out);
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::PercentPrinter;

    #[test]
    fn overwrites_in_place_and_closes_the_line_at_100() {
        let mut printer = PercentPrinter::new(Vec::new());
        printer.report(0);
        printer.report(42);
        printer.report(100);
        assert_eq!(printer.out, b"\r0%\r42%\r100%\n");
    }

    #[test]
    fn no_newline_before_completion() {
        let mut printer = PercentPrinter::new(Vec::new());
        printer.report(99);
        assert!(!printer.out.contains(&b'\n'));
    }
}
