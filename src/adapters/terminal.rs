use crate::domain::model::CardView;
use crate::domain::ports::DisplaySurface;
use std::io::Write;

const NO_RESULTS_LINE: &str = "No services match your search.";

/// Renders cards as plain lines on any writer. A terminal cannot truly be
/// cleared and repopulated, so `clear` emits a separator marking the start
/// of a fresh card list. Write failures are dropped: once stdout is gone
/// there is nowhere left to report them.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn clear(&mut self) {
        self.emit("");
        self.emit("-- services ------------------------------");
    }

    fn push_card(&mut self, card: &CardView) {
        self.emit(&format!("  [{}] {} ({})", card.role, card.title, card.image));
    }

    fn set_no_results(&mut self, visible: bool) {
        if visible {
            self.emit(NO_RESULTS_LINE);
        }
    }

    fn show_diagnostic(&mut self, message: &str) {
        self.emit(message);
    }

    fn announce(&mut self, message: &str) {
        self.emit(&format!(">> {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceRecord;

    fn output(surface: &TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_card_line_carries_role_title_and_image() {
        let mut surface = TerminalSurface::new(Vec::new());
        let record = ServiceRecord::new("Plumbing", "Home", "img/plumbing.jpg");
        surface.push_card(&CardView::from_record(&record));

        assert_eq!(output(&surface), "  [article] Plumbing (img/plumbing.jpg)\n");
    }

    #[test]
    fn test_no_results_line_only_when_visible() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_no_results(false);
        assert_eq!(output(&surface), "");

        surface.set_no_results(true);
        assert_eq!(output(&surface), format!("{}\n", NO_RESULTS_LINE));
    }

    #[test]
    fn test_announce_is_marked() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.announce("You selected the Plumbing service!");
        assert_eq!(output(&surface), ">> You selected the Plumbing service!\n");
    }
}
