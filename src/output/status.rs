use crate::core::{StatusDisplay, StatusLog};

/// Prints each new status line as it arrives
pub(crate) struct LineDisplay;

impl StatusDisplay for LineDisplay {
    fn refresh(&mut self, log: &StatusLog) {
        if let Some(newest) = log.render().first() {
            println!("{newest}");
        }
    }
}

/// Redraws the whole status panel in place, newest line first
pub(crate) struct PanelDisplay {
    drawn: usize,
    in_place: bool,
}

impl PanelDisplay {
    /// `in_place` needs an ANSI terminal; without it the panel is printed anew
    pub(crate) fn new(in_place: bool) -> Self {
        Self { drawn: 0, in_place }
    }
}

impl StatusDisplay for PanelDisplay {
    fn refresh(&mut self, log: &StatusLog) {
        if self.in_place && self.drawn > 0 {
            // cursor up, clear to end of screen
            print!("\x1b[{}A\x1b[J", self.drawn);
        }
        println!("{}", panel_text(log));
        self.drawn = log.len().max(1);
    }
}

pub(crate) fn panel_text(log: &StatusLog) -> String {
    if log.is_empty() {
        return "(no status yet)".to_string();
    }
    log.to_text()
}
