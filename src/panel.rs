use std::io::{self, Write};

/// Display surface the watcher writes into on every successful poll.
///
/// Three slots: the current count, the capacity threshold, and an alert
/// that is shown while the count has reached the threshold. Implementations
/// only ever receive writes; nothing is read back between polls.
pub trait Panel {
    fn set_occupancy(&mut self, value: u32);
    fn set_max_occupancy(&mut self, value: u32);
    fn set_alert_visible(&mut self, visible: bool);
}

/// Panel that rewrites a single status line on stdout.
pub struct ConsolePanel {
    occupancy: String,
    max_occupancy: String,
    alert_visible: bool,
}

impl ConsolePanel {
    pub fn new() -> Self {
        ConsolePanel {
            occupancy: String::from("-"),
            max_occupancy: String::from("-"),
            alert_visible: false,
        }
    }

    fn redraw(&self) {
        let banner = if self.alert_visible {
            "  ** AT CAPACITY **"
        } else {
            ""
        };
        // carriage return so each update overwrites the previous line; trailing
        // spaces clear leftovers when the banner goes away
        print!(
            "\roccupancy: {} / {}{}          ",
            self.occupancy, self.max_occupancy, banner
        );
        let _ = io::stdout().flush();
    }
}

impl Default for ConsolePanel {
    fn default() -> Self {
        ConsolePanel::new()
    }
}

impl Panel for ConsolePanel {
    fn set_occupancy(&mut self, value: u32) {
        self.occupancy = value.to_string();
        self.redraw();
    }

    fn set_max_occupancy(&mut self, value: u32) {
        self.max_occupancy = value.to_string();
        self.redraw();
    }

    fn set_alert_visible(&mut self, visible: bool) {
        self.alert_visible = visible;
        self.redraw();
    }
}
