use crate::models::log_entry::LogEntry;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "toggle" | "work" | "rest" => Colour::Green,
        "times" => Colour::Yellow,
        "rate" | "rule" => Colour::Cyan,
        "anchor" | "shift" => Colour::Blue,
        "export" => Colour::Purple,
        "start" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// In-memory log of the actions applied during one session.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a log line.
    pub fn ttlog(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(LogEntry::new(operation, target, message));
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn print(&self) {
        if self.entries.is_empty() {
            println!("📜 Session log is empty.");
            return;
        }

        let op_w = self
            .entries
            .iter()
            .map(|e| e.op_target().len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = self.entries.len().to_string().len();

        println!("📜 Session log:\n");

        for (idx, entry) in self.entries.iter().enumerate() {
            let color = color_for_operation(&entry.operation);

            let op_target = entry.op_target();
            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                idx + 1,
                entry.at.format("%FT%T%:z"),
                colored,
                padding,
                entry.message,
                id_w = id_w
            );
        }
    }
}
