//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Record, RecordEntry};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of records (Label, Size).
pub fn print_records_table(records: &[RecordEntry]) {
    if records.is_empty() {
        info("No records in this vault yet.");
        tip("Run `safezone credential <LABEL>` or `safezone note <LABEL>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Label", "Size"]);

    for r in records {
        table.add_row(vec![r.label.clone(), format!("{} B", r.size)]);
    }

    println!("{table}");
}

/// Print a decoded record in its recovered shape.
pub fn print_record(label: &str, record: &Record) {
    println!("{} {}", style("File:").bold(), label);
    match record {
        Record::Credential { user, password } => {
            println!("  {} {}", style("User:").bold(), user);
            println!("  {} {}", style("Password:").bold(), password);
        }
        Record::Note { text } => {
            println!("{}", style("--- Content ---").dim());
            for line in text.lines() {
                println!("{line}");
            }
        }
        Record::Empty => info("This record is empty."),
    }
}
