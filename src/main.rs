//! ttracker main entrypoint.

use ttracker::run;

fn main() {
    if let Err(e) = run() {
        // precondition violations already reported themselves on stdout
        if !e.is_precondition() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
