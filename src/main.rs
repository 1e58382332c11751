//! pixels2moodistory main entrypoint.

use pixels2moodistory::run;
use pixels2moodistory::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
