//! Terminal output for commands.
//!
//! Results go to stdout. Errors, warnings and hints go to stderr so piped
//! output stays clean. Styling is dropped when `NO_COLOR` is set.

use console::{style, StyledObject};

fn plain() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Render `text` through `f` unless color is off.
fn paint<'a, F>(text: &'a str, f: F) -> String
where
    F: FnOnce(StyledObject<&'a str>) -> StyledObject<&'a str>,
{
    if plain() {
        text.to_string()
    } else {
        f(style(text)).to_string()
    }
}

/// `✓ added db1 (database)`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", |s| s.green()), msg);
}

/// `✗ conn_id 'db1' does not exist`
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", |s| s.red()), msg);
}

/// `⚠ sending db1 in clear to https://us.onetimesecret.com`
pub fn warn(msg: &str) {
    eprintln!("{} {}", paint("⚠", |s| s.yellow()), msg);
}

/// `→ run: dataxi list`
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint("→", |s| s.cyan()), paint(msg, |s| s.cyan()));
}

/// Secondary information on stdout.
pub fn dimmed(msg: &str) {
    println!("{}", paint(msg, |s| s.dim()));
}

/// A filesystem path, highlighted.
pub fn path(p: &str) -> String {
    paint(p, |s| s.cyan())
}

/// A conn_id, highlighted.
pub fn key(conn_id: &str) -> String {
    paint(conn_id, |s| s.cyan().bold())
}

/// `[14:03:27] 3 records retrieved`
pub fn records_retrieved(count: usize) {
    let now = chrono::Local::now().format("%H:%M:%S");
    dimmed(&format!("[{}] {} records retrieved", now, count));
}
