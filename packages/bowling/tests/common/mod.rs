#![allow(dead_code)]

// tests/common/mod.rs
use std::io::Write;

use tempfile::NamedTempFile;

#[ctor::ctor]
fn init_logging() {
    bowling_test_support::logging::init();
}

/// Input text for one player with the given ten score lines.
pub fn single_player(lines: &[&str]) -> String {
    game_input(&["Alice"], &[lines])
}

/// Input text for several players; `frames[p]` holds player `p`'s ten lines.
pub fn game_input(names: &[&str], frames: &[&[&str]]) -> String {
    let mut out = format!("{}\n", names.len());
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    for frame in 0..10 {
        for lines in frames {
            if let Some(line) = lines.get(frame) {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
