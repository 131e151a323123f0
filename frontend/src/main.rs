//! Entry point for the WASM application

pub fn main() {
    inbox_triage::run();
}
