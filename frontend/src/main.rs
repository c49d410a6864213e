//! Entry point for the WASM application, built by trunk.

pub fn main() {
    detector_frontend::mount();
}
