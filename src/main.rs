#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("studio-portfolio runs in the browser. Use `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    studio_portfolio::frontend::run();
}
