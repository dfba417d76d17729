use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

// Trunk post-build hook: rewrite absolute bundle paths so the page can be
// served from any sub-directory (or loaded inside an iframe from a file path).
fn main() {
    let Ok(staging_dir) = env::var("TRUNK_STAGING_DIR") else {
        eprintln!("TRUNK_STAGING_DIR is not set; run this as a Trunk hook");
        process::exit(1);
    };

    // Using the configured html output name (set in Trunk.toml)
    let staged_html_path = PathBuf::from(staging_dir).join("heart.html");

    let html = match fs::read_to_string(&staged_html_path) {
        Ok(html) => html,
        Err(error) => {
            eprintln!("Cannot read {}: {}", staged_html_path.display(), error);
            process::exit(1);
        }
    };

    let html = html
        .replace("/heart-render-engine.js", "./heart-render-engine.js")
        .replace("/heart-render-engine_bg.wasm", "./heart-render-engine_bg.wasm");

    if let Err(error) = fs::write(&staged_html_path, html) {
        eprintln!("Cannot write {}: {}", staged_html_path.display(), error);
        process::exit(1);
    }
}
