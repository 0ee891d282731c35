use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

fn main() {
    // The directory entry only tracks added/removed partials; edits to
    // main.css and each partial need their own line.
    println!("cargo:rerun-if-changed={CSS_DIR}");
    for entry in fs::read_dir(CSS_DIR).expect("Failed to read assets/css") {
        let path = entry.expect("Failed to read assets/css entry").path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    // main.css pulls the partials in through @import
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle site CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify site CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to print site CSS");

    fs::write(CSS_BUNDLE, css.code).expect("Failed to write bundle.css");

    println!("Site CSS bundled: {CSS_BUNDLE}");
}
