use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();
    let _profile = env::var("PROFILE").unwrap();

    // Copy runtime assets next to the binary
    for asset in ["config.toml", "scripts.json"] {
        let source_path = Path::new(asset);
        let dest_path = Path::new(&out_dir)
            .parent()
            .unwrap()
            .parent()
            .unwrap()
            .parent()
            .unwrap()
            .join(asset);

        fs::copy(source_path, dest_path).unwrap();
    }
}
