use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    // The generator lives inside the repository it decorates, so the
    // manifest directory is the repository root.
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));

    pwa_icon_gen::output::generate(root)
}
