//! Build script for DJ Lazy.
//!
//! Copies the `.env.example` template from the crate root into the user's
//! local data directory (`<data_local_dir>/djlazy/.env.example`), next to the
//! `.env` file the binary reads its Spotify credentials from. Failing to copy
//! never fails the build.

use std::{env, fs, path::PathBuf};

fn copy_env_example() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        return Err(format!(".env.example not found at {}", env_example_path.display()).into());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("djlazy");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(&env_example_path)?;
    fs::write(out_dir.join(".env.example"), contents)?;
    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_env_example() {
        println!("cargo:warning=cannot install .env.example: {}", e);
    }
}
