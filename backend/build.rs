//! Stages the Trunk output (`../frontend/dist`) under `static/dist`, where
//! `include_dir!` embeds it. Without a frontend build a placeholder page is
//! written so the server still compiles and explains what is missing.

use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8" /><title>Ad Campaign Optimization</title></head>
<body>
<p>The frontend has not been built. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the backend.</p>
</body>
</html>
"#;

fn main() {
    let static_dir = Path::new("static");
    let staged_dir = static_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(&staged_dir);
        fs::create_dir_all(static_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend dist");
    } else if !staged_dir.join("index.html").exists() {
        fs::create_dir_all(&staged_dir).expect("create staged dir");
        fs::write(staged_dir.join("index.html"), PLACEHOLDER).expect("write placeholder index");
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
