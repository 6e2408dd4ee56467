use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\" /><title>Aurora Hub</title></head>\n<body><p>The dashboard has not been built yet. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the host.</p></body>\n</html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend dist");
    } else {
        let embedded = out_dir.join("dist");
        fs::create_dir_all(&embedded).expect("create static/dist");
        let index = embedded.join("index.html");
        if !index.exists() {
            fs::write(index, PLACEHOLDER_INDEX).expect("write placeholder index.html");
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
