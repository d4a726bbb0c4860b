#![allow(dead_code)]

use clap::CommandFactory;
use std::env;
use std::fs;
use std::path::Path;

include!("src/cli/args.rs");

fn main() {
    println!("cargo:rerun-if-changed=src/cli/args.rs");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("linestamp.1");

    // Render the man page from the same definition the binary parses with
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(&dest_path, buffer).unwrap();
    println!("cargo:rustc-env=LINESTAMP_MAN_PAGE={}", dest_path.display());
}
