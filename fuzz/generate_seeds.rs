#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;

    let dir = "fuzz/corpus/fuzz_color";
    fs::create_dir_all(dir).unwrap();
    let colors = [
        "#FF5733", "3498DB", "#fff", "abc", "#FF573380", "#0000FF40", "#00000000",
        // malformed
        "#", "", "#12345", "#GG0000", "##FFFFFF", "#1234567", " #FFF",
    ];
    for (i, c) in colors.iter().enumerate() {
        fs::write(format!("{dir}/color_{i:02}"), c).unwrap();
    }

    let dir = "fuzz/corpus/fuzz_resolution";
    fs::create_dir_all(dir).unwrap();
    let sizes = [
        "1920x1080", "800X600", "1x1", "65535x65535", " 1280x720 ",
        // malformed
        "0x100", "65536x1", "1920", "x1080", "1920x", "-1x5", "1920x1080x3", "4294967296x1",
    ];
    for (i, s) in sizes.iter().enumerate() {
        fs::write(format!("{dir}/size_{i:02}"), s).unwrap();
    }
}
