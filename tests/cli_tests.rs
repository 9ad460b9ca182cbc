//! Runs the built `disasm6502` binary end to end.

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::Command;

fn disasm6502() -> Command {
    Command::new(env!("CARGO_BIN_EXE_disasm6502"))
}

#[test]
fn test_missing_file_exits_with_2() {
    let output = disasm6502().arg("does/not/exist.bin").output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr.starts_with("error: cannot read does/not/exist.bin: "));
    // the OS cause is reported once, through the source chain
    assert_eq!(stderr.matches("cannot read").count(), 1);
    assert_eq!(stderr.matches("(os error").count(), 1);
}

#[test]
fn test_usage_error_exits_with_2() {
    let output = disasm6502().arg("-c").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_listing_to_stdout() {
    let path = std::env::temp_dir().join(format!("disasm6502-cli-{}.bin", std::process::id()));
    std::fs::File::create(&path)
        .and_then(|mut file| file.write_all(&[0xA9, 0x00, 0x8D, 0x00, 0x20, 0xF0, 0xF9]))
        .unwrap();

    let output = disasm6502()
        .args(["-c", "-n", "-o", "0x8000"])
        .arg(&path)
        .output()
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let body: Vec<&str> = stdout.lines().skip(5).collect();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("; Source generated by disasm6502 version "));
    assert_eq!(
        body,
        [
            "        ORG $8000       ;",
            "$8000   LDA #$00        ; Cycles: 2",
            "$8002   STA $2000       ; Cycles: 4 [NES] PPU setup #1",
            "$8005   BEQ $8000       ; Cycles: 2/3",
        ]
    );
}
