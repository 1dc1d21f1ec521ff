//! Build script for breathtimer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Selects the session variant TOML, validates it, and generates the
//!   compiled-in session tables

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use breathtimer_core::config::SessionConfig;
use serde::Deserialize;

/// Variant file layout
#[derive(Deserialize)]
struct VariantFile {
    /// Human-readable variant name
    name: String,
    /// The session itself
    session: SessionConfig,
}

fn main() {
    setup_linker();

    let variant_path = select_variant();
    let variant = load_variant(&variant_path);
    generate_tables(&variant);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Pick the variant file
///
/// `BREATHTIMER_VARIANT` (a path) wins over the cargo features.
fn select_variant() -> PathBuf {
    println!("cargo:rerun-if-env-changed=BREATHTIMER_VARIANT");
    if let Ok(path) = env::var("BREATHTIMER_VARIANT") {
        return PathBuf::from(path);
    }

    let seven_eleven = env::var_os("CARGO_FEATURE_VARIANT_SEVEN_ELEVEN").is_some();
    let paced_hold = env::var_os("CARGO_FEATURE_VARIANT_PACED_HOLD").is_some();

    match (seven_eleven, paced_hold) {
        (true, true) => fail(
            "Conflicting build variants",
            &["Enable only one of 'variant-seven-eleven' and 'variant-paced-hold'.".to_string()],
        ),
        (_, true) => PathBuf::from("variants/paced-hold.toml"),
        _ => PathBuf::from("variants/seven-eleven.toml"),
    }
}

/// Read, parse and validate a variant file
fn load_variant(path: &Path) -> VariantFile {
    println!("cargo:rerun-if-changed={}", path.display());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(
            "Failed to read session variant",
            &[format!("{}: {}", path.display(), e)],
        ),
    };

    let variant: VariantFile = match toml::from_str(&content) {
        Ok(variant) => variant,
        Err(e) => fail(
            "Invalid session variant TOML",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    if let Err(e) = variant.session.validate() {
        fail(
            "Session variant rejected",
            &[format!("{}: {:?}", path.display(), e)],
        );
    }

    println!(
        "cargo:warning=session variant '{}' validated ({} cycles, {}s)",
        variant.name,
        variant.session.cycle_count(),
        variant.session.session_length_s()
    );
    variant
}

/// Write the `const` tables the firmware includes
fn generate_tables(variant: &VariantFile) {
    let session = &variant.session;
    let mut out = String::new();

    let _ = writeln!(out, "/// Variant name");
    let _ = writeln!(out, "pub const VARIANT: &str = {:?};", variant.name);

    let _ = writeln!(out, "/// Phase order for one cycle");
    let _ = writeln!(out, "pub const SEQUENCE: &[Phase] = &[");
    for phase in &session.sequence {
        let _ = writeln!(out, "    Phase::{:?},", phase);
    }
    let _ = writeln!(out, "];");

    let durations = &session.durations;
    let _ = writeln!(out, "/// Phase durations in seconds");
    let _ = writeln!(out, "pub const DURATIONS: PhaseDurationTable = PhaseDurationTable {{");
    let _ = writeln!(out, "    breathing_in: {:?},", durations.breathing_in);
    let _ = writeln!(out, "    breathing_out: {:?},", durations.breathing_out);
    let _ = writeln!(out, "    hold_after_in: {:?},", durations.hold_after_in);
    let _ = writeln!(out, "    hold_after_out: {:?},", durations.hold_after_out);
    let _ = writeln!(out, "}};");

    let _ = writeln!(out, "/// Session budget in seconds");
    let _ = writeln!(
        out,
        "pub const TOTAL_DURATION_S: u32 = {};",
        session.total_duration_s
    );

    let _ = writeln!(out, "/// Phase-change vibration rules");
    let _ = writeln!(out, "pub const FEEDBACK: &[FeedbackRule] = &[");
    for rule in session.feedback.rules() {
        let _ = writeln!(
            out,
            "    FeedbackRule::new(Phase::{:?}, Phase::{:?}, VibePattern::{:?}),",
            rule.from, rule.to, rule.pattern
        );
    }
    let _ = writeln!(out, "];");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("session_variant.rs"), out).expect("write session_variant.rs");
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
