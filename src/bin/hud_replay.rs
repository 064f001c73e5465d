//! Replays recorded host messages against an in-memory HUD.
//!
//! Reads one JSON message (or array of messages) per line from a file or
//! stdin, applies each to a [`MockSurface`] with the default layout, and
//! prints the final state of every element.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin hud_replay -- recording.jsonl
//! echo '{"action":"setGear","value":0}' | cargo run --bin hud_replay
//! RUST_LOG=debug cargo run --bin hud_replay -- recording.jsonl
//! ```
//!
//! Lines that fail to parse are reported and skipped. Setter errors are
//! reported with the line number and replay continues.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use vehicle_hud::hal::MockSurface;
use vehicle_hud::{parse_batch, HudConfig, ResolvePolicy};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1);
    let input: Box<dyn BufRead> = match &path {
        Some(p) => Box::new(BufReader::new(
            File::open(p).with_context(|| format!("opening {}", p))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let config = HudConfig::default().with_resolve_policy(ResolvePolicy::Lenient);
    let mut hud = vehicle_hud::create(config)
        .initialize(MockSurface::hud())
        .context("binding HUD to mock surface")?;

    let mut applied = 0usize;
    let mut failed = 0usize;
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("reading line {}", line_no))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let cmds = match parse_batch(line) {
            Ok(cmds) => cmds,
            Err(e) => {
                log::warn!("line {}: {}", line_no, e);
                failed += 1;
                continue;
            }
        };
        for cmd in cmds {
            match hud.apply(cmd) {
                Ok(()) => applied += 1,
                Err(e) => {
                    log::warn!("line {}: {} failed: {}", line_no, cmd.action(), e);
                    failed += 1;
                }
            }
        }
    }

    log::info!("{} commands applied, {} failed", applied, failed);

    for element in hud.surface().elements() {
        let flags: Vec<&str> = element.flags.iter().map(String::as_str).collect();
        let styles: Vec<String> = element
            .styles
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        println!(
            "{:<24} text={:?} styles=[{}] flags=[{}]{}",
            element.id,
            element.text,
            styles.join("; "),
            flags.join(" "),
            element
                .glyph
                .map(|g| format!(" glyph={}", g.class_name()))
                .unwrap_or_default()
        );
    }

    Ok(())
}
