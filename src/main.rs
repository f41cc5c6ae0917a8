// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthoroute CLI entrypoint.
//!
//! Reads a JSON scene (nodes, connections, optional router config), routes every
//! connection and prints the routed scene as JSON on stdout. Diagnostics go to
//! stderr; set `RUST_LOG=orthoroute=debug` for routing details.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use orthoroute::routing::RouterConfig;
use orthoroute::scene::SceneFile;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <scene.json> [--config <config.json>] [--pretty]\n  {program} - [--config <config.json>] [--pretty]\n\nRoutes every connection of the scene and prints the result as JSON.\n`-` reads the scene from stdin.\n--config replaces the scene's router config with the given JSON file (missing fields use defaults).\n--pretty pretty-prints the output."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    scene: String,
    config: Option<String>,
    pretty: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut scene = None;
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "-" => {
                if scene.is_some() {
                    return Err(());
                }
                scene = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if scene.is_some() {
                    return Err(());
                }
                scene = Some(arg);
            }
        }
    }

    options.scene = scene.ok_or(())?;
    Ok(options)
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let mut file = if options.scene == "-" {
        SceneFile::from_reader(std::io::stdin().lock())?
    } else {
        SceneFile::read(Path::new(&options.scene))?
    };
    if let Some(path) = options.config.as_deref() {
        let raw = std::fs::read_to_string(path)?;
        file.config = RouterConfig::from_json_str(&raw)?;
    }

    let mut scene = file.into_scene()?;
    let routed = scene.refresh()?;
    tracing::info!(routed, "scene routed");

    let output = scene.to_routed();
    let mut stdout = std::io::stdout().lock();
    if options.pretty {
        serde_json::to_writer_pretty(&mut stdout, &output)?;
    } else {
        serde_json::to_writer(&mut stdout, &output)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "orthoroute".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("orthoroute: {err}");
        std::process::exit(1);
    }
}
