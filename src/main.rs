// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nonos_check_image_size::{SizeGate, Verdict};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "check-image-size",
    version,
    about = "Check that loader.bin and kernel.bin fit in their reserved sectors"
)]
struct Args {
    /// Directory holding loader.bin and kernel.bin
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the gate's verdict line only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve working directory")?,
    };

    let gate = SizeGate::new(dir);
    match gate.check()? {
        Verdict::Pass => {
            info!(dir = %gate.dir().display(), "boot images within budget");
            Ok(())
        }
        Verdict::Oversize(over) => {
            println!("{}", over);
            std::process::exit(over.exit_code());
        }
    }
}
