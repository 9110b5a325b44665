//! # Folio CLI
//!
//! Usage:
//!   folio job.json -o regions.json
//!   echo '{ ... }' | folio
//!   folio --example > job.json
//!
//! Set `RUST_LOG=debug` to see per-region decisions.

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_job_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), folio::FolioError> {
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let output_path = args.windows(2).find(|w| w[0] == "-o").map(|w| w[1].clone());

    let dump = folio::render_json(&input)?;
    match output_path {
        Some(path) => {
            fs::write(&path, &dump)?;
            eprintln!("✓ Written {} bytes to {}", dump.len(), path);
        }
        None => println!("{}", dump),
    }
    Ok(())
}

fn example_job_json() -> &'static str {
    r##"{
  "device": { "dpiX": 300, "dpiY": 300 },
  "page": {
    "size": "Letter",
    "margin": { "top": 72, "right": 72, "bottom": 72, "left": 72 }
  },
  "metrics": { "advance": 0.6, "leading": 1.2 },
  "content": {
    "type": "layer",
    "children": [
      {
        "node": {
          "type": "padding",
          "padding": { "top": 12, "right": 0, "bottom": 12, "left": 24 },
          "target": {
            "type": "maxSize",
            "maxWidth": 288,
            "target": {
              "type": "text",
              "content": "Content is measured lazily. Each region asks for the next piece that fits, and the rest waits for the next page.",
              "style": { "fontFamily": "Courier", "fontSize": 11 }
            }
          }
        }
      },
      {
        "node": {
          "type": "offset",
          "hAlign": "end",
          "vAlign": "start",
          "dx": 0,
          "dy": 0,
          "target": {
            "type": "minSize",
            "minWidth": 72,
            "minHeight": 0,
            "target": { "type": "text", "content": "Page note" }
          }
        },
        "align": "start"
      }
    ]
  }
}
"##
}
