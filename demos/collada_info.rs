//! Command-line smoke tool for COLLADA asset metadata.
//!
//! Prints the asset block of a `.dae` file, optionally edits the unit or up
//! axis, and writes the result back out.
//!
//! # Usage
//!
//! Inspect a file:
//! ```sh
//! cargo run --example collada_info -- model.dae
//! ```
//!
//! Create a new document in centimeters, Z up, flattened:
//! ```sh
//! cargo run --example collada_info -- --unit centimeter --up z --flatten -o new.dae
//! ```
//!
//! Set a custom unit:
//! ```sh
//! cargo run --example collada_info -- model.dae --unit cubit --scale 0.4572 -o model.dae
//! ```

use clap::Parser;
use colladoc::collada::known_units;
use colladoc::{ColladaDocument, WriteOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect and edit COLLADA asset metadata
#[derive(Parser, Debug)]
#[command(name = "collada_info", version)]
struct Args {
    /// Document to load; a new document is created when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file; prints to stdout when omitted and an edit was requested
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Name of the authoring tool appended to the contributor block
    #[arg(long, default_value = "collada_info")]
    tool: String,

    /// Unit name (kilometer, meter, ..., inch, or any name with --scale)
    #[arg(long)]
    unit: Option<String>,

    /// Meters per unit, required for units outside the built-in table
    #[arg(long, requires = "unit")]
    scale: Option<f64>,

    /// Up axis: x, y or z
    #[arg(long)]
    up: Option<String>,

    /// Strip layout whitespace instead of indenting
    #[arg(long)]
    flatten: bool,

    /// Output encoding label
    #[arg(long, default_value = "UTF-8")]
    encoding: String,

    /// List the units known by name and exit
    #[arg(long)]
    list_units: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.list_units {
        for (name, meter) in known_units() {
            println!("{:<12} {}", name, meter);
        }
        return Ok(());
    }

    let mut doc = match &args.input {
        Some(path) => ColladaDocument::open(path, &args.tool)?,
        None => ColladaDocument::new(&args.tool)?,
    };

    let mut edited = args.input.is_none();
    if let Some(unit) = &args.unit {
        if !doc.set_unit_scale(unit, args.scale)? {
            eprintln!("Unknown unit '{}'; pass --scale to define it", unit);
            std::process::exit(2);
        }
        edited = true;
    }
    if let Some(axis) = &args.up {
        if !doc.set_up_axis(axis)? {
            eprintln!("Unknown up axis '{}'; expected x, y or z", axis);
            std::process::exit(2);
        }
        edited = true;
    }

    println!("namespace:      {}", doc.namespace().unwrap_or("-"));
    println!("version:        {}", doc.version().unwrap_or("-"));
    println!("author:         {}", doc.author()?);
    println!("authoring tool: {}", doc.authoring_tool()?);
    println!("unit:           {}", doc.unit_scale()?);
    match doc.up_axis()? {
        Some(axis) => println!("up axis:        {}", axis),
        None => println!("up axis:        (unrecognized)"),
    }
    if let Some(created) = doc.created()? {
        println!("created:        {}", created);
    }
    if let Some(modified) = doc.modified()? {
        println!("modified:       {}", modified);
    }

    let options = WriteOptions::new()
        .with_indent(!args.flatten)
        .with_encoding(args.encoding.as_str());

    match &args.output {
        Some(path) => {
            doc.save(path, &options)?;
            println!("Wrote {}", path.display());
        },
        None if edited => {
            let stdout = std::io::stdout();
            doc.write_to(stdout.lock(), &options)?;
        },
        None => {},
    }

    Ok(())
}
