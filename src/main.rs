use clap::{Arg, ArgAction, Command, value_parser};
use log::error;
use std::path::{Path, PathBuf};

mod models;
mod output;
mod render;

use models::{DEFAULT_SIZES, ICO_FILE_NAME, IconError, IconSpec};

fn main() {
    env_logger::init();

    let matches = Command::new("fluxauth-icons")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders the FluxAuth extension icon set")
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .default_value("icons")
                .value_parser(value_parser!(PathBuf))
                .help("Directory the icon files are written to"),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .action(ArgAction::Append)
                .value_parser(value_parser!(u32))
                .help("Edge length in pixels; repeat for more than one size"),
        )
        .arg(
            Arg::new("ico")
                .long("ico")
                .action(ArgAction::SetTrue)
                .help("Also bundle the rendered sizes into icon.ico"),
        )
        .get_matches();

    let out_dir = matches.get_one::<PathBuf>("out-dir").unwrap().clone();
    let sizes: Vec<u32> = match matches.get_many::<u32>("size") {
        Some(values) => values.copied().collect(),
        None => DEFAULT_SIZES.to_vec(),
    };
    let with_ico = matches.get_flag("ico");

    if let Err(e) = run(&sizes, &out_dir, with_ico) {
        error!("icon generation failed: {e}");
        std::process::exit(1);
    }
}

/// Renders every requested size into `out_dir`, one at a time and in the
/// order given, then the optional `.ico` bundle. Any failure aborts the
/// remaining sizes; files already written stay in place.
fn run(sizes: &[u32], out_dir: &Path, with_ico: bool) -> Result<(), IconError> {
    let mut rendered = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let spec = IconSpec::for_size(size);
        let image = render::render_icon(&spec)?;
        output::write_png(&image, &spec, out_dir)?;
        println!("Created {}", spec.file_name());
        rendered.push((spec, image));
    }

    if with_ico {
        output::write_ico_bundle(&rendered, out_dir)?;
        println!("Created {ICO_FILE_NAME}");
    }

    println!("All icons created!");
    Ok(())
}
