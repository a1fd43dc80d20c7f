// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use failure::{format_err, Error};
use log::info;
use seamcarver::{energy_to_image, SeamCarver};

// Dimensions default to the image's own, so asking for just a new
// width leaves the height alone.
fn dimension(matches: &ArgMatches, name: &str, current: usize) -> Result<usize, Error> {
    match matches.value_of(name) {
        None => Ok(current),
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| format_err!("--{} must be a whole number, not {:?}", name, value)),
    }
}

fn main() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("columns")
                .help("Target width in pixels")
                .short("c")
                .long("columns")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("rows")
                .help("Target height in pixels")
                .short("r")
                .long("rows")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the input instead of carving")
                .short("e")
                .long("energy"),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log every seam removed")
                .short("v")
                .long("verbose"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("no input image given"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| format_err!("no output path given"))?;

    let image = image::open(input)?;
    let mut carver = SeamCarver::new(&image);
    info!("loaded {} ({}x{})", input, carver.width(), carver.height());

    if matches.is_present("energy") {
        energy_to_image(&carver.energy_map()).save(output)?;
        info!("wrote energy map to {}", output);
        return Ok(());
    }

    let columns = dimension(&matches, "columns", carver.width())?;
    let rows = dimension(&matches, "rows", carver.height())?;
    carver.carve(columns, rows)?;
    carver.picture().save(output)?;
    info!("wrote {}x{} image to {}", carver.width(), carver.height(), output);
    Ok(())
}
