use backrooms_maze::{
    generators,
    grid::Grid,
    grid_dimensions::GridDimensions,
    renderers,
};
use docopt::Docopt;
use error_chain::ChainedError;
use log::info;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::{prelude::*, BufWriter},
    path::Path,
    process,
};

const USAGE: &str = "Backrooms Maze

Usage:
    maze_driver -h | --help
    maze_driver [--size=<wxh>] [--seed=<n>] [--image-out=<path>] [--cell-pixels=<n>] [--no-image] [--text] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --size=<wxh>           The maze size in cells as <width>x<height> [default: 50x50].
    --seed=<n>             Seed for a reproducible maze. A random seed is chosen and logged if not given.
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format [default: maze_output.png].
    --cell-pixels=<n>      Pixel count to render one cell wall in the image [default: 10].
    --no-image             Do not write the image rendering.
    --text                 Print a textual rendering of the maze to stdout.
    --text-out=<path>      Output file path for a textual rendering of the maze.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#cells) m(#passages). Line 2+ passage between cells. Uses 1-based cell indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: String,
    flag_seed: Option<u64>,
    flag_image_out: String,
    flag_cell_pixels: u32,
    flag_no_image: bool,
    flag_text: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::backrooms_maze::errors::Error, ::backrooms_maze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        // docopt prints help to stdout with a zero exit code, usage errors to stderr
        if let ErrorKind::DocOptFailure(ref docopt_error) = *e.kind() {
            docopt_error.exit();
        }
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }
}

fn run() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let dimensions: GridDimensions = args.flag_size.parse()?;
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating {} maze with seed {}", dimensions, seed);

    let mut rng = XorShiftRng::seed_from_u64(seed);
    let maze_grid = generators::recursive_backtracker(dimensions, &mut rng)?;

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze_grid, &args.flag_save_edges)?;
    }

    if args.flag_text {
        println!("{}", maze_grid);
    }
    if !args.flag_text_out.is_empty() {
        write_text_to_file(&maze_grid.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("saved text maze to {}", args.flag_text_out);
    }

    if !args.flag_no_image {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .build();
        renderers::render_png(&maze_grid, &render_options, Path::new(&args.flag_image_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let file = File::create(file_path)
        .chain_err(|| format!("Failed to create maze graph file {}", file_path))?;
    let mut writer = BufWriter::new(file);
    maze_grid.write_edge_list(&mut writer)
             .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    writer.flush()?;
    info!("saved maze graph to {}", file_path);

    Ok(())
}
