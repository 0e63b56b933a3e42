use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fogmaze::cli::{self, Args, Mode};
use fogmaze::config::{self, Settings, MAX_HEIGHT, MAX_NAME_LEN, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use fogmaze::play::{run_session, SessionEnd};
use fogmaze::render::Glyphs;
use fogmaze::{read_maze, write_generated, Maze};

#[derive(Default)]
struct NewMaze {
    name: Option<String>,
    width: Option<u16>,
    height: Option<u16>,
    seed: Option<u64>,
    force: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let settings = config::read_settings();
    let glyphs = Glyphs::new(settings.ascii, settings.cell_w);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    match args.mode {
        Mode::New {
            name,
            width,
            height,
            seed,
            force,
        } => {
            let request = NewMaze {
                name,
                width,
                height,
                seed,
                force,
            };
            create_and_play(request, &settings, &glyphs, &mut input, &mut stdout)
        }
        Mode::Play { path } => open_and_play(&path, &settings, &glyphs, &mut input, &mut stdout),
    }
}

fn open_and_play(
    path: &Path,
    settings: &Settings,
    glyphs: &Glyphs,
    input: &mut impl BufRead,
    stdout: &mut Stdout,
) -> Result<()> {
    match File::open(path) {
        Ok(file) => {
            let maze = read_maze(&mut BufReader::new(file))
                .with_context(|| format!("failed to load maze from {}", path.display()))?;
            play(maze, glyphs, input, stdout)
        }
        Err(err) => {
            log::warn!("could not open {}: {err}", path.display());
            writeln!(stdout, "Invalid filename; could not open.")?;
            if cli::confirm(input, stdout, "Would you like to create a new maze instead?")? {
                create_and_play(NewMaze::default(), settings, glyphs, input, stdout)
            } else {
                Ok(())
            }
        }
    }
}

fn create_and_play(
    request: NewMaze,
    settings: &Settings,
    glyphs: &Glyphs,
    input: &mut impl BufRead,
    stdout: &mut Stdout,
) -> Result<()> {
    let Some(path) = choose_path(request.name, request.force, input, stdout)? else {
        return Ok(());
    };
    let width = match request.width {
        Some(w) => w as usize,
        None => match cli::prompt_number(input, stdout, "Desired width", MIN_WIDTH..=MAX_WIDTH)? {
            Some(w) => w,
            None => return Ok(()),
        },
    };
    let height = match request.height {
        Some(h) => h as usize,
        None => match cli::prompt_number(input, stdout, "Desired height", MIN_HEIGHT..=MAX_HEIGHT)? {
            Some(h) => h,
            None => return Ok(()),
        },
    };

    let seed = config::run_seed(request.seed.or(settings.seed));
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut sink = BufWriter::new(file);
    write_generated(width, height, &mut rng, &mut sink)
        .with_context(|| format!("failed to save maze to {}", path.display()))?;
    drop(sink);

    let file = File::open(&path).with_context(|| format!("failed to reopen {}", path.display()))?;
    let maze = read_maze(&mut BufReader::new(file))
        .with_context(|| format!("failed to load maze from {}", path.display()))?;
    play(maze, glyphs, input, stdout)
}

/// Settles on the file to write, asking before overwriting. `None` when
/// input ends first.
fn choose_path(
    name: Option<String>,
    force: bool,
    input: &mut impl BufRead,
    stdout: &mut Stdout,
) -> Result<Option<PathBuf>> {
    if let Some(n) = &name {
        if !cli::valid_name(n) {
            bail!("invalid maze name {n:?}: at most {MAX_NAME_LEN} characters, no spaces");
        }
    }
    let mut name = name;
    loop {
        let n = match name.take() {
            Some(n) => n,
            None => match cli::prompt_name(input, stdout)? {
                Some(n) => n,
                None => return Ok(None),
            },
        };
        let path = cli::maze_path(&n);
        if force
            || !path.exists()
            || cli::confirm(
                input,
                stdout,
                "A file with this filename already exists. Overwrite file?",
            )?
        {
            return Ok(Some(path));
        }
    }
}

fn play(maze: Maze, glyphs: &Glyphs, input: &mut impl BufRead, stdout: &mut Stdout) -> Result<()> {
    stdout.execute(EnterAlternateScreen)?;
    let result = run_session(maze, input, stdout, glyphs);
    stdout.execute(LeaveAlternateScreen)?;
    match result? {
        SessionEnd::Won => log::info!("maze solved"),
        SessionEnd::Quit => log::info!("player quit"),
    }
    Ok(())
}
