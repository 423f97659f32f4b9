//! Subword - command line front end
//!
//! Runs one motion or text object against a file and prints the result:
//!
//! ```bash
//! subword src/lib.rs --line 12 --col 4 --motion w
//! subword notes.txt --line 3 --col 0 --object aw --set nosubword
//! RUST_LOG=subword=trace subword notes.txt --line 1 --col 0 --motion e --set count=3
//! subword data.csv --line 1 --col 0 --candidate '1,0:,.' --set nomultiline
//! ```

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use subword::{
    ByteEncoding, Candidate, Direction, LineBuffer, Motion, MotionOptions, MotionSpec, Navigator,
    Position, TextEncoding, TextObject, Utf8Encoding,
};

#[derive(Parser)]
#[command(
    name = "subword",
    version,
    about = "Sub-word aware word motions and text objects"
)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["motion", "object", "candidate"])
))]
struct Args {
    /// File to read
    file: std::path::PathBuf,

    /// Cursor line (1-based)
    #[arg(short, long, default_value = "1")]
    line: usize,

    /// Cursor column (0-based byte offset)
    #[arg(short, long, default_value = "0")]
    col: usize,

    /// Motion to run: w, e, b or ge
    #[arg(short, long)]
    motion: Option<Motion>,

    /// Text object to select: iw or aw
    #[arg(short, long)]
    object: Option<TextObject>,

    /// Custom motion candidate as `start,end:pattern` (repeatable)
    #[arg(long)]
    candidate: Vec<String>,

    /// Search custom candidates backward
    #[arg(long, requires = "candidate")]
    backward: bool,

    /// Option override such as `count=3`, `nomultiline` or `subword=off`
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Treat bytes as characters instead of decoding UTF-8
    #[arg(long)]
    bytes: bool,
}

fn run<E: TextEncoding>(args: &Args, buffer: &LineBuffer, encoding: E) -> Result<String> {
    let options = MotionOptions::with_overrides(&args.set).context("invalid --set option")?;
    let nav = Navigator::with_encoding(buffer, encoding).with_options(options);
    let start = Position::new(args.line, args.col);

    if let Some(object) = args.object {
        let range = nav
            .select(object, start)
            .with_context(|| format!("{object} at {start}"))?;
        return Ok(range.map_or_else(|| "none".to_string(), |r| r.to_string()));
    }

    let target = if let Some(motion) = args.motion {
        nav.apply(motion, start)
            .with_context(|| format!("{motion} from {start}"))?
    } else {
        let candidates = args
            .candidate
            .iter()
            .map(|c| Candidate::parse(c))
            .collect::<subword::Result<Vec<_>>>()
            .context("invalid --candidate")?;
        let direction = if args.backward {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let spec = MotionSpec::custom(direction, &candidates)?.with_options(nav.options());
        nav.motion(&spec, start)
            .with_context(|| format!("custom motion from {start}"))?
    };
    Ok(target.to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let buffer = LineBuffer::open(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    log::debug!("{} lines in {}", buffer.lines().len(), args.file.display());

    let output = if args.bytes {
        run(&args, &buffer, ByteEncoding)?
    } else {
        run(&args, &buffer, Utf8Encoding)?
    };
    println!("{output}");
    Ok(())
}
