use anyhow::{Context, Result};
use argh::FromArgs;
use encoder_lib::{encode, encode_packed, load_frame, Format, Listing, PackedFrame, Source, Stats};
use indicatif::ParallelProgressIterator;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Converts frames 1..N into a block-delta animation listing.
struct Args {
    /// number of frames to encode (default: every frame found)
    #[argh(positional)]
    frames: Option<usize>,

    /// directory containing the frames
    #[argh(option, short = 'd', default = "PathBuf::from(\"frames\")")]
    dir: PathBuf,

    /// extension of the frame files
    #[argh(option, short = 'e', default = "String::from(\"gif\")")]
    ext: String,

    /// listing format: `asm` or `c`
    #[argh(option, short = 'f', default = "Format::Asm")]
    format: Format,

    /// name of the array in the `c` format
    #[argh(option, short = 'l', default = "String::from(\"video\")")]
    label: String,

    /// output file (default: stdout)
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// pack every frame up front, in parallel, before diffing them
    #[argh(switch, short = 'p')]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Args = argh::from_env();
    let source = Source::new(&args.dir, args.ext.as_str());

    let frames = source.frame_count(args.frames)?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Couldn't create output: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut listing =
        Listing::new(out, args.format, &args.label).context("Couldn't write listing")?;

    let stats = if args.parallel {
        let frames = perform_packing(&source, frames)?;
        encode_packed(frames, &mut listing)?
    } else {
        encode(&source, frames, &mut listing)?
    };

    listing.finish().context("Couldn't write listing")?;

    report(&stats);

    Ok(())
}

fn perform_packing(source: &Source, frames: usize) -> Result<Vec<PackedFrame>> {
    (1..=frames)
        .into_par_iter()
        .progress_count(frames as u64)
        .map(|idx| {
            load_frame(source, idx).with_context(|| format!("Couldn't encode frame {}", idx))
        })
        .collect()
}

fn report(stats: &Stats) {
    eprintln!("{}", stats);
    eprintln!(
        "({} bytes out of {} raw, {:.1}%)",
        stats.bytes,
        stats.raw_bytes(),
        stats.ratio() * 100.0
    );
}
