//! Block-delta encoder for 23x16 monochrome animations shown with the 8
//! custom glyphs of a character LCD.
//!
//! Every frame is cut into 8 glyphs of 5x8 pixels ([`PackedFrame`]), then
//! diffed against the previous frame: the resulting [`DeltaRecord`] holds a
//! change mask and the glyphs that differ.

mod block;
mod delta;
mod error;
mod frame;
mod listing;
mod raster;
mod source;
mod stats;

pub mod params;

pub use self::{block::*, delta::*, error::*, frame::*, listing::*, raster::*, source::*, stats::*};
use anyhow::Context;
use log::info;

/// Loads and packs frame `idx` of `source`.
pub fn load_frame(source: &Source, idx: usize) -> Result<PackedFrame> {
    pack(&source.load(idx)?)
}

/// Encodes frames `1..=frames` of `source` one by one, handing each record to
/// `sink` as soon as it's ready.
///
/// Stops at the first frame that can't be loaded; records emitted up to that
/// point stay emitted.
pub fn encode(source: &Source, frames: usize, sink: &mut impl Sink) -> anyhow::Result<Stats> {
    let mut encoder = DeltaEncoder::new();

    for idx in 1..=frames {
        let frame =
            load_frame(source, idx).with_context(|| format!("Couldn't encode frame {}", idx))?;

        emit(&mut encoder, frame, sink)?;
    }

    let stats = encoder.finish();
    info!("{}", stats);

    Ok(stats)
}

/// Encodes frames that were already packed, in order.
pub fn encode_packed(
    frames: impl IntoIterator<Item = PackedFrame>,
    sink: &mut impl Sink,
) -> anyhow::Result<Stats> {
    let mut encoder = DeltaEncoder::new();

    for frame in frames {
        emit(&mut encoder, frame, sink)?;
    }

    let stats = encoder.finish();
    info!("{}", stats);

    Ok(stats)
}

fn emit(encoder: &mut DeltaEncoder, frame: PackedFrame, sink: &mut impl Sink) -> anyhow::Result<()> {
    let record = encoder.push(frame);

    sink.emit(&record).context("Couldn't write record")
}
