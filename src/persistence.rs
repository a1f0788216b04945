//! File I/O for cube states.
//!
//! A state file is the JSON form of [`CubeState`]: an object with one key per
//! face (`front`, `back`, `right`, `left`, `up`, `down`), each a 3x3 array of
//! lowercase color names. Any renderer or editor can read and write it
//! without knowing the engine.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::cube::CubeState;
use crate::error::Result;

/// Writes `state` to `path` as pretty-printed JSON.
pub fn save_state(path: impl AsRef<Path>, state: &CubeState) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, state)?;
    writeln!(writer)?;
    writer.flush()?;
    info!("saved cube state to {}", path.display());
    Ok(())
}

/// Reads a state previously written by [`save_state`] (or by hand).
///
/// Hand-painted states are accepted as long as every cell holds a known
/// color; a warning is logged when the color counts could not come from
/// turning a real cube.
pub fn load_state(path: impl AsRef<Path>) -> Result<CubeState> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let state: CubeState = serde_json::from_reader(reader)?;
    if !state.has_consistent_color_counts() {
        warn!("{} holds a state with inconsistent color counts", path.display());
    }
    info!("loaded cube state from {}", path.display());
    Ok(state)
}
