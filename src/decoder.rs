use byteorder::{ByteOrder, LittleEndian};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::consts::*;
use crate::errors::{Error, FormatError};
use crate::pattern::{Pattern, Step, Track};

/// Bounds-checked cursor over the input. Every read either yields the whole
/// field or fails with the offset where the field starts.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize, // Absolute offset from the start of the file
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Reader { data, pos }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        let start = self.pos;
        let bytes = start
            .checked_add(len)
            .and_then(|end| self.data.get(start..end))
            .ok_or(FormatError::Truncated { offset: start })?;
        self.pos += len;

        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, FormatError> {
        Ok(self.take(1)?[0])
    }
}

/// Decode a splice pattern from a byte slice.
///
/// The track section ends at the payload size declared in the header, so any
/// bytes following it are ignored. A structural error aborts the whole
/// decode.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("pattern_1.splice")?;
/// let pattern = splice::decode(&data)?;
/// print!("{}", pattern);
/// # Ok(())
/// # }
/// ```
pub fn decode(data: &[u8]) -> Result<Pattern, FormatError> {
    if !data.starts_with(MAGIC) {
        return Err(FormatError::NotSplice);
    }

    let mut header = Reader::new(data, PAYLOAD_SIZE_OFFSET);
    let payload_size = header.read_u8()? as usize;
    let version = parse_version(header.take(VERSION_LENGTH)?)?;
    let tempo = LittleEndian::read_f32(header.take(TEMPO_LENGTH)?);

    // Absolute offset where the track section ends
    let bound = PAYLOAD_OFFSET + payload_size;
    debug!(%version, tempo, bound, len = data.len(), "decoded splice header");
    if data.len() > bound {
        debug!(trailing = data.len() - bound, "ignoring bytes past payload");
    }

    let mut reader = Reader::new(&data[..bound.min(data.len())], HEADER_LENGTH);
    let mut tracks = Vec::new();
    while reader.pos < bound {
        let track = read_track(&mut reader)?;
        trace!(id = track.id, name = %track.name, "decoded track");
        tracks.push(track);
    }

    Ok(Pattern {
        version,
        tempo,
        tracks,
    })
}

/// Read the whole file at `path` and decode it.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Pattern, Error> {
    let data = fs::read(path)?;

    Ok(decode(&data)?)
}

fn parse_version(field: &[u8]) -> Result<String, FormatError> {
    let end = field
        .iter()
        .position(|&b| b == 0)
        .ok_or(FormatError::MalformedVersion)?;

    Ok(String::from_utf8_lossy(&field[..end]).into_owned())
}

fn read_track(reader: &mut Reader) -> Result<Track, FormatError> {
    let id = reader.read_u8()?;
    reader.take(TRACK_RESERVED_LENGTH)?;

    let name_length = reader.read_u8()? as usize;
    let name = String::from_utf8_lossy(reader.take(name_length)?).into_owned();

    let mut steps = [Step::Rest; NUM_STEPS];
    reader
        .take(NUM_STEPS)?
        .iter()
        .enumerate()
        .for_each(|(i, &x)| {
            steps[i] = Step::from(x);
        });

    Ok(Track { id, name, steps })
}
