//! Pipe-delimited persistence codec for the movie catalog.
//!
//! One record per line, `title|director|year|rating`, rating printed
//! with exactly one fractional digit, no header, UTF-8. Fields are not
//! escaped, so a `|` inside a title corrupts that line on the way back
//! in; the loader then skips it with a diagnostic. Documented
//! limitation of the format.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::CodecError;
use crate::record::Movie;
use crate::store::MovieStore;

/// Write every live record to `path`, truncating whatever was there.
///
/// No atomic rename, no backup: the file is the single session-to-
/// session snapshot and is overwritten unconditionally.
pub fn save(path: impl AsRef<Path>, store: &MovieStore) -> Result<(), CodecError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for movie in store.iter() {
        writeln!(
            writer,
            "{}|{}|{}|{:.1}",
            movie.title(),
            movie.director(),
            movie.year(),
            movie.rating()
        )?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), records = store.len(), "saved catalog");
    Ok(())
}

/// Read records from `path` into `store`, returning how many loaded.
///
/// An unopenable file is the expected first-run state: it logs a
/// warning and returns `Ok(0)` without touching the store. Malformed
/// lines (fewer than three fields, unparsable year, or fields that
/// fail record validation) are skipped with a diagnostic, never fatal.
///
/// The rating field is restored when present and on-scale. Earlier
/// versions of the catalog dropped it on load even though `save`
/// always wrote it; lines with a missing or bad rating therefore load
/// as unrated rather than being rejected.
pub fn load(path: impl AsRef<Path>, store: &mut MovieStore) -> Result<usize, CodecError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "catalog file not readable; starting with an empty catalog"
            );
            return Ok(0);
        }
    };

    let reader = BufReader::new(file);
    let mut loaded = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(movie) => {
                store.insert(movie);
                loaded += 1;
            }
            Err(reason) => {
                tracing::warn!(line = line_no + 1, reason, "skipping malformed catalog line");
            }
        }
    }

    tracing::info!(path = %path.display(), records = loaded, "loaded catalog");
    Ok(loaded)
}

fn parse_line(line: &str) -> Result<Movie, &'static str> {
    let mut fields = line.splitn(4, '|');
    let (Some(title), Some(director), Some(year)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err("expected at least three '|'-separated fields");
    };

    let year: i32 = year.trim().parse().map_err(|_| "year is not an integer")?;
    let mut movie = Movie::new(title, director, year).map_err(|_| "record failed validation")?;

    // An off-scale or unparsable rating leaves the record unrated.
    if let Some(rating) = fields.next()
        && let Ok(rating) = rating.trim().parse::<f32>()
    {
        let _ = movie.set_rating(rating);
    }

    Ok(movie)
}
