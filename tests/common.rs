#![cfg(all(
    feature = "std",
    feature = "gga",
    feature = "vtg",
    feature = "xte",
    feature = "trimble",
    feature = "rmc"
))]

use std::path::Path;

use csv::ReaderBuilder;
use furrow::{
    avec::FromFixes,
    sans::{CrossTrack, Decoder, Position, Recommended, Velocity},
};

const PATH: &str = "fixtures/field-run.nmea";

#[test]
fn decode_slice_field_run() {
    let data = std::fs::read(PATH).unwrap();
    let mut decoder = Decoder::new();
    let mut validator = Validator::new(PATH);

    let count = furrow::avec::decode_slice(&data, &mut decoder, &mut validator);

    assert_eq!(count, 11);
    validator.finish();
}

#[test]
fn decode_slice_field_run_in_pieces() {
    let data = std::fs::read(PATH).unwrap();
    let mut decoder = Decoder::new();
    let mut validator = Validator::new(PATH);

    let count: usize = data
        .chunks(7)
        .map(|chunk| furrow::avec::decode_slice(chunk, &mut decoder, &mut validator))
        .sum();

    assert_eq!(count, 11);
    validator.finish();
}

#[test]
fn decode_reader_field_run() {
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut decoder = Decoder::new();
    let mut validator = Validator::new(PATH);

    let count = furrow::avec::decode_reader(&mut file, &mut decoder, &mut validator).unwrap();

    assert_eq!(count, 11);
    validator.finish();
}

#[test]
#[cfg(feature = "stats")]
fn decode_reader_field_run_stats() {
    let data = std::fs::read(PATH).unwrap();
    let mut decoder = Decoder::new();

    furrow::avec::decode_reader(&mut data.as_slice(), &mut decoder, &mut Ignore).unwrap();

    let stats = decoder.stats();
    assert_eq!(stats.characters as usize, data.len());
    assert_eq!(stats.passed, 11);
    assert_eq!(stats.failed, 3);
}

struct Ignore;

impl FromFixes for Ignore {}

/// Checks published groups against the rows of an expectation file.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn next(&mut self, kind: &str) -> Vec<String> {
        let mut row = self.0.remove(0);
        assert_eq!(row.remove(0), kind);
        row
    }

    fn finish(&self) {
        assert!(self.0.is_empty(), "{} groups not published", self.0.len());
    }
}

fn assert_close<T: Into<f64>>(found: Option<T>, expected: &str) {
    let found = found.map(Into::into).unwrap();
    let expected: f64 = expected.parse().unwrap();
    assert!(
        (found - expected).abs() < 1e-4,
        "found {found}, expected {expected}"
    );
}

impl FromFixes for Validator {
    fn add_position(&mut self, position: &Position) {
        let row = self.next("position");
        assert_close(position.time, &row[0]);
        assert_close(position.latitude, &row[1]);
        assert_close(position.longitude, &row[2]);
        assert_close(position.altitude, &row[3]);
        assert_eq!(position.quality.unwrap().to_string(), row[4]);
    }

    fn add_velocity(&mut self, velocity: &Velocity) {
        let row = self.next("velocity");
        assert_close(velocity.course, &row[0]);
        assert_close(velocity.speed, &row[1]);
    }

    fn add_cross_track(&mut self, cross_track: &CrossTrack) {
        let row = self.next("cross_track");
        assert_close(cross_track.xte, &row[0]);
    }

    fn add_recommended(&mut self, recommended: &Recommended) {
        let row = self.next("recommended");
        assert_close(recommended.time, &row[0]);
        assert_eq!(recommended.valid.unwrap().to_string(), row[1]);
        assert_close(recommended.latitude, &row[2]);
        assert_close(recommended.longitude, &row[3]);
        assert_close(recommended.speed, &row[4]);
        assert_close(recommended.course, &row[5]);
        assert_eq!(recommended.date, Some(row[6].parse().unwrap()));
    }

    fn add_other(&mut self) {
        self.next("other");
    }
}
