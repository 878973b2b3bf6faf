#![cfg(feature = "std")]

use std::fs::File;

use chrono::Utc;
use csv::ReaderBuilder;
use heavyweather::{
    EpochShift, decode, format,
    supplier::{reader, slice},
};

const PATH: &str = "fixtures/history.dat";

fn expected() -> Vec<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path("fixtures/history.tsv")
        .unwrap();

    reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

fn validate(index: u64, raw: heavyweather::RawRecord, expected: &[String]) {
    let record = decode(raw);
    let time = record.calendar_timestamp_in(EpochShift::default(), &Utc);
    let row = format::compact(&record, &time);

    let columns: Vec<_> = row.split(format::SEPARATOR).collect();
    assert_eq!(columns, expected, "record {index}");
}

#[test]
fn get_record_slice() {
    let data = std::fs::read(PATH).unwrap();
    let expected = expected();

    for (i, expected) in expected.iter().enumerate() {
        let index = i as u64 + 1;
        validate(index, slice::get_record(&data, index).unwrap(), expected);
    }

    let past = expected.len() as u64 + 1;
    assert_eq!(
        slice::get_record(&data, past),
        Err(slice::Error::EndOfSlice { index: past })
    );
}

#[test]
fn get_record_reader() {
    let mut file = File::open(PATH).unwrap();
    let expected = expected();

    // Out of order, to exercise seeking.
    for (i, expected) in expected.iter().enumerate().rev() {
        let index = i as u64 + 1;
        validate(index, reader::get_record(&mut file, index).unwrap(), expected);
    }

    let past = expected.len() as u64 + 1;
    assert!(matches!(
        reader::get_record(&mut file, past),
        Err(reader::Error::EndOfFile { index }) if index == past
    ));
}

#[test]
fn open_record() {
    let raw = reader::open_record(PATH, 3).unwrap();
    let record = decode(raw);

    assert_eq!(record.pressure, Some(998.7));
    assert_eq!(record.outdoor_temperature, Some(-4.5));
    assert_eq!(record.wind_speed(), Some(10.5));
}

#[test]
fn verbose_report_of_marked_record() {
    let record = decode(reader::open_record(PATH, 2).unwrap());
    let time = record.calendar_timestamp_in(EpochShift::default(), &Utc);

    let expected = [
        "Date:                 Fri Aug 29 12:00:00 2003",
        "Pressure:              no data",
        "Indoor  temperature:   22.1 °C",
        "Indoor  humidity:      no data",
        "Outdoor temperature:   no data",
        "Outdoor humidity:      no data",
        "Dew point:             no data",
        "Wind chill:            no data",
        "Wind speed:            no data",
        "Wind direction:        no data",
        "Total rainfall:        12.4  mm",
    ];

    assert_eq!(format::verbose(&record, &time), expected.join("\n"));
}
