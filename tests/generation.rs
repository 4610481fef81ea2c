use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

use contact_seeder::{
    core::{
        item::{ItemReader, ItemWriter},
        step::{Step, StepBuilder},
    },
    item::{
        coverage::CoverageWriter,
        csv::csv_writer::CsvItemWriterBuilder,
        fake::contact_reader::{Contact, ContactReaderBuilder, COUNTRY_CODES, JOB_TITLES},
    },
};

const EXPECTED_HEADER: &str = "firstName,lastName,email,jobTitle,countryCode,companyName";

#[test]
fn csv_has_header_and_one_line_per_contact() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("contacts.csv");

    let reader = ContactReaderBuilder::new()
        .number_of_items(50)
        .rng(StdRng::seed_from_u64(1))
        .build();
    let writer = CsvItemWriterBuilder::new()
        .has_headers(true)
        .from_path(&path)?;

    let step: Step<Contact> = StepBuilder::new("to-file")
        .reader(&reader)
        .writer(&writer)
        .chunk(16)
        .build();
    let result = step.execute()?;

    assert_eq!(result.read_count, 50);
    assert_eq!(result.write_count, 50);

    let content = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(lines[0], EXPECTED_HEADER);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());
    for record in csv_reader.records() {
        let record = record?;
        assert_eq!(record.len(), 6);
        assert!(!record[0].is_empty());
        assert!(!record[1].is_empty());
        assert!(record[2].contains('@'));
    }

    Ok(())
}

#[test]
fn round_trip_recovers_generated_contacts() -> Result<()> {
    let reader = ContactReaderBuilder::new()
        .number_of_items(200)
        .rng(StdRng::seed_from_u64(2))
        .build();

    let mut generated = Vec::new();
    while let Some(result) = reader.read() {
        generated.push(result?);
    }

    let writer = CsvItemWriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);
    writer.write(&generated)?;
    let data = String::from_utf8(writer.into_inner()?)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let parsed: Vec<Contact> = csv_reader
        .deserialize()
        .collect::<std::result::Result<_, _>>()?;

    assert_eq!(parsed, generated);
    Ok(())
}

#[test]
fn optional_values_come_from_the_fixed_pools() -> Result<()> {
    let reader = ContactReaderBuilder::new()
        .number_of_items(500)
        .rng(StdRng::seed_from_u64(4))
        .build();

    while let Some(result) = reader.read() {
        let contact = result?;
        if !contact.job_title.is_empty() {
            assert!(JOB_TITLES.contains(&contact.job_title.as_str()));
        }
        if !contact.country_code.is_empty() {
            assert!(COUNTRY_CODES.contains(&contact.country_code.as_str()));
        }
    }

    Ok(())
}

// With n = 10_000 the binomial standard deviation is 0.4 points, so the
// 78..=82 band sits five sigmas around the expected 80%.
#[test]
fn optional_field_coverage_is_close_to_eighty_percent() -> Result<()> {
    let total = 10_000;

    let reader = ContactReaderBuilder::new()
        .number_of_items(total)
        .rng(StdRng::seed_from_u64(5))
        .build();
    let csv_writer = CsvItemWriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);
    let writer = CoverageWriter::new(&csv_writer);

    let step: Step<Contact> = StepBuilder::new("coverage")
        .reader(&reader)
        .writer(&writer)
        .chunk(1000)
        .build();
    step.execute()?;

    let report = writer.report();
    assert_eq!(report.total, total);

    for count in [
        report.with_job_title,
        report.with_country_code,
        report.with_company_name,
    ] {
        let percentage = count as f64 / total as f64 * 100.0;
        assert!(
            (78.0..=82.0).contains(&percentage),
            "coverage out of band: {percentage}%"
        );
    }

    Ok(())
}
