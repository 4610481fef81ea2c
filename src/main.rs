use std::{env, process};

use log::info;

use contact_seeder::{
    cli,
    core::step::{Step, StepBuilder},
    error::BatchError,
    item::{
        coverage::CoverageWriter,
        csv::csv_writer::CsvItemWriterBuilder,
        fake::contact_reader::{Contact, ContactReaderBuilder},
    },
};

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run() -> Result<(), BatchError> {
    let count = cli::resolve_count(env::args().skip(1))?;
    let output_file = cli::output_file_name(count, &mut rand::rng());

    println!("Generating {} test contacts...", count);

    let reader = ContactReaderBuilder::new().number_of_items(count).build();

    let csv_writer = CsvItemWriterBuilder::new()
        .has_headers(true)
        .from_path(&output_file)?;
    let writer = CoverageWriter::new(&csv_writer);

    let step: Step<Contact> = StepBuilder::new("generate-contacts")
        .reader(&reader)
        .writer(&writer)
        .chunk(1000)
        .build();

    let result = step.execute()?;
    info!(
        "Step '{}' finished in {:?}",
        step.get_name(),
        result.duration
    );

    println!(
        "Generated {} contacts in '{}'",
        result.write_count, output_file
    );
    println!();
    println!("{}", writer.report());

    Ok(())
}
