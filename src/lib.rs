/*!
 # Contact Seeder

 A small batch tool that synthesizes CSV files of fake contact records
 (name, email, job title, country code, company) for manually exercising
 a lead-import feature.

 ## Core Concepts

 The library is a miniature batch pipeline:

 - **ItemReader:** An abstraction that represents the retrieval of input,
   one item at a time. [`ContactReader`](item::fake::contact_reader::ContactReader)
   synthesizes fake contacts from an injected random source.
 - **ItemWriter:** An abstraction that represents the output, one chunk of
   items at a time. [`CsvItemWriter`](item::csv::csv_writer::CsvItemWriter)
   serializes chunks to CSV; [`CoverageWriter`](item::coverage::CoverageWriter)
   decorates another writer and tallies optional-field coverage.
 - **Step:** Drives the read/write loop until the reader is exhausted.
   Any reader or writer error aborts the step.

 ## Getting Started

```rust
use contact_seeder::{
    core::step::{Step, StepBuilder},
    error::BatchError,
    item::{
        csv::csv_writer::CsvItemWriterBuilder,
        fake::contact_reader::{Contact, ContactReaderBuilder},
    },
};

fn main() -> Result<(), BatchError> {
    let reader = ContactReaderBuilder::new().number_of_items(5).build();

    let writer = CsvItemWriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);

    let step: Step<Contact> = StepBuilder::new("demo")
        .reader(&reader)
        .writer(&writer)
        .chunk(5)
        .build();

    let result = step.execute()?;
    assert_eq!(result.read_count, 5);
    assert_eq!(result.write_count, 5);

    Ok(())
}
```

 The `contact-seeder` binary wires the same pieces together behind a
 one-argument CLI: `contact-seeder [count]` writes
 `test_contacts_<count>_<random 5-letter suffix>.csv` to the working
 directory and prints coverage statistics for the optional fields.
*/

/// Core module for batch operations
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of item readers / writers (contact synthesizer, csv writer, coverage)
pub mod item;

/// Command-line argument resolution and output file naming
pub mod cli;
