use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::debug;

use crate::BatchError;

use super::item::{ItemReader, ItemWriter};

/// Outcome of a completed step.
///
/// Counts and timing are only reported for successful runs; a failed run
/// surfaces the underlying [`BatchError`] from [`Step::execute`] instead.
pub struct StepResult {
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
    pub read_count: usize,
    pub write_count: usize,
}

/// A single read/write phase: drains the reader chunk by chunk into the
/// writer. There is no fault tolerance: the first reader or writer error
/// aborts the step.
pub struct Step<'a, R> {
    name: String,
    reader: &'a dyn ItemReader<R>,
    writer: &'a dyn ItemWriter<R>,
    chunk_size: usize,
    read_count: Cell<usize>,
    write_count: Cell<usize>,
}

impl<'a, R> Step<'a, R> {
    /// Executes the step.
    ///
    /// The writer is opened before the first chunk and closed again on both
    /// the success and the error path, so buffered output reaches its
    /// destination even when a chunk fails mid-run.
    pub fn execute(&self) -> Result<StepResult, BatchError> {
        let start = Instant::now();

        debug!("Start of step: {}", self.name);

        self.writer.open()?;

        let outcome = self.write_all_chunks();
        let close_outcome = self.writer.close();

        outcome?;
        close_outcome?;

        debug!("End of step: {}", self.name);

        Ok(StepResult {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            read_count: self.read_count.get(),
            write_count: self.write_count.get(),
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    fn write_all_chunks(&self) -> Result<(), BatchError> {
        let mut chunk: Vec<R> = Vec::with_capacity(self.chunk_size);

        loop {
            let reader_exhausted = self.read_chunk(&mut chunk)?;

            if !chunk.is_empty() {
                self.writer.write(&chunk)?;
                self.writer.flush()?;
                self.inc_write_count(chunk.len());
                debug!("Chunk written: {} items", chunk.len());
            }

            if reader_exhausted {
                return Ok(());
            }
        }
    }

    /// Fills `chunk` up to the chunk size. Returns `true` once the reader
    /// has no more items.
    fn read_chunk(&self, chunk: &mut Vec<R>) -> Result<bool, BatchError> {
        chunk.clear();

        while chunk.len() < self.chunk_size {
            match self.reader.read() {
                Some(Ok(item)) => {
                    chunk.push(item);
                    self.inc_read_count();
                }
                Some(Err(error)) => return Err(error),
                None => return Ok(true),
            }
        }

        Ok(false)
    }

    fn inc_read_count(&self) {
        self.read_count.set(self.read_count.get() + 1);
    }

    fn inc_write_count(&self, count: usize) {
        self.write_count.set(self.write_count.get() + count);
    }
}

pub struct StepBuilder<'a, R> {
    name: String,
    reader: Option<&'a dyn ItemReader<R>>,
    writer: Option<&'a dyn ItemWriter<R>>,
    chunk_size: usize,
}

impl<'a, R> StepBuilder<'a, R> {
    pub fn new(name: &str) -> StepBuilder<'a, R> {
        Self {
            name: name.to_owned(),
            reader: None,
            writer: None,
            chunk_size: 1,
        }
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<R>) -> StepBuilder<'a, R> {
        self.reader = Some(reader);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<R>) -> StepBuilder<'a, R> {
        self.writer = Some(writer);
        self
    }

    pub fn chunk(mut self, chunk_size: usize) -> StepBuilder<'a, R> {
        self.chunk_size = chunk_size;
        self
    }

    pub fn build(self) -> Step<'a, R> {
        Step {
            name: self.name,
            reader: self.reader.expect("reader is required"),
            writer: self.writer.expect("writer is required"),
            chunk_size: self.chunk_size,
            read_count: Cell::new(0),
            write_count: Cell::new(0),
        }
    }
}
