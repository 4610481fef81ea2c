use crate::error::BatchError;

pub trait ItemReader<R> {
    /// Produces the next item, `None` once the source is exhausted.
    fn read(&self) -> Option<Result<R, BatchError>>;
}

pub trait ItemWriter<W> {
    /// Writes one chunk of items.
    fn write(&self, items: &[W]) -> Result<(), BatchError>;

    fn flush(&self) -> Result<(), BatchError> {
        Ok(())
    }

    fn open(&self) -> Result<(), BatchError> {
        Ok(())
    }

    fn close(&self) -> Result<(), BatchError> {
        Ok(())
    }
}
