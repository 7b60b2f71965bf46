use crate::error::BookError;

/// Result of a single read: `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<R> = Result<Option<R>, BookError>;

/// Result of writing or flushing items.
pub type ItemWriterResult = Result<(), BookError>;

/// Retrieves input one item at a time.
///
/// A reader hands back recoverable errors for a single item and keeps going on
/// the next call. A fatal error (see [`BookError::is_fatal`]) means the source
/// cannot be read any further.
pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

/// Output of a step, one batch of items at a time.
pub trait ItemWriter<W> {
    fn write(&self, items: &[W]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}
