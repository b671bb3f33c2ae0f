//! Forward-only read cursor over an in-memory MDL buffer.

use crate::error::{Error, Result};

/// Tracks how much of the input has been consumed.
///
/// Records are taken whole: a record is either fully available and the
/// cursor advances past it, or the read fails with
/// [`Error::InsufficientData`] and the cursor does not move.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Take the next `len` bytes as one record named `record`.
    pub fn take(&mut self, record: &'static str, len: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(Error::InsufficientData {
                record,
                offset: self.position,
                available,
                required: len,
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Take `count` records of `size` bytes each as one contiguous slice.
    pub fn take_array(
        &mut self,
        record: &'static str,
        count: usize,
        size: usize,
    ) -> Result<&'a [u8]> {
        self.take(record, count.saturating_mul(size))
    }

    /// Consume everything left.
    pub fn rest(&mut self) -> &'a [u8] {
        let start = self.position;
        self.position = self.data.len();
        &self.data[start..]
    }

    /// Capacity hint for `count` records of `size` bytes, bounded by what is
    /// actually left so corrupt counts cannot trigger huge allocations.
    pub fn capacity_hint(&self, count: usize, size: usize) -> usize {
        count.min(self.remaining() / size.max(1))
    }
}
