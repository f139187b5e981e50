//! Reusable text buffers.

use core::ops::{Deref, DerefMut};

use parking_lot::Mutex;

/// A pool of `String` buffers shared by concurrent invocations.
///
/// A buffer is handed to exactly one holder at a time and comes back to the
/// pool when its [`PooledBuffer`] guard is dropped, on every exit path.
/// Buffers are cleared both on return and on reuse.
#[derive(Debug)]
pub struct BufferPool {
    idle: Mutex<Vec<String>>,
    max_idle: usize,
    buffer_capacity: usize,
}

impl BufferPool {
    /// Capacity of freshly allocated buffers.
    pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

    /// A pool keeping at most `max_idle` buffers around.
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Set the capacity of freshly allocated buffers.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Take a cleared buffer, allocating one if the pool is empty.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let recycled = self.idle.lock().pop();
        let buffer = match recycled {
            Some(mut buffer) => {
                buffer.clear();
                buffer
            }
            None => String::with_capacity(self.buffer_capacity),
        };
        PooledBuffer { pool: self, buffer }
    }

    /// Number of buffers waiting for reuse.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn release(&self, mut buffer: String) {
        buffer.clear();
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(buffer);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Exclusive access to a pooled buffer.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buffer: String,
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(core::mem::take(&mut self.buffer));
    }
}
