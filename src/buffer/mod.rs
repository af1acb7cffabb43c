use std::fmt;
use std::io;

use log::trace;

use crate::{Error, Result};

mod fill;

/**
Owned, growable region of bytes that keeps track of how much of it is actually filled.

Unlike `Vec<u8>`, growth is exact-fit: whenever new data does not fit into the free part
of the allocation, storage is reallocated to precisely the size needed for that operation,
never more. Capacity is never given back either: [`clear()`](#method.clear) and smaller
[`overwrite()`](#method.overwrite)s reuse existing storage, so a single buffer can be
refilled over and over without touching the allocator.

```
use byte_buffer::ByteBuffer;

# fn main() -> byte_buffer::Result<()> {
let mut buf = ByteBuffer::new();
buf.append(&[1, 2])?;
buf.append(&[3])?;
assert_eq!(buf.capacity(), 3);

buf.reserve(10)?;
buf.append(&[4, 5])?;
assert_eq!(buf.data(), &[1, 2, 3, 4, 5]);
assert_eq!(buf.capacity(), 10);

buf.overwrite(&[9])?;
assert_eq!(buf.data(), &[9]);
assert_eq!(buf.capacity(), 10);
# Ok(())
# }
```
*/
pub struct ByteBuffer {
	/*
	|xxxxxxxx........|
	 |      |        |buf.len() (capacity)
	 |      |len
	 |data()

	`buf` is always fully initialized, hence `buf.len()` is what we call capacity here;
	whatever spare room `Vec` itself might hold beyond that is never used.
	*/
	buf: Vec<u8>,
	len: usize,
}

// allocate exactly `cap` bytes without touching any existing storage
fn allocate(cap: usize) -> Result<Vec<u8>> {
	let mut buf = Vec::new();
	buf.try_reserve_exact(cap)?;
	buf.resize(cap, 0);
	Ok(buf)
}

impl ByteBuffer {
	/// Empty buffer that owns no allocation.
	pub const fn new() -> Self {
		ByteBuffer {
			buf: Vec::new(),
			len: 0,
		}
	}

	/// Empty buffer with exactly `cap` bytes of storage already allocated.
	pub fn with_capacity(cap: usize) -> Result<Self> {
		let mut buf = Self::new();
		buf.reserve(cap)?;
		Ok(buf)
	}

	/**
	Make sure the buffer can hold at least `cap` bytes.

	Reallocates to exactly `cap` bytes if current capacity is smaller, keeping filled data intact.
	Does nothing otherwise: buffers never shrink.
	*/
	pub fn reserve(&mut self, cap: usize) -> Result<()> {
		if self.capacity() < cap {
			self.reallocate(cap, true)?;
		}
		Ok(())
	}

	/// Replace buffer contents with `data`, reusing current storage if it's large enough.
	pub fn overwrite(&mut self, data: &[u8]) -> Result<()> {
		self.place(data, false)
	}

	/// Add `data` past the end of filled part of the buffer.
	pub fn append(&mut self, data: &[u8]) -> Result<()> {
		self.place(data, true)
	}

	/// Filled part of the buffer.
	pub fn data(&self) -> &[u8] {
		&self.buf[..self.len]
	}

	/// Amount of filled bytes.
	pub fn size(&self) -> usize {
		self.len
	}

	/// Amount of allocated bytes, filled or not.
	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	pub fn empty(&self) -> bool {
		self.len == 0
	}

	/// Forget filled data while keeping the allocation around for reuse.
	pub fn clear(&mut self) {
		self.len = 0;
	}

	/**
	Move contents out, leaving this buffer empty and without an allocation.

	Storage is handed over as is, spare capacity included; nothing is copied.
	*/
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Filled data as a `Vec`, consuming the buffer.
	pub fn into_vec(self) -> Vec<u8> {
		let mut buf = self.buf;
		buf.truncate(self.len);
		buf
	}

	/*
	swap storage for a new one of exactly `cap` bytes,
	carrying over filled data only if asked to

	new storage is allocated before old one is released,
	so on failure the buffer is left as it was
	*/
	fn reallocate(&mut self, cap: usize, keep: bool) -> Result<()> {
		let mut buf = allocate(cap)?;
		let len = if keep { std::cmp::min(self.len, cap) } else { 0 };
		buf[..len].copy_from_slice(&self.buf[..len]);
		trace!(
			"reallocated buffer: {} -> {} bytes, {} bytes carried over",
			self.capacity(), cap, len,
		);
		self.buf = buf;
		self.len = len;
		Ok(())
	}

	/*
	make room for `amount` more bytes either after filled data (`keep`)
	or from the very start of the storage (`!keep`), reallocating to exact fit if needed

	returns offset at which new data goes;
	`len` is left alone, it's up to the caller to mark new data as filled
	*/
	pub(crate) fn prepare(&mut self, amount: usize, keep: bool) -> Result<usize> {
		let offset = if keep { self.len } else { 0 };
		if self.capacity() - offset < amount {
			let cap = offset.checked_add(amount)
				.ok_or(Error::Overflow(offset, amount))?;
			self.reallocate(cap, keep)?;
		}
		Ok(offset)
	}

	fn place(&mut self, data: &[u8], keep: bool) -> Result<()> {
		let offset = self.prepare(data.len(), keep)?;
		let end = offset + data.len();
		self.buf[offset..end].copy_from_slice(data);
		self.len = end;
		Ok(())
	}

	// part of the storage right past filled data
	pub(crate) fn appendable(&mut self) -> &mut [u8] {
		&mut self.buf[self.len..]
	}

	// attach `amount` bytes of `appendable()` to filled data
	pub(crate) fn grow(&mut self, amount: usize) {
		debug_assert!(self.len + amount <= self.capacity());
		self.len += amount;
	}

	pub(crate) fn truncate(&mut self, len: usize) {
		self.len = std::cmp::min(self.len, len);
	}
}

impl Default for ByteBuffer {
	fn default() -> Self {
		Self::new()
	}
}

// tight copy: capacity of the clone matches filled size of the original
impl Clone for ByteBuffer {
	fn clone(&self) -> Self {
		ByteBuffer::from(self.data())
	}
}

impl From<&[u8]> for ByteBuffer {
	fn from(data: &[u8]) -> Self {
		ByteBuffer {
			buf: data.to_vec(),
			len: data.len(),
		}
	}
}

impl AsRef<[u8]> for ByteBuffer {
	fn as_ref(&self) -> &[u8] {
		self.data()
	}
}

impl PartialEq for ByteBuffer {
	fn eq(&self, other: &Self) -> bool {
		self.data() == other.data()
	}
}
impl Eq for ByteBuffer {}

impl fmt::Debug for ByteBuffer {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("ByteBuffer")
			.field("size", &self.size())
			.field("capacity", &self.capacity())
			.field("data", &self.data())
			.finish()
	}
}

/// Appends everything it's given, growing storage the same way [`append()`](#method.append) does.
impl io::Write for ByteBuffer {
	fn write(&mut self, data: &[u8]) -> io::Result<usize> {
		self.append(data)?;
		Ok(data.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
