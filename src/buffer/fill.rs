use std::io::{ErrorKind, Read};

use log::debug;

use super::ByteBuffer;
use crate::Result;

impl ByteBuffer {
	/**
	Replace buffer contents with up to `n` bytes read from `src`.

	Storage is grown to exactly `n` bytes if it can't hold that much already,
	and `src` is read right into it.
	Reading stops at EOF, so buffer might end up holding less than `n` bytes;
	that's not an error, returned amount tells how many bytes were actually read.

	`src` is read from wherever it is positioned now, and is left past the last byte read.
	*/
	pub fn overwrite_from<R: Read>(&mut self, src: R, n: usize) -> Result<usize> {
		self.fill(src, n, false)
	}

	/**
	Append up to `n` bytes read from `src` to the filled data.

	Same as [`overwrite_from()`](#method.overwrite_from), except that room for `n` bytes
	is made past the filled data, which is carried over if storage has to be reallocated.
	*/
	pub fn append_from<R: Read>(&mut self, src: R, n: usize) -> Result<usize> {
		self.fill(src, n, true)
	}

	/*
	bytes are marked as filled as soon as they arrive,
	so if `src` fails halfway through, whatever was read before that is kept
	*/
	fn fill<R: Read>(&mut self, mut src: R, n: usize, keep: bool) -> Result<usize> {
		let offset = self.prepare(n, keep)?;
		self.truncate(offset);

		let mut read = 0;
		while read < n {
			match src.read(&mut self.appendable()[..n - read]) {
				Ok(0) => break, // EOF
				Ok(amount) => {
					self.grow(amount);
					read += amount;
				},
				Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into()),
			}
		}

		if read < n {
			debug!("short read: requested {} bytes, got {}", n, read);
		}
		Ok(read)
	}
}
