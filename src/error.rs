use std::collections::TryReserveError;
use std::io;

quick_error! {
	/// Errors returned by fallible [`ByteBuffer`](crate::ByteBuffer) operations
	#[derive(Debug)]
	pub enum Error {
		/// Allocator refused to provide new storage; buffer is left as it was.
		Alloc(err: TryReserveError) {
			from()
			display("failed to allocate buffer storage: {}", err)
			cause(err)
		}
		/// Kept data plus requested amount does not fit into `usize`.
		Overflow(len: usize, additional: usize) {
			display("requested capacity overflows: {} + {} bytes", len, additional)
		}
		/// Source stream failed with something other than `Interrupted`.
		Io(err: io::Error) {
			from()
			display("failed to read from source: {}", err)
			cause(err)
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

// for `io::Write`, which can only report `io::Error`
impl From<Error> for io::Error {
	fn from(err: Error) -> io::Error {
		match err {
			Error::Io(err) => err,
			err => io::Error::new(io::ErrorKind::OutOfMemory, err),
		}
	}
}
