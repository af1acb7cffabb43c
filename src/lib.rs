/*!
Owned byte buffer that keeps track of both filled and allocated space.

[`ByteBuffer`](struct.ByteBuffer.html) can be filled from slices or straight from any [`Read`]er:

```no_run
use byte_buffer::ByteBuffer;
use std::fs::File;

# fn main() -> byte_buffer::Result<()> {
let mut file = File::open("data.bin")?;

let mut buf = ByteBuffer::with_capacity(4096)?;
while buf.overwrite_from(&mut file, 4096)? != 0 {
	// storage allocated above is reused for every chunk
	let _ = buf.data();
}
# Ok(())
# }
```

Storage grows to exact fit: each time new data doesn't fit,
buffer is reallocated to precisely the size that operation needs.
Use [`reserve()`](struct.ByteBuffer.html#method.reserve) upfront if you expect lots of small appends.

[`Read`]: std::io::Read
*/

#[macro_use]
extern crate quick_error;

mod buffer;
pub use buffer::*;

mod error;
pub use error::*;
