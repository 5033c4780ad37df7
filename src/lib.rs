//! Thin, non-owning views over character buffers.
//!
//! A span is a (base, length) pair borrowing a contiguous buffer. It is used
//! to pass character data into or out of functions without copying: ownership
//! of the underlying buffer is never transferred, and the borrow checker
//! ensures the buffer outlives every span derived from it.
//!
//! ```
//! # use bytespan::StrSpan;
//! let buf = String::from("scheme://host/path?query");
//! let view = StrSpan::new(&buf);
//!
//! // No copy - the span only remembers where the range starts and how long it is
//! let host = view.slice(9..13);
//! assert_eq!("host", &*host);
//!
//! // Spans are Copy - duplicating one duplicates the handle, never the bytes
//! let copy = host;
//! assert_eq!(host, copy);
//!
//! // Equality is by content, not by buffer identity
//! let other = StrSpan::new("host");
//! assert_eq!(host, other);
//! ```

mod bytespan;
mod strspan;

pub use {bytespan::ByteSpan, strspan::StrSpan};
