#![doc = r#"
Beatable chart file structures designed for humans

A chart file is a small binary container bundling one playable song: an
audio blob, raw cover art pixels, and length-prefixed song metadata. This
crate decodes that container into owned, strongly typed data, with every
malformed-input path surfaced as an ordinary error value.

# Quick start

```rust
use beatix::prelude::*;

let bytes: &[u8] = &[
    0x62, // magic
    1, 0, 0, 0, // version
    0, 0, 0, 0, // audio blob size
    0, 0, 0, 0, // cover blob size
    0, 0, 0, 0, // texture format
    1, 0, 0, 0, // width
    1, 0, 0, 0, // height
    0, // id length
    0, // title length
    0, // artist length
    0, 0, 0, 0, // total length in seconds
    0, 0, 0, 0, // audio start offset
];

let chart = ChartFile::parse(bytes)?;
assert_eq!(chart.version(), 1);
assert!(!chart.has_audio());
# Ok::<(), beatix::reader::DecodeError>(())
```

Anything that does not begin with the magic byte `0x62` is rejected up
front, so a caller can probe unknown files and fall back to other
handlers:

```rust
use beatix::prelude::*;

let err = ChartFile::parse(b"RIFF....").unwrap_err();
assert!(err.is_not_a_chart_file());
```

# Features

- `std` (default): use the standard library. Without it the crate is
  `no_std` + `alloc`.
- `cover-image`: convert the decoded cover art into an in-memory PNG via
  the [`cover_image`] module. Implies `std`.
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod chart;
pub use chart::*;

pub mod reader;

#[cfg(feature = "cover-image")]
pub mod cover_image;

pub mod prelude;
