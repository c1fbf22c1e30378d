#![doc = r#"
Re-exports everything needed to decode a chart file

```rust
use beatix::prelude::*;
```
"#]

pub use crate::chart::*;
pub use crate::reader::*;

#[cfg(feature = "cover-image")]
pub use crate::cover_image::*;
