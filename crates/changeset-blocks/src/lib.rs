//! Block splicing for manifest files.
//!
//! A *block* is a column-zero `key:` line plus every indented line that
//! follows it. Splicing removes the existing block for a key (if any) and
//! appends a freshly rendered one:
//!
//! ```text
//! foo: 1                      foo: 1
//! manifest:                   bar: 2
//!   - a          ──────▶      manifest:
//!   - b                         - x
//! bar: 2                        - y
//! ```
//!
//! The document is scanned line by line; it is never parsed as YAML, so
//! comments, anchors and formatting outside the spliced block survive as-is.
//!
//! Every splice also rewrites `manifestOnly: false` to `manifestOnly: true`
//! (see [`flags`]).

pub mod flags;
pub mod splice;

pub use flags::normalize_manifest_only;
pub use splice::{is_key_header, remove_block, render_block, splice_block};
