// ============================================================================
// OPS MODULE: pure image operations, no file I/O
// ============================================================================
//
//   recolor.rs: force visible pixels to pure white, preserve alpha
//   pad.rs:     resize geometry + centered composition onto a transparent
//               square canvas
// ============================================================================

pub mod pad;
pub mod recolor;
