//! Output adapters: where frames end up.

pub mod gpu;
