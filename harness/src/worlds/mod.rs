//! Problem instantiations the harness runs searches on.

pub mod vacuum;
