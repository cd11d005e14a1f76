//! Build-time dependency catalog surfaced by `uname -a`.

include!(concat!(env!("OUT_DIR"), "/version_catalog.rs"));
