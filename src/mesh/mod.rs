pub mod normal;
pub mod stl;

pub use normal::{normal, outward_normal};
pub use stl::{encode, estimate_stl_size, read_back, verify, write_ascii, write_stl};
