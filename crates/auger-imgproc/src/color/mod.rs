mod hls;

pub use hls::{bgr_from_hls, hls_from_bgr};
