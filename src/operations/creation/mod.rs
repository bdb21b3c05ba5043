mod make_lens;

pub use make_lens::{LensParameters, MakeLens};
