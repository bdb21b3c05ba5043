mod sample_surface;

pub use sample_surface::SampleSurface;
