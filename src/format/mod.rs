//! Sample formats and stream specifications.

mod sample_format;
pub use sample_format::SampleFormat;

mod spec;
pub use spec::StreamSpec;
pub(crate) use spec::validate_rate;

mod work_format;
pub use work_format::WorkFormat;
