pub mod carray;
pub mod converter;
pub mod file_watcher;
pub mod image_io;
pub mod output;

pub use carray::{sanitize_c_name, write_c_array};
pub use converter::{ConversionJob, ConversionService, PendingConversion};
pub use file_watcher::{FileChangeEvent, FileWatcher};
pub use image_io::{decode_png, encode_preview_png, read_png, write_preview, DecodedImage};
pub use output::{write_outputs, OutputFormat, OutputPlan, OutputWriter, WriteReport};
