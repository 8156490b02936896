pub mod client;
pub mod tesseract;
